/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` (field `database_url` reads
/// `DATABASE_URL`) and call `Config::from_env()` once at startup. Use
/// `#[serde(default = ...)]` for optional settings.
///
/// # Panics
///
/// Panics if any required env var is missing or cannot be deserialized.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Self {
        envy::from_env().expect("failed to load config from environment")
    }

    /// Same as `from_env`, but reads from the given key/value pairs.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
