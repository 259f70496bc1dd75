//! Seed fixture loader.
//!
//! Locates the workspace `data/` directory so tests can seed a store from the
//! same files the service loads at startup, and compare API output against them.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Directory name of the seed files, relative to the workspace root.
pub const SEED_DIR: &str = "data";

/// # Example
/// ```no_run
/// use gigboard_testing::fixture::Fixture;
/// let users = Fixture::load("users.json");
/// assert!(users.is_array());
/// ```
pub struct Fixture;

impl Fixture {
    /// Absolute path of the seed directory.
    ///
    /// Walks up from the calling crate's manifest dir (or the current dir) to
    /// the first ancestor holding `data/users.json`.
    ///
    /// Panics if no such ancestor exists.
    pub fn seed_dir() -> PathBuf {
        let start = std::env::var("CARGO_MANIFEST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::current_dir().unwrap());
        start
            .ancestors()
            .map(|dir| dir.join(SEED_DIR))
            .find(|dir| dir.join("users.json").is_file())
            .unwrap_or_else(|| panic!("no {SEED_DIR}/ directory above {}", start.display()))
    }

    /// Load and parse a seed file, e.g. `"orders.json"`.
    ///
    /// Panics if the file is missing or invalid JSON.
    pub fn load(file_name: &str) -> Value {
        Self::load_from(&Self::seed_dir(), file_name)
    }

    /// Load and parse `dir/file_name`.
    pub fn load_from(dir: &Path, file_name: &str) -> Value {
        let full_path = dir.join(file_name);
        let contents = std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("fixture not found at {}: {}", full_path.display(), e));
        serde_json::from_str(&contents)
            .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", file_name, e))
    }
}
