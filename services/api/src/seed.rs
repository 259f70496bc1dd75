//! Startup seeding: drop and recreate every table, then load the three JSON
//! seed files.
//!
//! All files are parsed before the store is touched, and all rows go in one
//! transaction, so a bad file or a failed insert never leaves a half-filled
//! store behind.

use std::path::{Path, PathBuf};

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, TransactionTrait,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;

use gigboard_api_migration::{Migrator, MigratorTrait};
use gigboard_api_schema::{offers, orders, users};
use gigboard_core::serde::required_nullable;

use crate::domain::types::{Offer, Order, User};
use crate::infra::db::{offer_active_model, order_active_model, user_active_model};

pub const USERS_FILE: &str = "users.json";
pub const ORDERS_FILE: &str = "orders.json";
pub const OFFERS_FILE: &str = "offers.json";

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store: {0}")]
    Store(#[from] DbErr),
}

/// Parsed content of the seed directory, in file order.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    pub offers: Vec<Offer>,
}

// ── Seed file records ────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct UserRecord {
    id: i32,
    #[serde(deserialize_with = "required_nullable")]
    first_name: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    last_name: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    age: Option<i32>,
    #[serde(deserialize_with = "required_nullable")]
    email: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    role: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    phone: Option<String>,
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        Self {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            age: r.age,
            email: r.email,
            role: r.role,
            phone: r.phone,
        }
    }
}

#[derive(Deserialize)]
struct OrderRecord {
    id: i32,
    #[serde(deserialize_with = "required_nullable")]
    name: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    description: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    start_date: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    end_date: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    address: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    price: Option<i32>,
    #[serde(deserialize_with = "required_nullable")]
    customer_id: Option<i32>,
    #[serde(deserialize_with = "required_nullable")]
    executor_id: Option<i32>,
}

impl From<OrderRecord> for Order {
    fn from(r: OrderRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            start_date: r.start_date,
            end_date: r.end_date,
            address: r.address,
            price: r.price,
            customer_id: r.customer_id,
            executor_id: r.executor_id,
        }
    }
}

#[derive(Deserialize)]
struct OfferRecord {
    id: i32,
    #[serde(deserialize_with = "required_nullable")]
    order_id: Option<i32>,
    #[serde(deserialize_with = "required_nullable")]
    executor_id: Option<i32>,
}

impl From<OfferRecord> for Offer {
    fn from(r: OfferRecord) -> Self {
        Self {
            id: r.id,
            order_id: r.order_id,
            executor_id: r.executor_id,
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

fn parse_records<R, T>(path: &Path, contents: &str) -> Result<Vec<T>, SeedError>
where
    R: DeserializeOwned + Into<T>,
{
    let records: Vec<R> = serde_json::from_str(contents).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(records.into_iter().map(Into::into).collect())
}

fn read_records<R, T>(dir: &Path, file_name: &str) -> Result<Vec<T>, SeedError>
where
    R: DeserializeOwned + Into<T>,
{
    let path = dir.join(file_name);
    let contents = std::fs::read_to_string(&path).map_err(|source| SeedError::Read {
        path: path.clone(),
        source,
    })?;
    parse_records::<R, T>(&path, &contents)
}

/// Read and validate the three seed files under `dir`.
pub fn load_seed(dir: &Path) -> Result<SeedData, SeedError> {
    Ok(SeedData {
        users: read_records::<UserRecord, User>(dir, USERS_FILE)?,
        orders: read_records::<OrderRecord, Order>(dir, ORDERS_FILE)?,
        offers: read_records::<OfferRecord, Offer>(dir, OFFERS_FILE)?,
    })
}

// ── Applying ─────────────────────────────────────────────────────────────────

/// Drop and recreate all tables, then insert `data` row by row.
pub async fn apply_seed(db: &DatabaseConnection, data: &SeedData) -> Result<(), SeedError> {
    Migrator::fresh(db).await?;

    let txn = db.begin().await?;
    for user in &data.users {
        users::Entity::insert(user_active_model(user))
            .exec(&txn)
            .await?;
    }
    for order in &data.orders {
        orders::Entity::insert(order_active_model(order))
            .exec(&txn)
            .await?;
    }
    for offer in &data.offers {
        offers::Entity::insert(offer_active_model(offer))
            .exec(&txn)
            .await?;
    }
    // Explicit ids do not advance a Postgres serial; new users must start after the seed.
    if txn.get_database_backend() == DbBackend::Postgres {
        txn.execute_unprepared(
            "SELECT setval(pg_get_serial_sequence('users', 'id'), COALESCE(MAX(id), 0) + 1, false) FROM users",
        )
        .await?;
    }
    txn.commit().await?;
    Ok(())
}

/// Startup entry point: load the seed files from `dir` and reset the store to them.
pub async fn reset_and_seed(db: &DatabaseConnection, dir: &Path) -> Result<(), SeedError> {
    let data = load_seed(dir)?;
    apply_seed(db, &data).await?;
    info!(
        users = data.users.len(),
        orders = data.orders.len(),
        offers = data.offers.len(),
        seed_dir = %dir.display(),
        "store seeded"
    );
    Ok(())
}
