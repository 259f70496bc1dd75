use sea_orm::DatabaseConnection;

use crate::infra::db::{DbOfferRepository, DbOrderRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }

    pub fn offer_repo(&self) -> DbOfferRepository {
        DbOfferRepository {
            db: self.db.clone(),
        }
    }
}
