#![allow(async_fn_in_trait)]

use crate::domain::types::{NewUser, Offer, Order, User};
use crate::error::ApiError;

/// Repository for users.
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id.
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError>;
    /// Insert a user and return the id assigned by the store.
    async fn create(&self, user: &NewUser) -> Result<i32, ApiError>;
    /// Overwrite every column of user `id`, the id included.
    /// Returns `true` if a row was updated.
    async fn replace(&self, id: i32, user: &User) -> Result<bool, ApiError>;
    /// Delete matching rows. Returns the number of rows deleted.
    async fn delete(&self, id: i32) -> Result<u64, ApiError>;
}

/// Repository for orders.
pub trait OrderRepository: Send + Sync {
    /// All orders, ordered by id.
    async fn list(&self) -> Result<Vec<Order>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, ApiError>;
    async fn create(&self, order: &Order) -> Result<(), ApiError>;
    /// Overwrite every column of order `id`, the id included.
    /// Returns `true` if a row was updated.
    async fn replace(&self, id: i32, order: &Order) -> Result<bool, ApiError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for offers.
pub trait OfferRepository: Send + Sync {
    /// All offers, ordered by id.
    async fn list(&self) -> Result<Vec<Offer>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Offer>, ApiError>;
    async fn create(&self, offer: &Offer) -> Result<(), ApiError>;
    /// Overwrite every column of offer `id`, the id included.
    /// Returns `true` if a row was updated.
    async fn replace(&self, id: i32, offer: &Offer) -> Result<bool, ApiError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}
