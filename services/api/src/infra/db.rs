use anyhow::Context as _;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};

use gigboard_api_schema::{offers, orders, users};

use crate::domain::repository::{OfferRepository, OrderRepository, UserRepository};
use crate::domain::types::{NewUser, Offer, Order, User};
use crate::error::ApiError;

/// Turn a write error into `conflict` on a unique/primary key violation,
/// otherwise into an internal error carrying `context`.
fn write_error(err: DbErr, conflict: ApiError, context: &'static str) -> ApiError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict,
        _ => ApiError::Internal(anyhow::Error::new(err).context(context)),
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<i32, ApiError> {
        let am = users::ActiveModel {
            id: NotSet,
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            age: Set(user.age),
            email: Set(user.email.clone()),
            role: Set(user.role.clone()),
            phone: Set(user.phone.clone()),
        };
        let res = users::Entity::insert(am)
            .exec(&self.db)
            .await
            .map_err(|e| write_error(e, ApiError::UserAlreadyExists, "create user"))?;
        Ok(res.last_insert_id)
    }

    async fn replace(&self, id: i32, user: &User) -> Result<bool, ApiError> {
        let res = users::Entity::update_many()
            .set(user_active_model(user))
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| write_error(e, ApiError::UserAlreadyExists, "replace user"))?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<u64, ApiError> {
        let res = users::Entity::delete_many()
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(res.rows_affected)
    }
}

pub(crate) fn user_active_model(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(user.id),
        first_name: Set(user.first_name.clone()),
        last_name: Set(user.last_name.clone()),
        age: Set(user.age),
        email: Set(user.email.clone()),
        role: Set(user.role.clone()),
        phone: Set(user.phone.clone()),
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        age: model.age,
        email: model.email,
        role: model.role,
        phone: model.phone,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, ApiError> {
        let models = orders::Entity::find()
            .order_by_asc(orders::Column::Id)
            .all(&self.db)
            .await
            .context("list orders")?;
        Ok(models.into_iter().map(order_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, ApiError> {
        let model = orders::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find order by id")?;
        Ok(model.map(order_from_model))
    }

    async fn create(&self, order: &Order) -> Result<(), ApiError> {
        orders::Entity::insert(order_active_model(order))
            .exec(&self.db)
            .await
            .map_err(|e| write_error(e, ApiError::OrderAlreadyExists, "create order"))?;
        Ok(())
    }

    async fn replace(&self, id: i32, order: &Order) -> Result<bool, ApiError> {
        let res = orders::Entity::update_many()
            .set(order_active_model(order))
            .filter(orders::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| write_error(e, ApiError::OrderAlreadyExists, "replace order"))?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let res = orders::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete order")?;
        Ok(res.rows_affected > 0)
    }
}

pub(crate) fn order_active_model(order: &Order) -> orders::ActiveModel {
    orders::ActiveModel {
        id: Set(order.id),
        name: Set(order.name.clone()),
        description: Set(order.description.clone()),
        start_date: Set(order.start_date.clone()),
        end_date: Set(order.end_date.clone()),
        address: Set(order.address.clone()),
        price: Set(order.price),
        customer_id: Set(order.customer_id),
        executor_id: Set(order.executor_id),
    }
}

fn order_from_model(model: orders::Model) -> Order {
    Order {
        id: model.id,
        name: model.name,
        description: model.description,
        start_date: model.start_date,
        end_date: model.end_date,
        address: model.address,
        price: model.price,
        customer_id: model.customer_id,
        executor_id: model.executor_id,
    }
}

// ── Offer repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOfferRepository {
    pub db: DatabaseConnection,
}

impl OfferRepository for DbOfferRepository {
    async fn list(&self) -> Result<Vec<Offer>, ApiError> {
        let models = offers::Entity::find()
            .order_by_asc(offers::Column::Id)
            .all(&self.db)
            .await
            .context("list offers")?;
        Ok(models.into_iter().map(offer_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Offer>, ApiError> {
        let model = offers::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find offer by id")?;
        Ok(model.map(offer_from_model))
    }

    async fn create(&self, offer: &Offer) -> Result<(), ApiError> {
        offers::Entity::insert(offer_active_model(offer))
            .exec(&self.db)
            .await
            .map_err(|e| write_error(e, ApiError::OfferAlreadyExists, "create offer"))?;
        Ok(())
    }

    async fn replace(&self, id: i32, offer: &Offer) -> Result<bool, ApiError> {
        let res = offers::Entity::update_many()
            .set(offer_active_model(offer))
            .filter(offers::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| write_error(e, ApiError::OfferAlreadyExists, "replace offer"))?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let res = offers::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete offer")?;
        Ok(res.rows_affected > 0)
    }
}

pub(crate) fn offer_active_model(offer: &Offer) -> offers::ActiveModel {
    offers::ActiveModel {
        id: Set(offer.id),
        order_id: Set(offer.order_id),
        executor_id: Set(offer.executor_id),
    }
}

fn offer_from_model(model: offers::Model) -> Offer {
    Offer {
        id: model.id,
        order_id: model.order_id,
        executor_id: model.executor_id,
    }
}
