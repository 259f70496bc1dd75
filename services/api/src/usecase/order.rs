use crate::domain::repository::OrderRepository;
use crate::domain::types::Order;
use crate::error::ApiError;

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Order>, ApiError> {
        self.repo.list().await
    }
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> GetOrderUseCase<R> {
    pub async fn execute(&self, order_id: i32) -> Result<Order, ApiError> {
        self.repo
            .find_by_id(order_id)
            .await?
            .ok_or(ApiError::OrderNotFound)
    }
}

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> CreateOrderUseCase<R> {
    /// The id comes from the caller. Customer and executor ids are stored
    /// without checking that those users exist.
    pub async fn execute(&self, input: Order) -> Result<(), ApiError> {
        self.repo.create(&input).await
    }
}

// ── UpdateOrder ──────────────────────────────────────────────────────────────

pub struct UpdateOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> UpdateOrderUseCase<R> {
    pub async fn execute(&self, order_id: i32, input: Order) -> Result<(), ApiError> {
        if !self.repo.replace(order_id, &input).await? {
            return Err(ApiError::OrderNotFound);
        }
        Ok(())
    }
}

// ── DeleteOrder ──────────────────────────────────────────────────────────────

pub struct DeleteOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> DeleteOrderUseCase<R> {
    /// Offers on the order are kept.
    pub async fn execute(&self, order_id: i32) -> Result<(), ApiError> {
        let deleted = self.repo.delete(order_id).await?;
        if !deleted {
            return Err(ApiError::OrderNotFound);
        }
        Ok(())
    }
}
