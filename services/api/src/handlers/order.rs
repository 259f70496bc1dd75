use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::domain::types::Order;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::order::{
    CreateOrderUseCase, DeleteOrderUseCase, GetOrderUseCase, ListOrdersUseCase,
    UpdateOrderUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub address: Option<String>,
    pub price: Option<i32>,
    pub customer_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            name: order.name,
            description: order.description,
            start_date: order.start_date,
            end_date: order.end_date,
            address: order.address,
            price: order.price,
            customer_id: order.customer_id,
            executor_id: order.executor_id,
        }
    }
}

/// Body of both `POST /orders/` and `PUT /orders/{id}`: every key is required.
#[derive(Deserialize)]
pub struct OrderRequest {
    pub id: i32,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub description: Option<String>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub address: Option<String>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub price: Option<i32>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub customer_id: Option<i32>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub executor_id: Option<i32>,
}

impl From<OrderRequest> for Order {
    fn from(body: OrderRequest) -> Self {
        Self {
            id: body.id,
            name: body.name,
            description: body.description,
            start_date: body.start_date,
            end_date: body.end_date,
            address: body.address,
            price: body.price,
            customer_id: body.customer_id,
            executor_id: body.executor_id,
        }
    }
}

// ── GET /orders/ ─────────────────────────────────────────────────────────────

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let usecase = ListOrdersUseCase {
        repo: state.order_repo(),
    };
    let orders = usecase.execute().await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

// ── POST /orders/ ────────────────────────────────────────────────────────────

pub async fn create_order(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<OrderRequest>, ApiError>,
) -> Result<Json<&'static str>, ApiError> {
    let usecase = CreateOrderUseCase {
        repo: state.order_repo(),
    };
    usecase.execute(body.into()).await?;
    Ok(Json("Ok, new order is added"))
}

// ── GET /orders/{id} ─────────────────────────────────────────────────────────

pub async fn get_order(
    State(state): State<AppState>,
    WithRejection(Path(order_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<OrderResponse>, ApiError> {
    let usecase = GetOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(order_id).await?;
    Ok(Json(order.into()))
}

// ── PUT /orders/{id} ─────────────────────────────────────────────────────────

pub async fn update_order(
    State(state): State<AppState>,
    WithRejection(Path(order_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<OrderRequest>, ApiError>,
) -> Result<Json<String>, ApiError> {
    let usecase = UpdateOrderUseCase {
        repo: state.order_repo(),
    };
    usecase.execute(order_id, body.into()).await?;
    Ok(Json(format!("Order #{order_id} is updated")))
}

// ── DELETE /orders/{id} ──────────────────────────────────────────────────────

pub async fn delete_order(
    State(state): State<AppState>,
    WithRejection(Path(order_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<String>, ApiError> {
    let usecase = DeleteOrderUseCase {
        repo: state.order_repo(),
    };
    usecase.execute(order_id).await?;
    Ok(Json(format!("Order #{order_id} is deleted")))
}
