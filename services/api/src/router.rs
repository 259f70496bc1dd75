use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use gigboard_core::health::healthz;
use gigboard_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    offer::{create_offer, delete_offer, get_offer, list_offers, update_offer},
    order::{create_order, delete_order, get_order, list_orders, update_order},
    root::{index, readyz},
    user::{create_user, delete_user, get_user, list_users, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users/", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Orders
        .route("/orders/", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        // Offers
        .route("/offers/", get(list_offers).post(create_offer))
        .route(
            "/offers/{id}",
            get(get_offer).put(update_offer).delete(delete_offer),
        )
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
