use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{seed_row, seed_rows, test_server};

fn order(id: i64, customer_id: i64, executor_id: i64) -> Value {
    json!({
        "id": id,
        "name": "Paint the fence",
        "description": "Two coats, white",
        "start_date": "06/01/2013",
        "end_date": "06/03/2013",
        "address": "12 Orchard Road",
        "price": 2500,
        "customer_id": customer_id,
        "executor_id": executor_id
    })
}

// ── GET /orders/ ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_seeded_orders_field_for_field() {
    let server = test_server().await;
    let response = server.get("/orders/").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>(), seed_rows("orders.json"));
}

// ── Create / read / delete ───────────────────────────────────────────────────

#[tokio::test]
async fn should_create_get_and_delete_order() {
    let server = test_server().await;

    let response = server.post("/orders/").json(&order(999, 1, 2)).await;
    response.assert_status_ok();
    response.assert_json(&json!("Ok, new order is added"));

    server.get("/orders/999").await.assert_json(&order(999, 1, 2));

    let response = server.delete("/orders/999").await;
    response.assert_status_ok();
    response.assert_json(&json!("Order #999 is deleted"));

    let response = server.get("/orders/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "ORDER_NOT_FOUND");
}

#[tokio::test]
async fn should_round_trip_order_through_http() {
    let server = test_server().await;
    let body = json!({
        "id": 999,
        "name": "A",
        "description": "d",
        "start_date": "2021-01-01",
        "end_date": "2021-02-01",
        "address": "x",
        "price": 100,
        "customer_id": 1,
        "executor_id": 2
    });
    server.post("/orders/").json(&body).await.assert_status_ok();
    server.get("/orders/999").await.assert_json(&body);
    server.delete("/orders/999").await.assert_status_ok();
    server
        .get("/orders/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_accept_dangling_user_ids() {
    let server = test_server().await;
    server
        .post("/orders/")
        .json(&order(50, 7777, 8888))
        .await
        .assert_status_ok();
    server.get("/orders/50").await.assert_json(&order(50, 7777, 8888));
}

#[tokio::test]
async fn should_return_409_for_duplicate_order_id() {
    let server = test_server().await;
    let response = server.post("/orders/").json(&order(1, 1, 2)).await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["kind"], "ORDER_ALREADY_EXISTS");
    server
        .get("/orders/1")
        .await
        .assert_json(&seed_row("orders.json", 1));
}

#[tokio::test]
async fn should_reject_order_with_missing_field() {
    let server = test_server().await;
    let mut body = order(60, 1, 2);
    body.as_object_mut().unwrap().remove("price");
    let response = server.post("/orders/").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_BODY");
    server
        .get("/orders/60")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_malformed_json() {
    let server = test_server().await;
    let response = server
        .post("/orders/")
        .text("{")
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_BODY");
}

// ── PUT /orders/{id} ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_overwrite_order() {
    let server = test_server().await;
    let response = server.put("/orders/2").json(&order(2, 5, 3)).await;
    response.assert_status_ok();
    response.assert_json(&json!("Order #2 is updated"));
    server.get("/orders/2").await.assert_json(&order(2, 5, 3));
}

#[tokio::test]
async fn should_store_nulls_on_put() {
    let server = test_server().await;
    let mut body = order(2, 5, 3);
    body["customer_id"] = Value::Null;
    body["description"] = Value::Null;
    server.put("/orders/2").json(&body).await.assert_status_ok();
    server.get("/orders/2").await.assert_json(&body);
}

#[tokio::test]
async fn should_reject_put_with_missing_field() {
    let server = test_server().await;
    let mut body = order(2, 5, 3);
    body.as_object_mut().unwrap().remove("name");
    let response = server.put("/orders/2").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/orders/2")
        .await
        .assert_json(&seed_row("orders.json", 2));
}

#[tokio::test]
async fn should_return_404_on_put_of_unknown_order() {
    let server = test_server().await;
    let response = server.put("/orders/999").json(&order(999, 1, 2)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "ORDER_NOT_FOUND");
}

#[tokio::test]
async fn should_move_order_when_put_changes_id() {
    let server = test_server().await;
    server
        .put("/orders/2")
        .json(&order(200, 3, 4))
        .await
        .assert_json(&json!("Order #2 is updated"));

    server
        .get("/orders/2")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server.get("/orders/200").await.assert_json(&order(200, 3, 4));
}

#[tokio::test]
async fn should_return_409_when_put_moves_order_onto_existing_id() {
    let server = test_server().await;
    let response = server.put("/orders/2").json(&order(1, 3, 4)).await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["kind"], "ORDER_ALREADY_EXISTS");
    server
        .get("/orders/2")
        .await
        .assert_json(&seed_row("orders.json", 2));
}

#[tokio::test]
async fn should_reject_order_id_outside_integer_range() {
    let server = test_server().await;
    let response = server.get("/orders/99999999999").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_PATH");
}

// ── DELETE /orders/{id} ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_404_on_delete_of_unknown_order() {
    let server = test_server().await;
    let response = server.delete("/orders/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "ORDER_NOT_FOUND");
}

#[tokio::test]
async fn should_keep_offers_of_deleted_order() {
    let server = test_server().await;
    server.delete("/orders/1").await.assert_status_ok();
    server
        .get("/offers/1")
        .await
        .assert_json(&seed_row("offers.json", 1));
}
