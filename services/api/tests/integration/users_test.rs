use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{max_seed_id, seed_row, seed_rows, test_server};

fn full_user(id: i64) -> Value {
    json!({
        "id": id,
        "first_name": "Nora",
        "last_name": "Lindqvist",
        "age": 30,
        "email": "nlindqvist@mail.com",
        "role": "executor",
        "phone": "5550001111"
    })
}

// ── GET /users/ ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_seeded_users_field_for_field() {
    let server = test_server().await;
    let response = server.get("/users/").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>(), seed_rows("users.json"));
}

// ── POST /users/ ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_user_with_store_assigned_id() {
    let server = test_server().await;
    let mut body = full_user(1);
    body.as_object_mut().unwrap().remove("id");

    let response = server.post("/users/").json(&body).await;
    response.assert_status_ok();
    response.assert_json(&json!("Ok"));

    let new_id = max_seed_id("users.json") + 1;
    let response = server.get(&format!("/users/{new_id}")).await;
    response.assert_status_ok();
    response.assert_json(&full_user(new_id));
}

#[tokio::test]
async fn should_ignore_id_in_create_body() {
    let server = test_server().await;
    server.post("/users/").json(&full_user(1)).await.assert_status_ok();

    // Seeded user 1 is untouched, the new row got the next id.
    server
        .get("/users/1")
        .await
        .assert_json(&seed_row("users.json", 1));
    let new_id = max_seed_id("users.json") + 1;
    server
        .get(&format!("/users/{new_id}"))
        .await
        .assert_json(&full_user(new_id));
}

#[tokio::test]
async fn should_reject_create_with_missing_field() {
    let server = test_server().await;
    let response = server
        .post("/users/")
        .json(&json!({ "first_name": "Nora", "last_name": "Lindqvist" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_BODY");
    assert_eq!(
        server.get("/users/").await.json::<Vec<Value>>().len(),
        seed_rows("users.json").len()
    );
}

#[tokio::test]
async fn should_store_explicit_nulls_on_create() {
    let server = test_server().await;
    let body = json!({
        "first_name": null, "last_name": null, "age": null,
        "email": null, "role": null, "phone": null
    });
    server.post("/users/").json(&body).await.assert_status_ok();

    let new_id = max_seed_id("users.json") + 1;
    let user = server.get(&format!("/users/{new_id}")).await.json::<Value>();
    assert_eq!(user["id"], new_id);
    assert!(user["email"].is_null());
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_get_seeded_user() {
    let server = test_server().await;
    let response = server.get("/users/2").await;
    response.assert_status_ok();
    response.assert_json(&seed_row("users.json", 2));
}

#[tokio::test]
async fn should_return_404_for_unknown_user() {
    let server = test_server().await;
    let response = server.get("/users/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_non_integer_user_id() {
    let server = test_server().await;
    let response = server.get("/users/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_PATH");
}

// ── PUT /users/{id} ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_overwrite_every_user_field() {
    let server = test_server().await;
    let response = server.put("/users/3").json(&full_user(3)).await;
    response.assert_status_ok();
    response.assert_json(&json!("User #3 is updated"));

    server.get("/users/3").await.assert_json(&full_user(3));
}

#[tokio::test]
async fn should_move_user_when_put_changes_id() {
    let server = test_server().await;
    server
        .put("/users/3")
        .json(&full_user(300))
        .await
        .assert_json(&json!("User #3 is updated"));

    server
        .get("/users/3")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server.get("/users/300").await.assert_json(&full_user(300));
}

#[tokio::test]
async fn should_name_first_missing_field_and_leave_user_unchanged() {
    let server = test_server().await;
    let mut body = full_user(2);
    let fields = body.as_object_mut().unwrap();
    fields.remove("age");
    fields.remove("phone");

    let response = server.put("/users/2").json(&body).await;
    response.assert_status_ok();
    response.assert_json(&json!("Field \"age\" is not filled"));

    server
        .get("/users/2")
        .await
        .assert_json(&seed_row("users.json", 2));
}

#[tokio::test]
async fn should_check_id_field_first() {
    let server = test_server().await;
    let response = server.put("/users/2").json(&json!({})).await;
    response.assert_json(&json!("Field \"id\" is not filled"));
}

#[tokio::test]
async fn should_report_missing_field_before_unknown_user() {
    let server = test_server().await;
    let response = server
        .put("/users/999")
        .json(&json!({ "id": 999 }))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!("Field \"first_name\" is not filled"));
}

#[tokio::test]
async fn should_return_404_on_put_of_unknown_user() {
    let server = test_server().await;
    let response = server.put("/users/999").json(&full_user(999)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_put_with_wrong_field_type() {
    let server = test_server().await;
    let mut body = full_user(2);
    body["age"] = json!("thirty");
    let response = server.put("/users/2").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn should_reject_put_body_that_is_not_an_object() {
    let server = test_server().await;
    let response = server.put("/users/2").json(&json!([1, 2])).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn should_return_409_when_put_moves_user_onto_existing_id() {
    let server = test_server().await;
    let response = server.put("/users/3").json(&full_user(1)).await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["kind"], "USER_ALREADY_EXISTS");
}

// ── DELETE /users/{id} ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_user_and_leave_dependent_orders_dangling() {
    let server = test_server().await;
    let response = server.delete("/users/1").await;
    response.assert_status_ok();
    response.assert_json(&json!("User #1 is deleted"));

    server
        .get("/users/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    // Order 1 belongs to customer 1 in the seed and survives the delete.
    server
        .get("/orders/1")
        .await
        .assert_json(&seed_row("orders.json", 1));
}

#[tokio::test]
async fn should_confirm_delete_of_unknown_user() {
    let server = test_server().await;
    let response = server.delete("/users/999").await;
    response.assert_status_ok();
    response.assert_json(&json!("User #999 is deleted"));
    assert_eq!(
        server.get("/users/").await.json::<Vec<Value>>(),
        seed_rows("users.json")
    );
}
