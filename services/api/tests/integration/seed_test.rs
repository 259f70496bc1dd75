use serde_json::{Value, json};

use gigboard_api::seed::reset_and_seed;
use gigboard_testing::fixture::Fixture;

use crate::helpers::{max_seed_id, seed_rows, seeded_db, server_for};

#[tokio::test]
async fn should_restore_fixture_on_reseed() {
    let db = seeded_db().await;
    let server = server_for(db.clone());

    server
        .post("/offers/")
        .json(&json!({ "id": 77, "order_id": 1, "executor_id": 1 }))
        .await
        .assert_status_ok();
    server.delete("/orders/2").await.assert_status_ok();

    reset_and_seed(&db, &Fixture::seed_dir()).await.unwrap();

    assert_eq!(
        server.get("/offers/").await.json::<Vec<Value>>(),
        seed_rows("offers.json")
    );
    assert_eq!(
        server.get("/orders/").await.json::<Vec<Value>>(),
        seed_rows("orders.json")
    );
}

#[tokio::test]
async fn should_continue_user_ids_after_seed_on_reseed() {
    let db = seeded_db().await;
    let server = server_for(db.clone());
    let body = json!({
        "first_name": "Ada", "last_name": "Byron", "age": 36,
        "email": "ada@mail.com", "role": "customer", "phone": "5550002222"
    });
    server.post("/users/").json(&body).await.assert_status_ok();

    reset_and_seed(&db, &Fixture::seed_dir()).await.unwrap();
    server.post("/users/").json(&body).await.assert_status_ok();

    let users = server.get("/users/").await.json::<Vec<Value>>();
    assert_eq!(users.len(), seed_rows("users.json").len() + 1);
    assert_eq!(users.last().unwrap()["id"], max_seed_id("users.json") + 1);
}
