use serde_json::{Map, Value};

/// Marketplace user. Every column except `id` is nullable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// User fields for creation; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

impl NewUser {
    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            email: self.email,
            role: self.role,
            phone: self.phone,
        }
    }
}

/// Keys a full user replacement must carry, in the order they are checked.
pub const USER_FIELDS: [&str; 7] = [
    "id",
    "first_name",
    "last_name",
    "age",
    "email",
    "role",
    "phone",
];

/// First entry of [`USER_FIELDS`] that is not a key of `body`.
/// A key holding `null` counts as present.
pub fn first_missing_user_field(body: &Map<String, Value>) -> Option<&'static str> {
    USER_FIELDS
        .into_iter()
        .find(|field| !body.contains_key(*field))
}

/// A job. `id` is chosen by the caller; `customer_id` and `executor_id`
/// point at users but are never checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
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

/// An executor's bid on an order. References are unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub id: i32,
    pub order_id: Option<i32>,
    pub executor_id: Option<i32>,
}
