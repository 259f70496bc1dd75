use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::types::{NewUser, User, first_missing_user_field};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            email: user.email,
            role: user.role,
            phone: user.phone,
        }
    }
}

// ── GET /users/ ──────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── POST /users/ ─────────────────────────────────────────────────────────────

/// Every key must be present; `null` is stored as NULL. An `id` key is ignored.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub age: Option<i32>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub email: Option<String>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub role: Option<String>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub phone: Option<String>,
}

pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateUserRequest>, ApiError>,
) -> Result<Json<&'static str>, ApiError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(NewUser {
            first_name: body.first_name,
            last_name: body.last_name,
            age: body.age,
            email: body.email,
            role: body.role,
            phone: body.phone,
        })
        .await?;
    Ok(Json("Ok"))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(user_id).await?;
    Ok(Json(user.into()))
}

// ── PUT /users/{id} ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// Replaces the whole user. A body lacking one of the seven keys is answered
/// with `Field "<name>" is not filled` (status 200) and nothing is written.
pub async fn update_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<Map<String, Value>>, ApiError>,
) -> Result<Json<String>, ApiError> {
    if let Some(field) = first_missing_user_field(&body) {
        return Ok(Json(format!("Field \"{field}\" is not filled")));
    }
    let body: UpdateUserRequest = serde_json::from_value(Value::Object(body))?;
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(
            user_id,
            User {
                id: body.id,
                first_name: body.first_name,
                last_name: body.last_name,
                age: body.age,
                email: body.email,
                role: body.role,
                phone: body.phone,
            },
        )
        .await?;
    Ok(Json(format!("User #{user_id} is updated")))
}

// ── DELETE /users/{id} ───────────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<String>, ApiError> {
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(user_id).await?;
    Ok(Json(format!("User #{user_id} is deleted")))
}
