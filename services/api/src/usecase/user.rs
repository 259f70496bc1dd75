use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::ApiError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.repo.list().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<User, ApiError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    /// Returns the id assigned by the store.
    pub async fn execute(&self, input: NewUser) -> Result<i32, ApiError> {
        let id = self.repo.create(&input).await?;
        tracing::debug!(user_id = id, "user created");
        Ok(id)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    /// Overwrites every field of `user_id` with `input`, including the id.
    pub async fn execute(&self, user_id: i32, input: User) -> Result<(), ApiError> {
        if !self.repo.replace(user_id, &input).await? {
            return Err(ApiError::UserNotFound);
        }
        Ok(())
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    /// Deleting an unknown id succeeds. Orders and offers pointing at the
    /// user are left as they are.
    pub async fn execute(&self, user_id: i32) -> Result<(), ApiError> {
        let deleted = self.repo.delete(user_id).await?;
        tracing::debug!(user_id, deleted, "user delete");
        Ok(())
    }
}
