//! User handlers: list and read by id.

use crate::error::AppError;
use crate::model::User;
use crate::response::UserLookup;
use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list(&state.store).await?;
    Ok(Json(users))
}

/// `GET /users/:user_id`. A missing id answers 200 with `{"error": "User not found"}`.
pub async fn get_user(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserLookup>, AppError> {
    let Path(user_id) = user_id.map_err(|e| AppError::Validation(format!("user_id: {}", e.body_text())))?;
    let user = UserService::find(&state.store, user_id).await?;
    Ok(Json(UserLookup::from(user)))
}
