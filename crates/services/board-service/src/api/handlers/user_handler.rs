//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{CreateUser, UpdateUser, UserResponse, PHONE_NUMBER_PATTERN};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;

/// Korean mobile number, dashes optional
static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_NUMBER_PATTERN).expect("phone number pattern compiles"));

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 30, message = "Username must be 1-30 characters"))]
    #[schema(example = "최성욱")]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "password123", min_length = 8)]
    pub password: String,
    #[validate(length(min = 1, message = "Birth is required"))]
    #[schema(example = "1995-03-01")]
    pub birth: String,
    #[validate(regex(path = *PHONE_NUMBER_REGEX, message = "Invalid phone number"))]
    #[schema(example = "010-1234-5678")]
    pub phone_number: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        CreateUser {
            username: req.username,
            email: req.email,
            password: req.password,
            birth: req.birth,
            phone_number: req.phone_number,
        }
    }
}

/// User update request; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "newpassword123")]
    pub password: Option<String>,
    #[validate(regex(path = *PHONE_NUMBER_REGEX, message = "Invalid phone number"))]
    #[schema(example = "010-9999-8888")]
    pub phone_number: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        UpdateUser {
            password: req.password,
            phone_number: req.phone_number,
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service.create_user(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Change password and/or phone number
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.update_user(id, payload.into()).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = bool),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<bool>> {
    let deleted = state.user_service.delete_user(id).await?;
    Ok(Json(deleted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_pattern_accepts_korean_mobile_numbers() {
        assert!(PHONE_NUMBER_REGEX.is_match("010-1234-5678"));
        assert!(PHONE_NUMBER_REGEX.is_match("01012345678"));
        assert!(PHONE_NUMBER_REGEX.is_match("011-123-4567"));
        assert!(!PHONE_NUMBER_REGEX.is_match("02-123-4567"));
        assert!(!PHONE_NUMBER_REGEX.is_match("010-1234-567a"));
    }

    #[test]
    fn update_request_allows_absent_fields() {
        let req = UpdateUserRequest {
            password: None,
            phone_number: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn short_password_is_rejected() {
        let req = UpdateUserRequest {
            password: Some("short".to_string()),
            phone_number: None,
        };
        assert!(req.validate().is_err());
    }
}
