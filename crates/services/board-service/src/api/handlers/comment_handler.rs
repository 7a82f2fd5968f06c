//! Comment handlers, nested under a board.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{CommentResponse, CreateComment, UpdateComment};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;

/// Comment creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    #[schema(example = "재밌게 봤어요")]
    pub content: String,
    /// Author; the comment keeps a copy of their username
    pub user_id: Uuid,
}

impl From<CreateCommentRequest> for CreateComment {
    fn from(req: CreateCommentRequest) -> Self {
        CreateComment {
            content: req.content,
            user_id: req.user_id,
        }
    }
}

/// Comment update request; a missing `content` leaves the comment as is
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    #[validate(length(max = 1000, message = "Comment must be at most 1000 characters"))]
    #[schema(example = "다시 봐도 재밌네요")]
    pub content: Option<String>,
}

impl From<UpdateCommentRequest> for UpdateComment {
    fn from(req: UpdateCommentRequest) -> Self {
        UpdateComment {
            content: req.content,
        }
    }
}

/// Create comment routes; merged into the board router
pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/comments", post(create_comment))
        .route("/:id/comments/:comment_id", put(update_comment))
}

/// Add a comment to a board
#[utoipa::path(
    post,
    path = "/api/boards/{id}/comments",
    tag = "Comments",
    params(
        ("id" = Uuid, Path, description = "Board ID")
    ),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment added", body = CommentResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Board or user not found")
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<CommentResponse>)> {
    let comment = state
        .board_service
        .add_comment(board_id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// Edit a comment
#[utoipa::path(
    put,
    path = "/api/boards/{id}/comments/{comment_id}",
    tag = "Comments",
    params(
        ("id" = Uuid, Path, description = "Board ID"),
        ("comment_id" = Uuid, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = CommentResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Board or comment not found")
    )
)]
pub async fn update_comment(
    State(state): State<AppState>,
    Path((board_id, comment_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(payload): ValidatedJson<UpdateCommentRequest>,
) -> AppResult<Json<CommentResponse>> {
    let comment = state
        .board_service
        .update_comment(board_id, comment_id, payload.into())
        .await?;
    Ok(Json(CommentResponse::from(comment)))
}
