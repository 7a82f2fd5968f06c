//! Board handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{BoardDetailResponse, BoardResponse, CreateBoard, Genre, UpdateBoard};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;

/// Board creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    #[schema(example = "안녕하세요")]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    #[schema(example = "인사!")]
    pub content: String,
    #[validate(length(min = 1, max = 30, message = "Author must be 1-30 characters"))]
    #[schema(example = "최성욱")]
    pub author: String,
    pub genre: Genre,
    /// Owning user; must exist
    pub user_id: Uuid,
}

impl From<CreateBoardRequest> for CreateBoard {
    fn from(req: CreateBoardRequest) -> Self {
        CreateBoard {
            title: req.title,
            content: req.content,
            author: req.author,
            genre: req.genre,
            user_id: req.user_id,
        }
    }
}

/// Partial board update.
///
/// Missing or `null` fields are left unchanged; an empty string is a value
/// and overwrites.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardRequest {
    #[validate(length(max = 100, message = "Title must be at most 100 characters"))]
    #[schema(example = "새로운 제목")]
    pub title: Option<String>,
    #[schema(example = "새로운 내용")]
    pub content: Option<String>,
    pub genre: Option<Genre>,
}

impl From<UpdateBoardRequest> for UpdateBoard {
    fn from(req: UpdateBoardRequest) -> Self {
        UpdateBoard {
            title: req.title,
            content: req.content,
            genre: req.genre,
        }
    }
}

/// Create board routes
pub fn board_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_board).get(list_boards))
        .route("/:id", get(get_board).put(update_board).delete(delete_board))
        .route("/:id/likes", post(like_board))
        .route("/:id/dislikes", post(dislike_board))
}

/// Create a board
#[utoipa::path(
    post,
    path = "/api/boards",
    tag = "Boards",
    request_body = CreateBoardRequest,
    responses(
        (status = 201, description = "Board created", body = BoardResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn create_board(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBoardRequest>,
) -> AppResult<(StatusCode, Json<BoardResponse>)> {
    let board = state.board_service.create_board(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(BoardResponse::from(board))))
}

/// List all boards
#[utoipa::path(
    get,
    path = "/api/boards",
    tag = "Boards",
    responses(
        (status = 200, description = "All boards", body = Vec<BoardResponse>)
    )
)]
pub async fn list_boards(State(state): State<AppState>) -> AppResult<Json<Vec<BoardResponse>>> {
    let boards = state.board_service.list_boards().await?;
    Ok(Json(boards.iter().map(BoardResponse::from).collect()))
}

/// Get a board with its comments
#[utoipa::path(
    get,
    path = "/api/boards/{id}",
    tag = "Boards",
    params(
        ("id" = Uuid, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Board detail", body = BoardDetailResponse),
        (status = 404, description = "Board not found")
    )
)]
pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BoardDetailResponse>> {
    let board = state.board_service.get_board(id).await?;
    Ok(Json(BoardDetailResponse::from(board)))
}

/// Partially update a board
#[utoipa::path(
    put,
    path = "/api/boards/{id}",
    tag = "Boards",
    params(
        ("id" = Uuid, Path, description = "Board ID")
    ),
    request_body = UpdateBoardRequest,
    responses(
        (status = 200, description = "Board updated", body = BoardResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Board not found")
    )
)]
pub async fn update_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateBoardRequest>,
) -> AppResult<Json<BoardResponse>> {
    let board = state.board_service.update_board(id, payload.into()).await?;
    Ok(Json(BoardResponse::from(board)))
}

/// Delete a board and its comments
#[utoipa::path(
    delete,
    path = "/api/boards/{id}",
    tag = "Boards",
    params(
        ("id" = Uuid, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Board deleted", body = bool),
        (status = 404, description = "Board not found")
    )
)]
pub async fn delete_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<bool>> {
    let deleted = state.board_service.delete_board(id).await?;
    Ok(Json(deleted))
}

/// Like a board
#[utoipa::path(
    post,
    path = "/api/boards/{id}/likes",
    tag = "Boards",
    params(
        ("id" = Uuid, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Like registered", body = BoardResponse),
        (status = 404, description = "Board not found")
    )
)]
pub async fn like_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BoardResponse>> {
    let board = state.board_service.like_board(id).await?;
    Ok(Json(BoardResponse::from(board)))
}

/// Dislike a board
#[utoipa::path(
    post,
    path = "/api/boards/{id}/dislikes",
    tag = "Boards",
    params(
        ("id" = Uuid, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Dislike registered", body = BoardResponse),
        (status = 404, description = "Board not found")
    )
)]
pub async fn dislike_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BoardResponse>> {
    let board = state.board_service.dislike_board(id).await?;
    Ok(Json(BoardResponse::from(board)))
}
