//! Integration tests for API endpoints.
//!
//! These tests drive the router with stub services, so no database or
//! Kakao connection is needed.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::util::ServiceExt;
use uuid::Uuid;

use auth_service_lib::service::MockOAuthService;
use board_service_lib::api::{create_router, AppState};
use board_service_lib::infra::Database;
use board_service_lib::service::{BoardService, UserService};
use common::{AppError, AppResult};
use domain::{
    Board, Comment, CreateBoard, CreateComment, CreateUser, Genre, UpdateBoard, UpdateComment,
    UpdateUser, User, BOARD_NOT_FOUND, COMMENT_NOT_FOUND, USER_NOT_FOUND,
};

// =============================================================================
// Stub Services for Testing
// =============================================================================

/// In-memory user service holding a single known user
struct StubUserService {
    known: Uuid,
}

fn test_user(id: Uuid) -> User {
    User::new(
        id,
        CreateUser {
            username: "최성욱".to_string(),
            email: "choi@example.com".to_string(),
            password: "password123".to_string(),
            birth: "1995-03-01".to_string(),
            phone_number: "010-1234-5678".to_string(),
        },
    )
}

#[async_trait]
impl UserService for StubUserService {
    async fn create_user(&self, data: CreateUser) -> AppResult<User> {
        Ok(User::new(self.known, data))
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        if id == self.known {
            Ok(test_user(id))
        } else {
            Err(AppError::not_found(USER_NOT_FOUND))
        }
    }

    async fn update_user(&self, id: Uuid, update: UpdateUser) -> AppResult<User> {
        let mut user = self.get_user(id).await?;
        user.modify_info(update);
        Ok(user)
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<bool> {
        self.get_user(id).await.map(|_| true)
    }
}

/// In-memory board service backed by a single board
struct StubBoardService {
    board: Mutex<Option<Board>>,
}

impl StubBoardService {
    fn with_board(board: Board) -> Self {
        Self {
            board: Mutex::new(Some(board)),
        }
    }

    fn find(&self, id: Uuid) -> AppResult<Board> {
        self.board
            .lock()
            .unwrap()
            .clone()
            .filter(|b| b.id == id)
            .ok_or_else(|| AppError::not_found(BOARD_NOT_FOUND))
    }

    fn store(&self, board: Board) -> Board {
        *self.board.lock().unwrap() = Some(board.clone());
        board
    }
}

#[async_trait]
impl BoardService for StubBoardService {
    async fn create_board(&self, data: CreateBoard) -> AppResult<Board> {
        Ok(Board::new(Uuid::new_v4(), data))
    }

    async fn get_board(&self, id: Uuid) -> AppResult<Board> {
        self.find(id)
    }

    async fn list_boards(&self) -> AppResult<Vec<Board>> {
        Ok(self.board.lock().unwrap().clone().into_iter().collect())
    }

    async fn update_board(&self, id: Uuid, update: UpdateBoard) -> AppResult<Board> {
        let mut board = self.find(id)?;
        board.apply_update(update);
        Ok(self.store(board))
    }

    async fn delete_board(&self, id: Uuid) -> AppResult<bool> {
        self.find(id)?;
        *self.board.lock().unwrap() = None;
        Ok(true)
    }

    async fn add_comment(&self, board_id: Uuid, data: CreateComment) -> AppResult<Comment> {
        let mut board = self.find(board_id)?;
        board.add_comment(Comment::new(data.content, "최성욱".to_string()));
        let board = self.store(board);
        board
            .find_last_comment()
            .cloned()
            .ok_or_else(|| AppError::internal("no comment"))
    }

    async fn update_comment(
        &self,
        board_id: Uuid,
        comment_id: Uuid,
        update: UpdateComment,
    ) -> AppResult<Comment> {
        let mut board = self.find(board_id)?;
        let comment = board.edit_comment(comment_id, update)?.clone();
        self.store(board);
        Ok(comment)
    }

    async fn like_board(&self, id: Uuid) -> AppResult<Board> {
        let mut board = self.find(id)?;
        board.like();
        Ok(self.store(board))
    }

    async fn dislike_board(&self, id: Uuid) -> AppResult<Board> {
        let mut board = self.find(id)?;
        board.dislike();
        Ok(self.store(board))
    }
}

// =============================================================================
// Helpers
// =============================================================================

struct TestApp {
    router: Router,
    user_id: Uuid,
    board_id: Uuid,
    comment_id: Uuid,
}

fn test_app_with_oauth(oauth: MockOAuthService) -> TestApp {
    let user_id = Uuid::new_v4();
    let mut board = Board::new(
        Uuid::new_v4(),
        CreateBoard {
            title: "제목입니다".to_string(),
            content: "내용입니다".to_string(),
            author: "최성욱".to_string(),
            genre: Genre::DramaDocumentary,
            user_id,
        },
    );
    board.likes = 1;
    board.dislikes = 2;
    let comment_id = board
        .add_comment(Comment::new("첫 댓글".to_string(), "최성욱".to_string()))
        .id;
    let board_id = board.id;

    let state = AppState::new(
        Arc::new(StubUserService { known: user_id }),
        Arc::new(StubBoardService::with_board(board)),
        Arc::new(oauth),
        Arc::new(Database::from_connection(DatabaseConnection::default())),
    );

    TestApp {
        router: create_router(state),
        user_id,
        board_id,
        comment_id,
    }
}

fn test_app() -> TestApp {
    test_app_with_oauth(MockOAuthService::new())
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

// =============================================================================
// Boards
// =============================================================================

#[tokio::test]
async fn test_get_board_includes_comments() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        empty_request(Method::GET, &format!("/api/boards/{}", app.board_id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "제목입니다");
    assert_eq!(body["genre"], "DRAMA_DOCUMENTARY");
    assert_eq!(body["userId"], app.user_id.to_string());
    assert_eq!(body["comments"][0]["content"], "첫 댓글");
}

#[tokio::test]
async fn test_get_unknown_board_is_404() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        empty_request(Method::GET, &format!("/api/boards/{}", Uuid::new_v4())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Board not found");
}

#[tokio::test]
async fn test_list_boards() {
    let app = test_app();

    let (status, body) = send(&app.router, empty_request(Method::GET, "/api/boards")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert!(body[0].get("comments").is_none());
}

#[tokio::test]
async fn test_create_board() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/api/boards",
            json!({
                "title": "안녕하세요",
                "content": "인사!",
                "author": "최성욱",
                "genre": "SF_FANTASY",
                "userId": app.user_id,
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["likes"], 0);
    assert_eq!(body["dislikes"], 0);
    assert_eq!(body["genre"], "SF_FANTASY");
}

#[tokio::test]
async fn test_create_board_with_unknown_genre_is_400() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/api/boards",
            json!({
                "title": "안녕하세요",
                "content": "인사!",
                "author": "최성욱",
                "genre": "HORROR",
                "userId": app.user_id,
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_board_with_empty_title_is_400() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/api/boards",
            json!({
                "title": "",
                "content": "인사!",
                "author": "최성욱",
                "genre": "ETC",
                "userId": app.user_id,
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_partial_update_keeps_counters() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            Method::PUT,
            &format!("/api/boards/{}", app.board_id),
            json!({ "title": "새로운 제목", "content": null }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "새로운 제목");
    assert_eq!(body["content"], "내용입니다");
    assert_eq!(body["likes"], 1);
    assert_eq!(body["dislikes"], 2);
}

#[tokio::test]
async fn test_delete_board_twice() {
    let app = test_app();
    let uri = format!("/api/boards/{}", app.board_id);

    let (status, body) = send(&app.router, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(true));

    let (status, _) = send(&app.router, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_and_dislike() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        empty_request(Method::POST, &format!("/api/boards/{}/likes", app.board_id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["likes"], 2);

    let (_, body) = send(
        &app.router,
        empty_request(Method::POST, &format!("/api/boards/{}/dislikes", app.board_id)),
    )
    .await;
    assert_eq!(body["dislikes"], 3);
}

// =============================================================================
// Comments
// =============================================================================

#[tokio::test]
async fn test_add_comment() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            &format!("/api/boards/{}/comments", app.board_id),
            json!({ "content": "재밌게 봤어요", "userId": app.user_id }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["content"], "재밌게 봤어요");
    assert_eq!(body["username"], "최성욱");
}

#[tokio::test]
async fn test_update_comment() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            Method::PUT,
            &format!("/api/boards/{}/comments/{}", app.board_id, app.comment_id),
            json!({ "content": "수정된 댓글" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], app.comment_id.to_string());
    assert_eq!(body["content"], "수정된 댓글");
}

#[tokio::test]
async fn test_update_unknown_comment_is_404() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            Method::PUT,
            &format!("/api/boards/{}/comments/{}", app.board_id, Uuid::new_v4()),
            json!({ "content": "수정된 댓글" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], COMMENT_NOT_FOUND);
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_create_user_hides_password() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/api/users",
            json!({
                "username": "최성욱",
                "email": "choi@example.com",
                "password": "password123",
                "birth": "1995-03-01",
                "phoneNumber": "010-1234-5678",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["phoneNumber"], "010-1234-5678");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_create_user_with_bad_phone_is_400() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/api/users",
            json!({
                "username": "최성욱",
                "email": "choi@example.com",
                "password": "password123",
                "birth": "1995-03-01",
                "phoneNumber": "12345",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid phone number");
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        empty_request(Method::GET, &format!("/api/users/{}", Uuid::new_v4())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], USER_NOT_FOUND);
}

#[tokio::test]
async fn test_update_and_delete_user() {
    let app = test_app();
    let uri = format!("/api/users/{}", app.user_id);

    let (status, body) = send(
        &app.router,
        json_request(Method::PUT, &uri, json!({ "phoneNumber": "010-9999-8888" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phoneNumber"], "010-9999-8888");

    let (status, body) = send(&app.router, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(true));
}

// =============================================================================
// OAuth
// =============================================================================

#[tokio::test]
async fn test_authorize_redirects_to_kakao() {
    let mut oauth = MockOAuthService::new();
    oauth
        .expect_authorize_url()
        .returning(|_| Ok("https://kauth.kakao.com/oauth/authorize?response_type=code".to_string()));
    let app = test_app_with_oauth(oauth);

    let response = app
        .router
        .clone()
        .oneshot(empty_request(Method::GET, "/oauth/authorize"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://kauth.kakao.com/oauth/authorize?response_type=code"
    );
}

#[tokio::test]
async fn test_redirect_with_code_goes_to_token() {
    let mut oauth = MockOAuthService::new();
    oauth
        .expect_callback_redirect()
        .withf(|callback| callback.code.as_deref() == Some("abc") && callback.error.is_none())
        .returning(|_| "/oauth/token?code=abc".to_string());
    let app = test_app_with_oauth(oauth);

    let response = app
        .router
        .clone()
        .oneshot(empty_request(Method::GET, "/oauth/redirect?code=abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/oauth/token?code=abc");
}

#[tokio::test]
async fn test_token_redirects_to_votes() {
    let mut oauth = MockOAuthService::new();
    oauth
        .expect_token_redirect()
        .withf(|request| request.code == "abc")
        .returning(|_| Ok("/votes?token=id-token".to_string()));
    let app = test_app_with_oauth(oauth);

    let response = app
        .router
        .clone()
        .oneshot(empty_request(Method::GET, "/oauth/token?code=abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/votes?token=id-token");
}

#[tokio::test]
async fn test_token_rejected_by_kakao_is_401() {
    let mut oauth = MockOAuthService::new();
    oauth
        .expect_token_redirect()
        .returning(|_| Err(AppError::Unauthorized));
    let app = test_app_with_oauth(oauth);

    let (status, body) = send(&app.router, empty_request(Method::GET, "/oauth/token?code=bad")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_disconnected_database() {
    let app = test_app();

    let (status, body) = send(&app.router, empty_request(Method::GET, "/health")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app();

    let (status, body) = send(&app.router, empty_request(Method::GET, "/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/boards/{id}").is_some());
}
