//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{board_handler, comment_handler, oauth_handler, user_handler};
use domain::{BoardDetailResponse, BoardResponse, CommentResponse, Genre, UserResponse};

/// OpenAPI documentation for the board service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Togethersee Board API",
        version = "0.1.0",
        description = "Movie discussion boards with comments and Kakao login",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        board_handler::create_board,
        board_handler::list_boards,
        board_handler::get_board,
        board_handler::update_board,
        board_handler::delete_board,
        board_handler::like_board,
        board_handler::dislike_board,
        comment_handler::create_comment,
        comment_handler::update_comment,
        oauth_handler::authorize,
        oauth_handler::redirect,
        oauth_handler::token,
    ),
    components(
        schemas(
            Genre,
            UserResponse,
            BoardResponse,
            BoardDetailResponse,
            CommentResponse,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            board_handler::CreateBoardRequest,
            board_handler::UpdateBoardRequest,
            comment_handler::CreateCommentRequest,
            comment_handler::UpdateCommentRequest,
        )
    ),
    tags(
        (name = "Users", description = "User registration and profile"),
        (name = "Boards", description = "Movie discussion boards"),
        (name = "Comments", description = "Comments on a board"),
        (name = "OAuth", description = "Kakao login flow")
    )
)]
pub struct ApiDoc;
