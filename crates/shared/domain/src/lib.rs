//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! users, the board aggregate with its comments, and the genre tag.

pub mod board;
pub mod comment;
pub mod constants;
pub mod error;
pub mod genre;
pub mod user;

pub use board::{Board, BoardDetailResponse, BoardResponse, CreateBoard, UpdateBoard};
pub use comment::{Comment, CommentResponse, CreateComment, UpdateComment};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use genre::Genre;
pub use user::{CreateUser, UpdateUser, User, UserResponse};
