//! Business logic for users and boards.

mod board_service;
mod user_service;

pub use board_service::{BoardManager, BoardService};
pub use user_service::{UserManager, UserService};
