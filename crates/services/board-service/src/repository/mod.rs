//! Repository layer for data access.

mod board_repository;
pub mod entities;
mod unit_of_work;
mod user_repository;

pub use board_repository::{BoardRepository, BoardStore};
pub use unit_of_work::{Persistence, UnitOfWork};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use board_repository::MockBoardRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
