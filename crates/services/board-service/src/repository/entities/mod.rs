//! SeaORM entities.

pub mod board;
pub mod comment;
pub mod user;
