//! Database connection management and repositories.

mod base;
mod connection;
mod repo;

pub mod entity;

pub use base::SeaOrmBaseRepository;
pub use connection::{Database, DatabaseConfig};
pub use repo::{SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository};
