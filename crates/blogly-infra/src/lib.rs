//! # Blogly Infrastructure
//!
//! SeaORM-backed implementations of the repository ports defined in
//! `blogly-core`, plus the database handle the server opens at startup.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL via sqlx
//! - `sqlite` - SQLite via sqlx, handy for local runs and tests

pub mod database;

pub use database::{
    Database, DatabaseConfig, SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository,
};
