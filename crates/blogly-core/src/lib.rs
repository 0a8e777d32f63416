//! # Blogly Core
//!
//! The domain layer of the Blogly blogging application: entities, the
//! repository ports that storage must implement, and the CRUD services
//! that the HTTP layer drives. No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, DomainResult};
pub use service::{PostService, TagService, UserService};
