//! CRUD services - one per entity, each operation a single store round trip
//! (or a single transaction where associations are replaced).
//!
//! Services receive their repositories explicitly and hold no other state.

mod post;
mod tag;
mod user;

pub use post::{PostDetail, PostService};
pub use tag::{TagDetail, TagService};
pub use user::{UserDetail, UserService};

use crate::error::{DomainError, RepoError};

/// Map a repository failure on a keyed operation, turning a missing row into
/// a `NotFound` for that entity.
fn keyed(entity_type: &'static str, id: i32) -> impl FnOnce(RepoError) -> DomainError {
    move |err| match err {
        RepoError::NotFound => DomainError::not_found(entity_type, id),
        other => other.into(),
    }
}
