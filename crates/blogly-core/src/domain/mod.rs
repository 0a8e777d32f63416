//! Domain entities - the core business objects.

mod post;
mod tag;
mod user;

pub use post::{NewPost, Post, PostFields};
pub use tag::{NewTag, Tag, TagFields};
pub use user::{DEFAULT_IMAGE_URL, NewUser, User, UserFields};

use crate::error::DomainError;

/// Returns the trimmed value of a required text field, or a validation error
/// naming the field when it is missing or blank.
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}
