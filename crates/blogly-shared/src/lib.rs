//! # Blogly Shared
//!
//! Types exchanged over the HTTP boundary: the submitted forms and the
//! payload of rendered error pages.

pub mod dto;
pub mod response;

pub use dto::{PostForm, TagForm, UserForm};
pub use response::ErrorResponse;
