use serde::{Deserialize, Serialize};

use super::required;
use crate::error::DomainError;

/// Tag entity - a label that can be attached to many posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct TagFields {
    pub name: String,
}

impl TagFields {
    pub fn validate(self) -> Result<NewTag, DomainError> {
        Ok(NewTag {
            name: required(&self.name, "tag name")?,
        })
    }
}
