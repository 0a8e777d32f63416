use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::required;
use crate::error::DomainError;

/// Post entity - a blog post owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A validated post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Raw post fields plus the tag identifiers selected on the form.
#[derive(Debug, Clone, Default)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<i32>,
}

impl PostFields {
    /// Presence checks on title and content. Returns the trimmed pair.
    pub fn validate(&self) -> Result<(String, String), DomainError> {
        let title = required(&self.title, "title")?;
        let content = required(&self.content, "content")?;
        Ok((title, content))
    }

    /// Selected tag ids in first-seen order without duplicates.
    pub fn unique_tag_ids(&self) -> Vec<i32> {
        let mut ids = Vec::with_capacity(self.tag_ids.len());
        for id in &self.tag_ids {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }
}
