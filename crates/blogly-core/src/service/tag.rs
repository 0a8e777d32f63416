use std::sync::Arc;

use serde::Serialize;

use super::keyed;
use crate::domain::{NewTag, Post, Tag, TagFields};
use crate::error::{DomainError, DomainResult, RepoError};
use crate::ports::TagRepository;

/// A tag with the posts that carry it.
#[derive(Debug, Clone, Serialize)]
pub struct TagDetail {
    pub tag: Tag,
    pub posts: Vec<Post>,
}

pub struct TagService {
    tags: Arc<dyn TagRepository>,
}

impl TagService {
    pub fn new(tags: Arc<dyn TagRepository>) -> Self {
        Self { tags }
    }

    pub async fn list(&self) -> DomainResult<Vec<Tag>> {
        Ok(self.tags.find_all().await?)
    }

    pub async fn get(&self, id: i32) -> DomainResult<Tag> {
        self.tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Tag", id))
    }

    pub async fn detail(&self, id: i32) -> DomainResult<TagDetail> {
        let tag = self.get(id).await?;
        let posts = self.tags.find_posts(id).await?;
        Ok(TagDetail { tag, posts })
    }

    pub async fn create(&self, fields: TagFields) -> DomainResult<Tag> {
        let new = fields.validate()?;
        let name = new.name.clone();

        let tag = self
            .tags
            .insert(new)
            .await
            .map_err(|e| duplicate_name(e, &name))?;
        tracing::info!(tag_id = tag.id, "Tag created");
        Ok(tag)
    }

    pub async fn update(&self, id: i32, fields: TagFields) -> DomainResult<Tag> {
        let mut tag = self.get(id).await?;
        let NewTag { name } = fields.validate()?;
        tag.name = name.clone();

        let tag = self.tags.update(tag).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("Tag", id),
            other => duplicate_name(other, &name),
        })?;
        tracing::info!(tag_id = id, "Tag updated");
        Ok(tag)
    }

    /// Delete a tag. Posts keep existing, only the associations go.
    pub async fn delete(&self, id: i32) -> DomainResult<Tag> {
        let tag = self.get(id).await?;
        self.tags.delete(id).await.map_err(keyed("Tag", id))?;
        tracing::info!(tag_id = id, "Tag deleted");
        Ok(tag)
    }
}

/// Tag names are unique, so a constraint failure on write means the name is taken.
fn duplicate_name(err: RepoError, name: &str) -> DomainError {
    match err {
        RepoError::Constraint(_) => {
            DomainError::Validation(format!("Tag \"{name}\" already exists."))
        }
        other => other.into(),
    }
}
