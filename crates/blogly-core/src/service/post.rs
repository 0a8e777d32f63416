use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::keyed;
use crate::domain::{NewPost, Post, PostFields, Tag, User};
use crate::error::{DomainError, DomainResult};
use crate::ports::{PostRepository, TagRepository, UserRepository};

/// A post with its author and tags resolved.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub post: Post,
    pub author: User,
    pub tags: Vec<Tag>,
}

/// CRUD operations on posts, including their tag associations.
pub struct PostService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    tags: Arc<dyn TagRepository>,
}

impl PostService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self { users, posts, tags }
    }

    pub async fn list(&self) -> DomainResult<Vec<Post>> {
        Ok(self.posts.find_all().await?)
    }

    pub async fn get(&self, id: i32) -> DomainResult<Post> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post", id))
    }

    pub async fn detail(&self, id: i32) -> DomainResult<PostDetail> {
        let post = self.get(id).await?;
        let author = self.users.find_by_id(post.user_id).await?.ok_or_else(|| {
            DomainError::Integrity(format!("post {} has no owner {}", id, post.user_id))
        })?;
        let tags = self.posts.find_tags(id).await?;

        Ok(PostDetail { post, author, tags })
    }

    /// Create a post owned by `user_id`. Unknown tag ids are dropped.
    pub async fn create(&self, user_id: i32, fields: PostFields) -> DomainResult<Post> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::not_found("User", user_id));
        }

        let (title, content) = fields.validate()?;
        let tag_ids = self.resolve_tags(&fields).await?;

        let new = NewPost {
            user_id,
            title,
            content,
            created_at: Utc::now(),
        };
        let post = self.posts.insert_tagged(new, &tag_ids).await?;

        tracing::info!(post_id = post.id, user_id, tags = tag_ids.len(), "Post created");
        Ok(post)
    }

    /// Overwrite title and content and replace the tag set.
    pub async fn update(&self, id: i32, fields: PostFields) -> DomainResult<Post> {
        let mut post = self.get(id).await?;
        let (title, content) = fields.validate()?;
        let tag_ids = self.resolve_tags(&fields).await?;

        post.title = title;
        post.content = content;
        let post = self
            .posts
            .update_tagged(post, &tag_ids)
            .await
            .map_err(keyed("Post", id))?;

        tracing::info!(post_id = id, tags = tag_ids.len(), "Post updated");
        Ok(post)
    }

    /// Delete a post, returning it so callers know who owned it.
    pub async fn delete(&self, id: i32) -> DomainResult<Post> {
        let post = self.get(id).await?;
        self.posts.delete(id).await.map_err(keyed("Post", id))?;

        tracing::info!(post_id = id, user_id = post.user_id, "Post deleted");
        Ok(post)
    }

    /// Keep only the selected ids that name existing tags.
    async fn resolve_tags(&self, fields: &PostFields) -> DomainResult<Vec<i32>> {
        let requested = fields.unique_tag_ids();
        if requested.is_empty() {
            return Ok(requested);
        }

        let found = self.tags.find_by_ids(&requested).await?;
        let resolved: Vec<i32> = requested
            .into_iter()
            .filter(|id| found.iter().any(|tag| tag.id == *id))
            .collect();

        if resolved.len() < fields.tag_ids.len() {
            tracing::debug!(
                requested = ?fields.tag_ids,
                resolved = ?resolved,
                "Dropped unknown or repeated tag ids"
            );
        }
        Ok(resolved)
    }
}
