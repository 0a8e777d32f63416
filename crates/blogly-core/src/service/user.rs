use std::sync::Arc;

use serde::Serialize;

use super::keyed;
use crate::domain::{Post, User, UserFields};
use crate::error::{DomainError, DomainResult};
use crate::ports::{PostRepository, UserRepository};

/// A user together with the posts they own.
#[derive(Debug, Clone, Serialize)]
pub struct UserDetail {
    pub user: User,
    pub posts: Vec<Post>,
}

/// CRUD operations on users.
pub struct UserService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    pub async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.find_all().await?)
    }

    pub async fn get(&self, id: i32) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    pub async fn detail(&self, id: i32) -> DomainResult<UserDetail> {
        let user = self.get(id).await?;
        let posts = self.posts.find_by_user_id(id).await?;
        Ok(UserDetail { user, posts })
    }

    pub async fn create(&self, fields: UserFields) -> DomainResult<User> {
        let new = fields.validate()?;
        let user = self.users.insert(new).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn update(&self, id: i32, fields: UserFields) -> DomainResult<User> {
        let mut user = self.get(id).await?;
        user.apply(fields.validate()?);

        let user = self.users.update(user).await.map_err(keyed("User", id))?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Delete a user. Their posts go with them.
    pub async fn delete(&self, id: i32) -> DomainResult<User> {
        let user = self.get(id).await?;
        let owned = self.posts.count_by_user_id(id).await?;

        self.users.delete(id).await.map_err(keyed("User", id))?;
        tracing::info!(user_id = id, posts_removed = owned, "User deleted");
        Ok(user)
    }
}
