use async_trait::async_trait;

use crate::domain::{NewPost, NewTag, NewUser, Post, Tag, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `T` is the stored entity, `N` the not-yet-stored form of it.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// All rows, ordered by primary key.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity and return it with its generated ID.
    async fn insert(&self, new: N) -> Result<T, RepoError>;

    /// Overwrite every column of an existing entity.
    /// Fails with `RepoError::NotFound` when no row has its ID.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository.
///
/// Deleting a user cascades to its posts at the storage level.
#[async_trait]
pub trait UserRepository: BaseRepository<User, NewUser, i32> {}

/// Post repository with ownership and tag association queries.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i32> {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;

    async fn count_by_user_id(&self, user_id: i32) -> Result<u64, RepoError>;

    /// Tags currently associated with a post.
    async fn find_tags(&self, post_id: i32) -> Result<Vec<Tag>, RepoError>;

    /// Insert a post and associate it with `tag_ids` in one transaction.
    /// The ids must already refer to existing tags.
    async fn insert_tagged(&self, new: NewPost, tag_ids: &[i32]) -> Result<Post, RepoError>;

    /// Update a post and replace its tag associations in one transaction.
    async fn update_tagged(&self, post: Post, tag_ids: &[i32]) -> Result<Post, RepoError>;
}

/// Tag repository.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag, NewTag, i32> {
    /// The subset of `ids` that refer to existing tags.
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>, RepoError>;

    /// Posts carrying the given tag.
    async fn find_posts(&self, tag_id: i32) -> Result<Vec<Post>, RepoError>;
}
