//! Entity-specific SeaORM repositories.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

use blogly_core::domain::{NewPost, Post, Tag};
use blogly_core::error::RepoError;
use blogly_core::ports::{PostRepository, TagRepository, UserRepository};

use super::base::{SeaOrmBaseRepository, repo_err};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::entity::user::Entity as UserEntity;

/// SeaORM user repository.
pub type SeaOrmUserRepository = SeaOrmBaseRepository<UserEntity>;

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

/// SeaORM tag repository.
pub type SeaOrmTagRepository = SeaOrmBaseRepository<TagEntity>;

impl UserRepository for SeaOrmUserRepository {}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(user_id, "Finding posts by owner");

        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count_by_user_id(&self, user_id: i32) -> Result<u64, RepoError> {
        PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(repo_err)
    }

    async fn find_tags(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .join(JoinType::InnerJoin, tag::Relation::PostTag.def())
            .filter(post_tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Name)
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert_tagged(&self, new: NewPost, tag_ids: &[i32]) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(repo_err)?;

        let model = post::ActiveModel::from(new)
            .insert(&txn)
            .await
            .map_err(repo_err)?;
        link_tags(&txn, model.id, tag_ids).await?;

        txn.commit().await.map_err(repo_err)?;
        Ok(model.into())
    }

    async fn update_tagged(&self, post: Post, tag_ids: &[i32]) -> Result<Post, RepoError> {
        let post_id = post.id;
        let txn = self.db.begin().await.map_err(repo_err)?;

        let model = post::ActiveModel::from(post)
            .update(&txn)
            .await
            .map_err(repo_err)?;

        let unlinked = PostTagEntity::delete_many()
            .filter(post_tag::Column::PostId.eq(post_id))
            .exec(&txn)
            .await
            .map_err(repo_err)?;
        tracing::debug!(post_id, removed = unlinked.rows_affected, "Cleared post tags");

        link_tags(&txn, post_id, tag_ids).await?;

        txn.commit().await.map_err(repo_err)?;
        Ok(model.into())
    }
}

/// Associate a post with each of `tag_ids`. Runs inside the caller's transaction.
async fn link_tags(
    txn: &DatabaseTransaction,
    post_id: i32,
    tag_ids: &[i32],
) -> Result<(), RepoError> {
    if tag_ids.is_empty() {
        return Ok(());
    }

    let links = tag_ids.iter().map(|&tag_id| post_tag::ActiveModel {
        post_id: Set(post_id),
        tag_id: Set(tag_id),
    });
    PostTagEntity::insert_many(links)
        .exec_without_returning(txn)
        .await
        .map_err(repo_err)?;

    Ok(())
}

#[async_trait]
impl TagRepository for SeaOrmTagRepository {
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = TagEntity::find()
            .filter(tag::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(tag::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_posts(&self, tag_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .join(JoinType::InnerJoin, post::Relation::PostTag.def())
            .filter(post_tag::Column::TagId.eq(tag_id))
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
