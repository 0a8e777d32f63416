//! Application state - shared across all handlers.

use std::sync::Arc;

use blogly_core::ports::{PostRepository, TagRepository, UserRepository};
use blogly_core::{PostService, TagService, UserService};
use blogly_infra::{Database, SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository};

use crate::views::Views;

/// Shared application state.
///
/// Every handler reaches the store through the services held here; nothing
/// else is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub posts: Arc<PostService>,
    pub tags: Arc<TagService>,
    pub views: Arc<Views>,
    pub db: Database,
}

impl AppState {
    /// Wire the services onto an open database handle.
    pub fn new(db: Database, views: Views) -> Self {
        let user_repo: Arc<dyn UserRepository> =
            Arc::new(SeaOrmUserRepository::new(db.shared()));
        let post_repo: Arc<dyn PostRepository> =
            Arc::new(SeaOrmPostRepository::new(db.shared()));
        let tag_repo: Arc<dyn TagRepository> =
            Arc::new(SeaOrmTagRepository::new(db.shared()));

        tracing::info!("Application state initialized");

        Self {
            users: Arc::new(UserService::new(user_repo.clone(), post_repo.clone())),
            posts: Arc::new(PostService::new(user_repo, post_repo, tag_repo.clone())),
            tags: Arc::new(TagService::new(tag_repo)),
            views: Arc::new(views),
            db,
        }
    }
}
