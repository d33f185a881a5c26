use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Post, PostContent};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Returns `RepoError::NotFound` if absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post store.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts, most recently updated first.
    async fn find_all_recent(&self) -> Result<Vec<Post>, RepoError>;

    /// Replace title and content and stamp `updated_at`/`content_updated_at`.
    async fn update_content(
        &self,
        id: Uuid,
        content: PostContent,
        at: DateTime<Utc>,
    ) -> Result<Option<Post>, RepoError>;

    /// Add one like in a single atomic store operation.
    ///
    /// Implementations must not compose this from a read followed by a write.
    async fn increment_likes(&self, id: Uuid) -> Result<Option<Post>, RepoError>;
}
