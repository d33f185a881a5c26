//! PostgreSQL post store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use devconnect_core::RepoError;
use devconnect_core::domain::{Post, PostContent};
use devconnect_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all_recent(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_content(
        &self,
        id: Uuid,
        content: PostContent,
        at: DateTime<Utc>,
    ) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Updating post content");

        let stamp: DateTimeWithTimeZone = at.into();
        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(content.title()))
            .col_expr(post::Column::Content, Expr::value(content.content()))
            .col_expr(post::Column::UpdatedAt, Expr::value(stamp))
            .col_expr(post::Column::ContentUpdatedAt, Expr::value(Some(stamp)))
            .filter(post::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().next().map(Into::into))
    }

    async fn increment_likes(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Incrementing likes");

        // UPDATE posts SET likes = likes + 1 WHERE id = $1 RETURNING *
        let result = PostEntity::update_many()
            .col_expr(post::Column::Likes, Expr::col(post::Column::Likes).add(1))
            .filter(post::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().next().map(Into::into))
    }
}
