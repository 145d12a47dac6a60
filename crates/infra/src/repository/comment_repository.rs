//! # CommentRepository
//!
//! コメントの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **参照整合性は検証しない**: `task_id` の実在チェックや外部キー制約は
//!   設けない（現行仕様）
//! - **一覧は id ASC**: 挿入順と一致する安定した並び

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use taskboard_domain::{
   comment::{Comment, CommentContent, CommentId, CommentRecord, NewComment},
   task::TaskId,
};

use crate::error::InfraError;

/// コメントリポジトリトレイト
///
/// コメントの永続化操作を定義する。
#[async_trait]
pub trait CommentRepository: Send + Sync {
   /// 新規コメントを作成し、採番済みのエンティティを返す
   async fn insert(&self, new_comment: &NewComment) -> Result<Comment, InfraError>;

   /// タスク ID でコメント一覧を取得する（id ASC）
   async fn find_by_task(&self, task_id: TaskId) -> Result<Vec<Comment>, InfraError>;

   /// ID でコメントを検索する
   async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, InfraError>;

   /// コメントを更新する（content, updated_at）
   async fn update(&self, comment: &Comment) -> Result<(), InfraError>;

   /// コメントを削除する
   async fn delete(&self, id: CommentId) -> Result<(), InfraError>;
}

/// DB の comments テーブルの行を表す中間構造体
#[derive(sqlx::FromRow)]
struct CommentRow {
   id:         i64,
   task_id:    i64,
   content:    String,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
   type Error = InfraError;

   fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
      Ok(Comment::from_db(CommentRecord {
         id:         CommentId::from_i64(row.id),
         task_id:    TaskId::from_i64(row.task_id),
         content:    CommentContent::new(row.content)
            .map_err(|e| InfraError::unexpected(e.to_string()))?,
         created_at: row.created_at,
         updated_at: row.updated_at,
      }))
   }
}

/// PostgreSQL 実装の CommentRepository
#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
   pool: PgPool,
}

impl PostgresCommentRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
   async fn insert(&self, new_comment: &NewComment) -> Result<Comment, InfraError> {
      let row = sqlx::query_as::<_, CommentRow>(
         r#"
            INSERT INTO comments (task_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, task_id, content, created_at, updated_at
            "#,
      )
      .bind(new_comment.task_id.as_i64())
      .bind(new_comment.content.as_str())
      .bind(new_comment.now)
      .bind(new_comment.now)
      .fetch_one(&self.pool)
      .await?;

      row.try_into()
   }

   async fn find_by_task(&self, task_id: TaskId) -> Result<Vec<Comment>, InfraError> {
      let rows = sqlx::query_as::<_, CommentRow>(
         r#"
            SELECT id, task_id, content, created_at, updated_at
            FROM comments
            WHERE task_id = $1
            ORDER BY id ASC
            "#,
      )
      .bind(task_id.as_i64())
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter().map(Comment::try_from).collect()
   }

   async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, InfraError> {
      let row = sqlx::query_as::<_, CommentRow>(
         r#"
            SELECT id, task_id, content, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      row.map(Comment::try_from).transpose()
   }

   async fn update(&self, comment: &Comment) -> Result<(), InfraError> {
      sqlx::query(
         r#"
            UPDATE comments
            SET content = $2, updated_at = $3
            WHERE id = $1
            "#,
      )
      .bind(comment.id().as_i64())
      .bind(comment.content().as_str())
      .bind(comment.updated_at())
      .execute(&self.pool)
      .await?;

      Ok(())
   }

   async fn delete(&self, id: CommentId) -> Result<(), InfraError> {
      sqlx::query("DELETE FROM comments WHERE id = $1")
         .bind(id.as_i64())
         .execute(&self.pool)
         .await?;

      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   /// トレイトオブジェクトとして使用できることを確認
   #[test]
   fn test_トレイトはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<Box<dyn CommentRepository>>();
   }
}
