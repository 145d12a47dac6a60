//! # TaskRepository
//!
//! タスクの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **採番は DB に委譲**: `id` は BIGSERIAL で採番されるため、
//!   `insert` は `RETURNING` で確定後の行を読み戻して返す
//! - **一覧は id ASC**: 挿入順と一致する安定した並び

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use taskboard_domain::task::{NewTask, Task, TaskId, TaskRecord, TaskTitle};

use crate::error::InfraError;

/// タスクリポジトリトレイト
///
/// タスクの永続化操作を定義する。
#[async_trait]
pub trait TaskRepository: Send + Sync {
   /// 新規タスクを作成し、採番済みのエンティティを返す
   async fn insert(&self, new_task: &NewTask) -> Result<Task, InfraError>;

   /// 全タスクを取得する（id ASC）
   async fn find_all(&self) -> Result<Vec<Task>, InfraError>;

   /// ID でタスクを検索する
   async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError>;

   /// タスクを更新する（title, description, status, updated_at）
   async fn update(&self, task: &Task) -> Result<(), InfraError>;

   /// タスクを削除する
   async fn delete(&self, id: TaskId) -> Result<(), InfraError>;
}

/// DB の tasks テーブルの行を表す中間構造体
#[derive(sqlx::FromRow)]
struct TaskRow {
   id:          i64,
   title:       String,
   description: Option<String>,
   status:      String,
   created_at:  DateTime<Utc>,
   updated_at:  DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
   type Error = InfraError;

   fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
      Ok(Task::from_db(TaskRecord {
         id:          TaskId::from_i64(row.id),
         title:       TaskTitle::new(row.title)
            .map_err(|e| InfraError::unexpected(e.to_string()))?,
         description: row.description,
         status:      row.status,
         created_at:  row.created_at,
         updated_at:  row.updated_at,
      }))
   }
}

/// PostgreSQL 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
   pool: PgPool,
}

impl PostgresTaskRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
   async fn insert(&self, new_task: &NewTask) -> Result<Task, InfraError> {
      let row = sqlx::query_as::<_, TaskRow>(
         r#"
            INSERT INTO tasks (title, description, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, status, created_at, updated_at
            "#,
      )
      .bind(new_task.title.as_str())
      .bind(new_task.description.as_deref())
      .bind(&new_task.status)
      .bind(new_task.now)
      .bind(new_task.now)
      .fetch_one(&self.pool)
      .await?;

      row.try_into()
   }

   async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
      let rows = sqlx::query_as::<_, TaskRow>(
         r#"
            SELECT id, title, description, status, created_at, updated_at
            FROM tasks
            ORDER BY id ASC
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter().map(Task::try_from).collect()
   }

   async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError> {
      let row = sqlx::query_as::<_, TaskRow>(
         r#"
            SELECT id, title, description, status, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      row.map(Task::try_from).transpose()
   }

   async fn update(&self, task: &Task) -> Result<(), InfraError> {
      sqlx::query(
         r#"
            UPDATE tasks
            SET title = $2, description = $3, status = $4, updated_at = $5
            WHERE id = $1
            "#,
      )
      .bind(task.id().as_i64())
      .bind(task.title().as_str())
      .bind(task.description())
      .bind(task.status())
      .bind(task.updated_at())
      .execute(&self.pool)
      .await?;

      Ok(())
   }

   async fn delete(&self, id: TaskId) -> Result<(), InfraError> {
      sqlx::query("DELETE FROM tasks WHERE id = $1")
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
      assert_send_sync::<Box<dyn TaskRepository>>();
   }
}
