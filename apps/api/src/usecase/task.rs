//! タスク管理ユースケース

use std::{collections::BTreeMap, sync::Arc};

use taskboard_domain::{
   clock::Clock,
   task::{DEFAULT_STATUS, NewTask, Task, TaskId, TaskTitle},
};
use taskboard_infra::repository::TaskRepository;

use crate::error::ApiError;

/// タスク作成の入力
///
/// バリデーション前の生の入力を受け取るため、全フィールドが Option。
pub struct CreateTaskInput {
   pub title:       Option<String>,
   pub description: Option<String>,
   pub status:      Option<String>,
}

/// タスク更新の入力（部分更新）
///
/// `None` のフィールドは変更しない。`description` は二重 Option で
/// 「未指定（変更なし）」と「明示的な null（クリア）」を区別する。
pub struct UpdateTaskInput {
   pub task_id:     TaskId,
   pub title:       Option<String>,
   pub description: Option<Option<String>>,
   pub status:      Option<String>,
}

/// タスク管理ユースケース
pub struct TaskUseCaseImpl {
   task_repository: Arc<dyn TaskRepository>,
   clock:           Arc<dyn Clock>,
}

impl TaskUseCaseImpl {
   pub fn new(task_repository: Arc<dyn TaskRepository>, clock: Arc<dyn Clock>) -> Self {
      Self {
         task_repository,
         clock,
      }
   }

   /// タスクを作成する
   ///
   /// 1. `title` の存在と形式を検証（エラーはフィールド単位で収集）
   /// 2. `status` 未指定時はデフォルト値を補完
   /// 3. DB に挿入し、採番済みのエンティティを返す
   pub async fn create_task(&self, input: CreateTaskInput) -> Result<Task, ApiError> {
      let mut errors = BTreeMap::new();

      let title = match input.title {
         None => {
            errors.insert("title".to_string(), "タイトルは必須です".to_string());
            None
         }
         Some(value) => match TaskTitle::new(value) {
            Ok(title) => Some(title),
            Err(e) => {
               errors.insert("title".to_string(), e.to_string());
               None
            }
         },
      };

      let Some(title) = title else {
         return Err(ApiError::Validation(errors));
      };

      let new_task = NewTask {
         title,
         description: input.description,
         status: input.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
         now: self.clock.now(),
      };

      let task = self.task_repository.insert(&new_task).await?;

      tracing::debug!(task_id = task.id().as_i64(), "タスクを作成しました");
      Ok(task)
   }

   /// 全タスクを取得する
   pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
      Ok(self.task_repository.find_all().await?)
   }

   /// ID でタスクを取得する
   pub async fn get_task(&self, task_id: TaskId) -> Result<Task, ApiError> {
      self
         .task_repository
         .find_by_id(task_id)
         .await?
         .ok_or_else(|| ApiError::NotFound(format!("タスクが見つかりません: {task_id}")))
   }

   /// タスクを部分更新する
   ///
   /// 指定されたフィールドのみ置き換え、`updated_at` を進める。
   pub async fn update_task(&self, input: UpdateTaskInput) -> Result<Task, ApiError> {
      let task = self
         .task_repository
         .find_by_id(input.task_id)
         .await?
         .ok_or_else(|| {
            ApiError::NotFound(format!("タスクが見つかりません: {}", input.task_id))
         })?;

      let now = self.clock.now();

      // 各フィールドを更新
      let task = if let Some(title) = input.title {
         let title = TaskTitle::new(title).map_err(|e| {
            let mut errors = BTreeMap::new();
            errors.insert("title".to_string(), e.to_string());
            ApiError::Validation(errors)
         })?;
         task.with_title(title, now)
      } else {
         task
      };

      let task = if let Some(description) = input.description {
         task.with_description(description, now)
      } else {
         task
      };

      let task = if let Some(status) = input.status {
         task.with_status(status, now)
      } else {
         task
      };

      self.task_repository.update(&task).await?;

      Ok(task)
   }

   /// タスクを削除する
   ///
   /// 関連コメントはカスケード削除しない（現行仕様）。
   pub async fn delete_task(&self, task_id: TaskId) -> Result<(), ApiError> {
      self
         .task_repository
         .find_by_id(task_id)
         .await?
         .ok_or_else(|| ApiError::NotFound(format!("タスクが見つかりません: {task_id}")))?;

      self.task_repository.delete(task_id).await?;

      tracing::debug!(task_id = task_id.as_i64(), "タスクを削除しました");
      Ok(())
   }
}
