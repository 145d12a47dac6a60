//! コメント管理ユースケース
//!
//! コメントの作成時に `task_id` の実在確認は行わない。
//! 存在しないタスクに対するコメント作成も成功する（現行仕様）。

use std::{collections::BTreeMap, sync::Arc};

use taskboard_domain::{
   clock::Clock,
   comment::{Comment, CommentContent, CommentId, NewComment},
   task::TaskId,
};
use taskboard_infra::repository::CommentRepository;

use crate::error::ApiError;

/// コメント作成の入力
pub struct CreateCommentInput {
   pub task_id: Option<i64>,
   pub content: Option<String>,
}

/// コメント更新の入力（部分更新）
pub struct UpdateCommentInput {
   pub comment_id: CommentId,
   pub content:    Option<String>,
}

/// コメント管理ユースケース
pub struct CommentUseCaseImpl {
   comment_repository: Arc<dyn CommentRepository>,
   clock:              Arc<dyn Clock>,
}

impl CommentUseCaseImpl {
   pub fn new(comment_repository: Arc<dyn CommentRepository>, clock: Arc<dyn Clock>) -> Self {
      Self {
         comment_repository,
         clock,
      }
   }

   /// コメントを作成する
   ///
   /// `task_id` と `content` の両方が必須。エラーはフィールド単位で収集し、
   /// まとめて返す。
   pub async fn create_comment(&self, input: CreateCommentInput) -> Result<Comment, ApiError> {
      let mut errors = BTreeMap::new();

      let task_id = match input.task_id {
         None => {
            errors.insert("task_id".to_string(), "タスク ID は必須です".to_string());
            None
         }
         Some(id) => Some(TaskId::from_i64(id)),
      };

      let content = match input.content {
         None => {
            errors.insert("content".to_string(), "コメント本文は必須です".to_string());
            None
         }
         Some(value) => match CommentContent::new(value) {
            Ok(content) => Some(content),
            Err(e) => {
               errors.insert("content".to_string(), e.to_string());
               None
            }
         },
      };

      let (Some(task_id), Some(content)) = (task_id, content) else {
         return Err(ApiError::Validation(errors));
      };

      let new_comment = NewComment {
         task_id,
         content,
         now: self.clock.now(),
      };

      let comment = self.comment_repository.insert(&new_comment).await?;

      tracing::debug!(
         comment_id = comment.id().as_i64(),
         task_id = comment.task_id().as_i64(),
         "コメントを作成しました"
      );
      Ok(comment)
   }

   /// タスクに紐づくコメントを全件取得する
   ///
   /// タスクが存在しない場合も空のリストを返す（404 にはしない）。
   pub async fn list_comments_by_task(&self, task_id: TaskId) -> Result<Vec<Comment>, ApiError> {
      Ok(self.comment_repository.find_by_task(task_id).await?)
   }

   /// コメントを部分更新する
   pub async fn update_comment(&self, input: UpdateCommentInput) -> Result<Comment, ApiError> {
      let comment = self
         .comment_repository
         .find_by_id(input.comment_id)
         .await?
         .ok_or_else(|| {
            ApiError::NotFound(format!("コメントが見つかりません: {}", input.comment_id))
         })?;

      let comment = if let Some(content) = input.content {
         let content = CommentContent::new(content).map_err(|e| {
            let mut errors = BTreeMap::new();
            errors.insert("content".to_string(), e.to_string());
            ApiError::Validation(errors)
         })?;
         comment.with_content(content, self.clock.now())
      } else {
         comment
      };

      self.comment_repository.update(&comment).await?;

      Ok(comment)
   }

   /// コメントを削除する
   pub async fn delete_comment(&self, comment_id: CommentId) -> Result<(), ApiError> {
      self
         .comment_repository
         .find_by_id(comment_id)
         .await?
         .ok_or_else(|| {
            ApiError::NotFound(format!("コメントが見つかりません: {comment_id}"))
         })?;

      self.comment_repository.delete(comment_id).await?;

      tracing::debug!(comment_id = comment_id.as_i64(), "コメントを削除しました");
      Ok(())
   }
}
