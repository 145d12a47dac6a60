//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! taskboard-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! ID は PostgreSQL の BIGSERIAL と同様に 1 から順番に採番する。

use std::sync::{
   Arc, Mutex,
   atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use taskboard_domain::{
   comment::{Comment, CommentId, CommentRecord, NewComment},
   task::{NewTask, Task, TaskId, TaskRecord},
};

use crate::{
   error::InfraError,
   repository::{CommentRepository, TaskRepository},
};

// ===== MockTaskRepository =====

#[derive(Clone, Default)]
pub struct MockTaskRepository {
   tasks:   Arc<Mutex<Vec<Task>>>,
   next_id: Arc<AtomicI64>,
}

impl MockTaskRepository {
   pub fn new() -> Self {
      Self {
         tasks:   Arc::new(Mutex::new(Vec::new())),
         next_id: Arc::new(AtomicI64::new(0)),
      }
   }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
   async fn insert(&self, new_task: &NewTask) -> Result<Task, InfraError> {
      let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
      let task = Task::from_db(TaskRecord {
         id:          TaskId::from_i64(id),
         title:       new_task.title.clone(),
         description: new_task.description.clone(),
         status:      new_task.status.clone(),
         created_at:  new_task.now,
         updated_at:  new_task.now,
      });
      self.tasks.lock().unwrap().push(task.clone());
      Ok(task)
   }

   async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
      Ok(self.tasks.lock().unwrap().clone())
   }

   async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError> {
      Ok(self
         .tasks
         .lock()
         .unwrap()
         .iter()
         .find(|t| t.id() == id)
         .cloned())
   }

   async fn update(&self, task: &Task) -> Result<(), InfraError> {
      let mut tasks = self.tasks.lock().unwrap();
      if let Some(pos) = tasks.iter().position(|t| t.id() == task.id()) {
         tasks[pos] = task.clone();
      }
      Ok(())
   }

   async fn delete(&self, id: TaskId) -> Result<(), InfraError> {
      self.tasks.lock().unwrap().retain(|t| t.id() != id);
      Ok(())
   }
}

// ===== MockCommentRepository =====

#[derive(Clone, Default)]
pub struct MockCommentRepository {
   comments: Arc<Mutex<Vec<Comment>>>,
   next_id:  Arc<AtomicI64>,
}

impl MockCommentRepository {
   pub fn new() -> Self {
      Self {
         comments: Arc::new(Mutex::new(Vec::new())),
         next_id:  Arc::new(AtomicI64::new(0)),
      }
   }
}

#[async_trait]
impl CommentRepository for MockCommentRepository {
   async fn insert(&self, new_comment: &NewComment) -> Result<Comment, InfraError> {
      let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
      let comment = Comment::from_db(CommentRecord {
         id:         CommentId::from_i64(id),
         task_id:    new_comment.task_id,
         content:    new_comment.content.clone(),
         created_at: new_comment.now,
         updated_at: new_comment.now,
      });
      self.comments.lock().unwrap().push(comment.clone());
      Ok(comment)
   }

   async fn find_by_task(&self, task_id: TaskId) -> Result<Vec<Comment>, InfraError> {
      Ok(self
         .comments
         .lock()
         .unwrap()
         .iter()
         .filter(|c| c.task_id() == task_id)
         .cloned()
         .collect())
   }

   async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, InfraError> {
      Ok(self
         .comments
         .lock()
         .unwrap()
         .iter()
         .find(|c| c.id() == id)
         .cloned())
   }

   async fn update(&self, comment: &Comment) -> Result<(), InfraError> {
      let mut comments = self.comments.lock().unwrap();
      if let Some(pos) = comments.iter().position(|c| c.id() == comment.id()) {
         comments[pos] = comment.clone();
      }
      Ok(())
   }

   async fn delete(&self, id: CommentId) -> Result<(), InfraError> {
      self.comments.lock().unwrap().retain(|c| c.id() != id);
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use chrono::DateTime;
   use taskboard_domain::task::TaskTitle;

   use super::*;

   #[tokio::test]
   async fn test_insertで1から順番に採番される() {
      let repo = MockTaskRepository::new();
      let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

      let first = repo
         .insert(&NewTask {
            title:       TaskTitle::new("一件目").unwrap(),
            description: None,
            status:      "pending".to_string(),
            now,
         })
         .await
         .unwrap();
      let second = repo
         .insert(&NewTask {
            title:       TaskTitle::new("二件目").unwrap(),
            description: None,
            status:      "pending".to_string(),
            now,
         })
         .await
         .unwrap();

      assert_eq!(first.id(), TaskId::from_i64(1));
      assert_eq!(second.id(), TaskId::from_i64(2));
   }
}
