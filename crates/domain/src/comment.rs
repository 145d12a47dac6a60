//! # コメントエンティティ
//!
//! タスクに紐づくメモを表すエンティティ。`task_id` でタスクを参照する。
//!
//! ## 参照整合性について
//!
//! `task_id` が実在するタスクを指すかどうかは検証しない。
//! 存在しないタスクへのコメント作成は成功し、タスク削除時の
//! カスケード削除も行わない（現行仕様）。

use chrono::{DateTime, Utc};

use crate::task::TaskId;

define_i64_id! {
   /// コメント ID（サーバー採番）
   pub struct CommentId;
}

define_validated_string! {
   /// コメント本文
   ///
   /// 1〜2,000 文字のバリデーションを型レベルで強制する。
   pub struct CommentContent {
      label: "コメント本文",
      max_length: 2000,
   }
}

/// コメントエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
   id:         CommentId,
   task_id:    TaskId,
   content:    CommentContent,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

/// コメントの新規作成パラメータ
///
/// ID はデータベースが採番するため含まない。
pub struct NewComment {
   pub task_id: TaskId,
   pub content: CommentContent,
   pub now:     DateTime<Utc>,
}

/// コメントの DB 復元パラメータ
pub struct CommentRecord {
   pub id:         CommentId,
   pub task_id:    TaskId,
   pub content:    CommentContent,
   pub created_at: DateTime<Utc>,
   pub updated_at: DateTime<Utc>,
}

impl Comment {
   /// 既存のデータから復元する
   pub fn from_db(record: CommentRecord) -> Self {
      Self {
         id:         record.id,
         task_id:    record.task_id,
         content:    record.content,
         created_at: record.created_at,
         updated_at: record.updated_at,
      }
   }

   // Getter メソッド

   pub fn id(&self) -> CommentId {
      self.id
   }

   pub fn task_id(&self) -> TaskId {
      self.task_id
   }

   pub fn content(&self) -> &CommentContent {
      &self.content
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }

   /// 本文を置き換え、updated_at を進める
   pub fn with_content(mut self, content: CommentContent, now: DateTime<Utc>) -> Self {
      self.content = content;
      self.updated_at = now;
      self
   }
}

#[cfg(test)]
mod tests {
   use rstest::{fixture, rstest};

   use super::*;

   /// テスト用の固定タイムスタンプ
   #[fixture]
   fn now() -> DateTime<Utc> {
      DateTime::from_timestamp(1_700_000_000, 0).unwrap()
   }

   mod comment_content {
      use super::*;

      #[rstest]
      fn test_1文字で成功() {
         let result = CommentContent::new("a");
         assert!(result.is_ok());
         assert_eq!(result.unwrap().as_str(), "a");
      }

      #[rstest]
      fn test_2000文字で成功() {
         let content: String = "あ".repeat(2000);
         let result = CommentContent::new(content.clone());
         assert!(result.is_ok());
         assert_eq!(result.unwrap().as_str(), content);
      }

      #[rstest]
      fn test_空文字列でエラー() {
         assert!(CommentContent::new("").is_err());
      }

      #[rstest]
      fn test_2001文字でエラー() {
         let content: String = "あ".repeat(2001);
         assert!(CommentContent::new(content).is_err());
      }
   }

   mod comment {
      use pretty_assertions::assert_eq;

      use super::*;

      #[rstest]
      fn test_with_contentは本文とupdated_atのみ変更する(now: DateTime<Utc>) {
         let later = now + chrono::Duration::seconds(30);
         let sut = Comment::from_db(CommentRecord {
            id:         CommentId::from_i64(1),
            task_id:    TaskId::from_i64(9),
            content:    CommentContent::new("最初のコメント").unwrap(),
            created_at: now,
            updated_at: now,
         });

         let updated = sut.with_content(CommentContent::new("修正後").unwrap(), later);

         assert_eq!(updated.content().as_str(), "修正後");
         assert_eq!(updated.task_id(), TaskId::from_i64(9));
         assert_eq!(updated.created_at(), now);
         assert_eq!(updated.updated_at(), later);
      }
   }
}
