//! # タスクエンティティ
//!
//! 作業項目を表すエンティティ。コメントは [`crate::comment`] が
//! `task_id` で参照する。
//!
//! ## ライフサイクル
//!
//! - 作成: `title` 必須、`description` / `status` 任意
//! - 更新: 指定されたフィールドのみ置き換える（部分更新）。
//!   更新のたびに `updated_at` が進む
//! - 削除: 明示的なリクエストで削除。関連コメントはカスケードしない

use chrono::{DateTime, Utc};

define_i64_id! {
   /// タスク ID（サーバー採番、不変）
   pub struct TaskId;
}

define_validated_string! {
   /// タスクタイトル
   ///
   /// 1〜200 文字のバリデーションを型レベルで強制する。
   pub struct TaskTitle {
      label: "タイトル",
      max_length: 200,
   }
}

/// ステータス未指定時のデフォルト値
///
/// ステータスは自由入力の文字列であり、列挙型による制約は設けない。
pub const DEFAULT_STATUS: &str = "pending";

/// タスクエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
   id:          TaskId,
   title:       TaskTitle,
   description: Option<String>,
   status:      String,
   created_at:  DateTime<Utc>,
   updated_at:  DateTime<Utc>,
}

/// タスクの新規作成パラメータ
///
/// ID はデータベースが採番するため含まない。
pub struct NewTask {
   pub title:       TaskTitle,
   pub description: Option<String>,
   pub status:      String,
   pub now:         DateTime<Utc>,
}

/// タスクの DB 復元パラメータ
pub struct TaskRecord {
   pub id:          TaskId,
   pub title:       TaskTitle,
   pub description: Option<String>,
   pub status:      String,
   pub created_at:  DateTime<Utc>,
   pub updated_at:  DateTime<Utc>,
}

impl Task {
   /// 既存のデータから復元する
   pub fn from_db(record: TaskRecord) -> Self {
      Self {
         id:          record.id,
         title:       record.title,
         description: record.description,
         status:      record.status,
         created_at:  record.created_at,
         updated_at:  record.updated_at,
      }
   }

   // Getter メソッド

   pub fn id(&self) -> TaskId {
      self.id
   }

   pub fn title(&self) -> &TaskTitle {
      &self.title
   }

   pub fn description(&self) -> Option<&str> {
      self.description.as_deref()
   }

   pub fn status(&self) -> &str {
      &self.status
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }

   // 部分更新用の適用メソッド。指定フィールドのみ置き換え、updated_at を進める

   /// タイトルを置き換える
   pub fn with_title(mut self, title: TaskTitle, now: DateTime<Utc>) -> Self {
      self.title = title;
      self.updated_at = now;
      self
   }

   /// 説明を置き換える（`None` でクリア）
   pub fn with_description(mut self, description: Option<String>, now: DateTime<Utc>) -> Self {
      self.description = description;
      self.updated_at = now;
      self
   }

   /// ステータスを置き換える
   pub fn with_status(mut self, status: String, now: DateTime<Utc>) -> Self {
      self.status = status;
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

   fn task(now: DateTime<Utc>) -> Task {
      Task::from_db(TaskRecord {
         id:          TaskId::from_i64(1),
         title:       TaskTitle::new("牛乳を買う").unwrap(),
         description: Some("帰り道で".to_string()),
         status:      DEFAULT_STATUS.to_string(),
         created_at:  now,
         updated_at:  now,
      })
   }

   mod task_title {
      use super::*;

      #[rstest]
      fn test_1文字で成功() {
         let result = TaskTitle::new("a");
         assert!(result.is_ok());
         assert_eq!(result.unwrap().as_str(), "a");
      }

      #[rstest]
      fn test_200文字で成功() {
         let title: String = "あ".repeat(200);
         let result = TaskTitle::new(title.clone());
         assert!(result.is_ok());
         assert_eq!(result.unwrap().as_str(), title);
      }

      #[rstest]
      fn test_空文字列でエラー() {
         assert!(TaskTitle::new("").is_err());
      }

      #[rstest]
      fn test_空白のみでエラー() {
         assert!(TaskTitle::new("   ").is_err());
      }

      #[rstest]
      fn test_201文字でエラー() {
         let title: String = "あ".repeat(201);
         assert!(TaskTitle::new(title).is_err());
      }

      #[rstest]
      fn test_前後の空白はtrimされる() {
         let title = TaskTitle::new("  買い物  ").unwrap();
         assert_eq!(title.as_str(), "買い物");
      }
   }

   mod task {
      use pretty_assertions::assert_eq;

      use super::*;

      #[rstest]
      fn test_with_statusはステータスのみ変更する(now: DateTime<Utc>) {
         let later = now + chrono::Duration::seconds(60);

         let sut = task(now).with_status("done".to_string(), later);

         assert_eq!(sut.status(), "done");
         assert_eq!(sut.title().as_str(), "牛乳を買う");
         assert_eq!(sut.description(), Some("帰り道で"));
         assert_eq!(sut.created_at(), now);
         assert_eq!(sut.updated_at(), later);
      }

      #[rstest]
      fn test_with_descriptionはnoneでクリアできる(now: DateTime<Utc>) {
         let sut = task(now).with_description(None, now);

         assert_eq!(sut.description(), None);
      }

      #[rstest]
      fn test_with_titleはupdated_atを進める(now: DateTime<Utc>) {
         let later = now + chrono::Duration::seconds(1);
         let title = TaskTitle::new("パンを買う").unwrap();

         let sut = task(now).with_title(title, later);

         assert_eq!(sut.title().as_str(), "パンを買う");
         assert_eq!(sut.updated_at(), later);
      }
   }

   mod task_id {
      use super::*;

      #[rstest]
      fn test_serializeで数値になる() {
         let id = TaskId::from_i64(42);
         assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(42));
      }

      #[rstest]
      fn test_displayで数値文字列になる() {
         assert_eq!(TaskId::from_i64(7).to_string(), "7");
      }
   }
}
