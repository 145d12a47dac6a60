//! # ユースケース層
//!
//! API のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと時計を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//! - **バリデーション**: create はフィールド単位のエラーマップを構築する

pub mod comment;
pub mod task;

pub use comment::{CommentUseCaseImpl, CreateCommentInput, UpdateCommentInput};
pub use task::{CreateTaskInput, TaskUseCaseImpl, UpdateTaskInput};
