//! # リポジトリ実装
//!
//! リポジトリトレイトと、その PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイト経由でリポジトリを使用
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod comment_repository;
pub mod task_repository;

pub use comment_repository::{CommentRepository, PostgresCommentRepository};
pub use task_repository::{PostgresTaskRepository, TaskRepository};
