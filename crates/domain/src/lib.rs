//! # Taskboard ドメイン層
//!
//! タスクとコメントのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`task::Task`],
//!   [`comment::Comment`]）
//! - **値オブジェクト**: バリデーションを型レベルで強制する不変オブジェクト
//!   （[`task::TaskTitle`], [`comment::CommentContent`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain → shared
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダ（テストで固定時刻を注入可能にする）
//! - [`comment`] - コメントエンティティ
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`task`] - タスクエンティティ

#[macro_use]
mod macros;

pub mod clock;
pub mod comment;
pub mod error;
pub mod task;

pub use error::DomainError;
