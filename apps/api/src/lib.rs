//! # Taskboard API ライブラリ
//!
//! API サーバーのハンドラとユースケースを公開する。
//! 統合テストから内部モジュールへのアクセスを提供する。

pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
