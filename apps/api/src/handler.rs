//! # HTTP ハンドラ
//!
//! axum のルートハンドラ群。リクエストの受け取りと DTO 変換のみを行い、
//! ビジネスロジックは [`crate::usecase`] に委譲する。

pub mod comment;
pub mod health;
pub mod task;
