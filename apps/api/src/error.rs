//! # API エラー定義
//!
//! API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスボディは [`taskboard_shared::ErrorResponse`]（RFC 9457
//! Problem Details）を使用する。バリデーションエラーは `errors` 拡張メンバーに
//! 「フィールド名 → エラーメッセージ」のマップを載せる。

use std::collections::BTreeMap;

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use taskboard_shared::ErrorResponse;
use thiserror::Error;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// バリデーションエラー（フィールド名 → エラーメッセージ）
   #[error("バリデーションエラー")]
   Validation(BTreeMap<String, String>),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] taskboard_infra::InfraError),
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match self {
         ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
         ApiError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::validation_error("入力内容に誤りがあります", errors),
         ),
         ApiError::Database(e) => {
            tracing::error!(span_trace = %e.span_trace(), "データベースエラー: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_not_foundは404になる() {
      let response = ApiError::NotFound("タスクが見つかりません: 1".to_string()).into_response();
      assert_eq!(response.status(), StatusCode::NOT_FOUND);
   }

   #[test]
   fn test_validationは400になる() {
      let mut errors = BTreeMap::new();
      errors.insert("title".to_string(), "タイトルは必須です".to_string());

      let response = ApiError::Validation(errors).into_response();
      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   }

   #[tokio::test]
   async fn test_validationのボディにerrorsマップが含まれる() {
      let mut errors = BTreeMap::new();
      errors.insert("title".to_string(), "タイトルは必須です".to_string());

      let response = ApiError::Validation(errors).into_response();
      let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

      assert_eq!(json["status"], 400);
      assert_eq!(json["errors"]["title"], "タイトルは必須です");
   }

   #[test]
   fn test_databaseエラーは500になる() {
      let infra_err: taskboard_infra::InfraError = sqlx::Error::RowNotFound.into();
      let response = ApiError::Database(infra_err).into_response();
      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   }
}
