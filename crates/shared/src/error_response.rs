//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! API 全体で共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は api クレートの責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除
//! - バリデーション失敗時は `errors` 拡張メンバーに
//!   「フィールド名 → エラーメッセージ」のマップを載せる

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://taskboard.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// すべてのエラーで統一されたレスポンス形式。
/// `type` フィールドは URI で問題の種類を識別する。
/// `errors` は拡張メンバーで、バリデーションエラー時のみ出力される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
   /// フィールド名 → エラーメッセージ（バリデーションエラー時のみ）
   #[serde(skip_serializing_if = "Option::is_none")]
   pub errors:     Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// `error_type_suffix` はベース URI に付加される（例: `"not-found"`）。
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
         errors: None,
      }
   }

   /// 404 Not Found
   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::new("not-found", "Not Found", 404, detail)
   }

   /// 400 Validation Error
   ///
   /// `errors` にフィールド単位のエラーメッセージを載せる。
   pub fn validation_error(
      detail: impl Into<String>,
      errors: BTreeMap<String, String>,
   ) -> Self {
      let mut response = Self::new("validation-error", "Validation Error", 400, detail);
      response.errors = Some(errors);
      response
   }

   /// 500 Internal Server Error
   ///
   /// detail は固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new(
         "internal-error",
         "Internal Server Error",
         500,
         "内部エラーが発生しました",
      )
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_not_foundが404のproblem_detailsを生成する() {
      let response = ErrorResponse::not_found("タスクが見つかりません");

      assert_eq!(response.status, 404);
      assert_eq!(response.title, "Not Found");
      assert_eq!(
         response.error_type,
         "https://taskboard.example.com/errors/not-found"
      );
      assert!(response.errors.is_none());
   }

   #[test]
   fn test_serializeでtypeフィールドにリネームされる() {
      let response = ErrorResponse::not_found("タスクが見つかりません: 1");
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "type": "https://taskboard.example.com/errors/not-found",
            "title": "Not Found",
            "status": 404,
            "detail": "タスクが見つかりません: 1"
         })
      );
   }

   #[test]
   fn test_validation_errorがerrorsマップを含む() {
      let mut errors = BTreeMap::new();
      errors.insert("title".to_string(), "タイトルは必須です".to_string());

      let response = ErrorResponse::validation_error("入力内容に誤りがあります", errors);
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(json["status"], 400);
      assert_eq!(json["errors"]["title"], "タイトルは必須です");
   }

   #[test]
   fn test_errorsがnoneの場合はjsonに出力されない() {
      let response = ErrorResponse::internal_error();
      let json = serde_json::to_value(&response).unwrap();

      assert!(json.get("errors").is_none());
   }

   #[test]
   fn test_deserializeでjsonからオブジェクトに変換する() {
      let json = r#"{
         "type": "https://taskboard.example.com/errors/not-found",
         "title": "Not Found",
         "status": 404,
         "detail": "なし"
      }"#;
      let response: ErrorResponse = serde_json::from_str(json).unwrap();

      assert_eq!(response, ErrorResponse::not_found("なし"));
   }
}
