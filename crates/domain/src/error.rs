//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//!
//! エンティティの不在（404）はリポジトリが `Option` で表現し、
//! API 層がそのままレスポンスに変換するため、ドメインエラーにはしない。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// ビジネスロジックの実行中に発生する例外状態を表現する。
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    /// 必須フィールドの未入力や文字数制限の超過など。
    /// メッセージはそのままフィールドエラーマップに載せるため、接頭辞は付けない。
    #[error("{0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validationのdisplay出力() {
        let err = DomainError::Validation("タイトルは必須です".to_string());
        assert_eq!(format!("{err}"), "タイトルは必須です");
    }
}
