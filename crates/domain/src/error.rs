//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `DuplicateEmail` | 409 Conflict | メールアドレス一意性制約の違反 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |

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
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// メールアドレスの重複
   ///
   /// 既存の従業員と同じメールアドレスで登録しようとした場合に使用する。
   /// 違反の原因となったメールアドレスを保持する。
   #[error("メールアドレスは既に使用されています: {email}")]
   DuplicateEmail {
      /// 重複していたメールアドレス
      email: String,
   },

   /// エンティティが見つからない
   ///
   /// 指定された ID のエンティティが存在しない場合に使用する。
   ///
   /// # フィールド
   ///
   /// - `entity_type`: エンティティの種類（コンパイル時に決定される `&'static str`）
   /// - `id`: 検索に使用した識別子
   #[error("{entity_type} が見つかりません: {id}")]
   NotFound {
      /// エンティティの種類（例: "Employee"）
      entity_type: &'static str,
      /// 検索に使用した識別子
      id:          String,
   },
}

impl DomainError {
   /// メールアドレス重複エラーを生成する
   pub fn duplicate_email(email: impl Into<String>) -> Self {
      Self::DuplicateEmail {
         email: email.into(),
      }
   }

   /// 従業員の NotFound エラーを生成する
   pub fn employee_not_found(id: impl ToString) -> Self {
      Self::NotFound {
         entity_type: "Employee",
         id:          id.to_string(),
      }
   }
}
