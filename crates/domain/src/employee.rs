//! # 従業員
//!
//! 従業員エンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`EmployeeId`] は DB 採番の整数をラップし、型安全性を確保
//! - **不変性**: エンティティフィールドは不変、変更は新しいインスタンスの生成で表現
//! - **バリデーション**: 値オブジェクト（[`Email`]）の生成時に検証ロジックを実行
//!
//! ## 不変条件
//!
//! `email` は全従業員を通じて一意。このルールはユースケース層の事前チェックと
//! ストレージの UNIQUE 制約の両方で守られる。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use staffhub_domain::employee::{Email, Employee, EmployeeId, NewEmployee};
//!
//! // 未保存の従業員（ID はストレージが採番する）
//! let new_employee = NewEmployee {
//!     first_name: "太郎".to_string(),
//!     last_name:  "山田".to_string(),
//!     email:      Email::new("taro@example.com")?,
//! };
//!
//! // 保存済みの従業員
//! let employee = Employee::new(
//!     EmployeeId::from_i64(1),
//!     new_employee.first_name,
//!     new_employee.last_name,
//!     new_employee.email,
//! );
//! assert_eq!(employee.id().as_i64(), 1);
//! # Ok(())
//! # }
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 従業員 ID（一意識別子）
///
/// ストレージが採番する整数キーをラップする。
/// Newtype パターンで他の整数 ID との取り違えを防ぐ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct EmployeeId(i64);

impl EmployeeId {
   /// 既存の整数から従業員 ID を作成する
   pub fn from_i64(id: i64) -> Self {
      Self(id)
   }

   /// 内部の整数値を取得する
   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

/// メールアドレス（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
   /// メールアドレスを作成する
   ///
   /// # バリデーション
   ///
   /// - 空文字列ではない
   /// - `local@domain` の形式である
   /// - 最大 255 文字
   ///
   /// # エラー
   ///
   /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();

      if value.is_empty() {
         return Err(DomainError::Validation(
            "メールアドレスは必須です".to_string(),
         ));
      }

      // 基本的な構造検証: local@domain の形式であること
      let Some((local, domain)) = value.split_once('@') else {
         return Err(DomainError::Validation(
            "メールアドレスの形式が不正です".to_string(),
         ));
      };

      if local.is_empty() || domain.is_empty() {
         return Err(DomainError::Validation(
            "メールアドレスの形式が不正です".to_string(),
         ));
      }

      if value.len() > 255 {
         return Err(DomainError::Validation(
            "メールアドレスは255文字以内である必要があります".to_string(),
         ));
      }

      Ok(Self(value))
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }

   /// 所有権を持つ文字列に変換する
   pub fn into_string(self) -> String {
      self.0
   }
}

impl std::fmt::Display for Email {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      write!(f, "{}", self.0)
   }
}

/// 従業員エンティティ
///
/// ディレクトリに登録された 1 名の従業員を表現する。
/// ID はストレージが採番するため、保存前の形は [`NewEmployee`] で表す。
///
/// # 不変条件
///
/// - `email` は全従業員を通じて一意
/// - `id` は採番後に変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
   id:         EmployeeId,
   first_name: String,
   last_name:  String,
   email:      Email,
}

impl Employee {
   /// 従業員エンティティを作成する
   ///
   /// 新規採番直後の構築と、データベースから取得した行の復元の
   /// 両方で使用する。姓・名は自由テキストで、形式の制約は課さない。
   pub fn new(id: EmployeeId, first_name: String, last_name: String, email: Email) -> Self {
      Self {
         id,
         first_name,
         last_name,
         email,
      }
   }

   // Getter メソッド

   pub fn id(&self) -> EmployeeId {
      self.id
   }

   pub fn first_name(&self) -> &str {
      &self.first_name
   }

   pub fn last_name(&self) -> &str {
      &self.last_name
   }

   pub fn email(&self) -> &Email {
      &self.email
   }
}

/// 保存前の従業員
///
/// ID をまだ持たない入力形。リポジトリの `insert` がこれを受け取り、
/// 採番済みの [`Employee`] を返す。
#[derive(Debug, Clone)]
pub struct NewEmployee {
   pub first_name: String,
   pub last_name:  String,
   pub email:      Email,
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   // =========================================================================
   // Email のテスト
   // =========================================================================

   #[test]
   fn test_メールアドレスは正常な値を受け入れる() {
      let email = Email::new("taro@example.com");
      assert!(email.is_ok());
      assert_eq!(email.unwrap().as_str(), "taro@example.com");
   }

   #[test]
   fn test_メールアドレスは空文字列を拒否する() {
      assert!(Email::new("").is_err());
   }

   #[rstest]
   #[case("taro.example.com", "アットマークなし")]
   #[case("@example.com", "ローカル部なし")]
   #[case("taro@", "ドメイン部なし")]
   fn test_メールアドレスは不正な形式を拒否する(
      #[case] value: &str,
      #[case] _description: &str,
   ) {
      assert!(Email::new(value).is_err());
   }

   #[test]
   fn test_メールアドレスは255文字以内を受け入れる() {
      // local 1 文字 + @ + ドメイン 253 文字 = 255 文字
      let value = format!("a@{}", "b".repeat(253));
      assert_eq!(value.len(), 255);
      assert!(Email::new(value).is_ok());
   }

   #[test]
   fn test_メールアドレスは255文字超を拒否する() {
      let value = format!("a@{}", "b".repeat(254));
      assert_eq!(value.len(), 256);
      assert!(Email::new(value).is_err());
   }

   #[test]
   fn test_メールアドレスのdisplayは元の文字列を出力する() {
      let email = Email::new("taro@example.com").unwrap();
      assert_eq!(format!("{email}"), "taro@example.com");
   }

   // =========================================================================
   // EmployeeId のテスト
   // =========================================================================

   #[test]
   fn test_従業員idはi64と相互変換できる() {
      let id = EmployeeId::from_i64(42);
      assert_eq!(id.as_i64(), 42);
      assert_eq!(format!("{id}"), "42");
   }

   #[test]
   fn test_従業員idはserdeで数値として扱われる() {
      let id = EmployeeId::from_i64(7);
      let json = serde_json::to_value(id).unwrap();
      assert_eq!(json, serde_json::json!(7));

      let back: EmployeeId = serde_json::from_value(json).unwrap();
      assert_eq!(back, id);
   }

   // =========================================================================
   // Employee のテスト
   // =========================================================================

   #[test]
   fn test_従業員エンティティはフィールドを保持する() {
      let employee = Employee::new(
         EmployeeId::from_i64(1),
         "太郎".to_string(),
         "山田".to_string(),
         Email::new("taro@example.com").unwrap(),
      );

      assert_eq!(employee.id().as_i64(), 1);
      assert_eq!(employee.first_name(), "太郎");
      assert_eq!(employee.last_name(), "山田");
      assert_eq!(employee.email().as_str(), "taro@example.com");
   }
}
