//! # StaffHub ドメイン層
//!
//! 従業員ディレクトリのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`employee::Employee`]）
//! - **値オブジェクト**: 生成時にバリデーションを実行する不変オブジェクト
//!   （[`employee::Email`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! employee-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//! これにより、ビジネスロジックの純粋性が保たれる。
//!
//! ## 使用例
//!
//! ```rust
//! use staffhub_domain::{DomainError, employee::Email};
//!
//! // メールアドレス値オブジェクトの生成
//! let email = Email::new("taro@example.com").unwrap();
//!
//! // ドメインエラーの生成
//! let error = DomainError::NotFound {
//!     entity_type: "Employee",
//!     id:          "42".to_string(),
//! };
//! ```

pub mod employee;
pub mod error;

pub use error::DomainError;
