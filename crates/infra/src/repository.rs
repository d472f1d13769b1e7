//! # リポジトリ実装
//!
//! 従業員の永続化操作を定義するトレイトと、その具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイト経由でリポジトリを利用
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod employee_repository;

pub use employee_repository::{EmployeeRepository, PostgresEmployeeRepository};
