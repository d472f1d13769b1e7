//! # ユースケース層
//!
//! Employee Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` でコンストラクタから注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約

pub mod employee;

pub use employee::EmployeeUseCaseImpl;
