//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックはユースケース層に委譲

pub mod employee;
pub mod health;

pub use employee::{
   EmployeeState,
   create_employee,
   delete_employee,
   get_employee,
   list_employees,
   update_employee,
};
pub use health::{ReadinessState, health_check, readiness_check};
