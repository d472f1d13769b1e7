//! # Employee Service エラー定義
//!
//! サービス固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## ステータスコード対応
//!
//! | エラー | HTTP ステータス |
//! |--------|----------------|
//! | `Domain(Validation)` | 400 Bad Request |
//! | `Domain(DuplicateEmail)` | 409 Conflict |
//! | `Domain(NotFound)` | 404 Not Found |
//! | `Database` | 500 Internal Server Error |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use staffhub_domain::DomainError;
use staffhub_infra::InfraError;
use staffhub_shared::ErrorResponse;
use thiserror::Error;

/// Employee Service で発生するエラー
#[derive(Debug, Error)]
pub enum ServiceError {
   /// ドメインルール違反（バリデーション、重複、不存在）
   #[error(transparent)]
   Domain(#[from] DomainError),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl IntoResponse for ServiceError {
   fn into_response(self) -> Response {
      let (status, body) = match &self {
         ServiceError::Domain(DomainError::Validation(msg)) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::validation_error(msg.clone()),
         ),
         ServiceError::Domain(DomainError::DuplicateEmail { .. }) => {
            (StatusCode::CONFLICT, ErrorResponse::conflict(self.to_string()))
         }
         ServiceError::Domain(DomainError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, ErrorResponse::not_found(self.to_string()))
         }
         ServiceError::Database(e) => {
            tracing::error!("データベースエラー: {}\n{}", e, e.span_trace());
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal_error())
         }
      };

      (status, Json(body)).into_response()
   }
}
