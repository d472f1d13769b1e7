//! # ヘルスチェックハンドラ
//!
//! Employee Service の稼働状態を確認するためのエンドポイント。
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` — Readiness Check（データベースの接続状態を確認）
//!
//! ## 用途
//!
//! - **ロードバランサー**: ターゲットグループヘルスチェック
//! - **コンテナオーケストレーター**: liveness/readiness probe

use std::{collections::HashMap, sync::Arc};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::PgPool;
use staffhub_shared::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};

/// ヘルスチェックエンドポイント
///
/// サーバーが正常に稼働していることを確認するためのエンドポイント。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse {
      status:  "healthy".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
   })
}

/// Readiness Check 用の State
pub struct ReadinessState {
   pub pool: PgPool,
}

/// Readiness Check エンドポイント
///
/// データベースへの接続状態を確認する。
/// すべてのチェックが成功した場合は 200、失敗がある場合は 503 を返す。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
   let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
      Ok(_) => CheckStatus::Ok,
      Err(e) => {
         tracing::warn!("データベースの readiness チェックに失敗: {}", e);
         CheckStatus::Error
      }
   };

   let status = if database == CheckStatus::Ok {
      ReadinessStatus::Ready
   } else {
      ReadinessStatus::NotReady
   };

   let http_status = match status {
      ReadinessStatus::Ready => StatusCode::OK,
      ReadinessStatus::NotReady => StatusCode::SERVICE_UNAVAILABLE,
   };

   let mut checks = HashMap::new();
   checks.insert("database".to_string(), database);

   (http_status, Json(ReadinessResponse { status, checks }))
}
