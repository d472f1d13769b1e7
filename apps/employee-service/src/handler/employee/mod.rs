//! # 従業員ハンドラ
//!
//! 従業員 CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/employee` - 従業員を作成（201 / 重複 email は 409）
//! - `GET /api/employee` - 全従業員の一覧
//! - `GET /api/employee/{id}` - 従業員を取得（不存在は 404・空ボディ）
//! - `PUT /api/employee/{id}` - 従業員を更新（不存在は 404・空ボディ）
//! - `DELETE /api/employee/{id}` - 従業員を削除（常に 200）
//!
//! 404 の 2 経路が空ボディを返すのは公開 API の互換性契約による。
//! その他のエラーは RFC 9457 Problem Details で返す。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use staffhub_domain::{
   DomainError,
   employee::{Email, Employee, EmployeeId, NewEmployee},
};

use crate::{error::ServiceError, usecase::EmployeeUseCaseImpl};


/// 従業員 API の共有状態
pub struct EmployeeState {
   pub usecase: EmployeeUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 従業員作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
   pub first_name: String,
   pub last_name:  String,
   pub email:      String,
}

/// 従業員更新リクエスト
///
/// 3 フィールドすべてを上書きする。部分更新はサポートしない。
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
   pub first_name: String,
   pub last_name:  String,
   pub email:      String,
}

/// 従業員レスポンス
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
   pub id:         i64,
   pub first_name: String,
   pub last_name:  String,
   pub email:      String,
}

impl From<&Employee> for EmployeeResponse {
   fn from(employee: &Employee) -> Self {
      Self {
         id:         employee.id().as_i64(),
         first_name: employee.first_name().to_string(),
         last_name:  employee.last_name().to_string(),
         email:      employee.email().as_str().to_string(),
      }
   }
}

// --- ハンドラ ---

/// POST /api/employee
///
/// 従業員を作成する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成された従業員（採番済み ID 付き）
/// - `400 Bad Request`: メールアドレスの形式が不正
/// - `409 Conflict`: メールアドレスが既に使用されている
#[tracing::instrument(skip_all)]
pub async fn create_employee(
   State(state): State<Arc<EmployeeState>>,
   Json(req): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, ServiceError> {
   let email = Email::new(&req.email).map_err(ServiceError::from)?;

   let created = state
      .usecase
      .create(NewEmployee {
         first_name: req.first_name,
         last_name: req.last_name,
         email,
      })
      .await?;

   Ok((StatusCode::CREATED, Json(EmployeeResponse::from(&created))))
}

/// GET /api/employee
///
/// 全従業員の一覧を取得する。空の配列も正常なレスポンス。
#[tracing::instrument(skip_all)]
pub async fn list_employees(
   State(state): State<Arc<EmployeeState>>,
) -> Result<impl IntoResponse, ServiceError> {
   let employees = state.usecase.list_all().await?;

   let items: Vec<EmployeeResponse> = employees.iter().map(EmployeeResponse::from).collect();
   Ok((StatusCode::OK, Json(items)))
}

/// GET /api/employee/{id}
///
/// 従業員を取得する。
///
/// ## レスポンス
///
/// - `200 OK`: 従業員情報
/// - `404 Not Found`: 従業員が見つからない（空ボディ）
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_employee(
   State(state): State<Arc<EmployeeState>>,
   Path(id): Path<i64>,
) -> Response {
   match state.usecase.get_by_id(EmployeeId::from_i64(id)).await {
      Ok(employee) => (StatusCode::OK, Json(EmployeeResponse::from(&employee))).into_response(),
      Err(ServiceError::Domain(DomainError::NotFound { .. })) => {
         StatusCode::NOT_FOUND.into_response()
      }
      Err(e) => e.into_response(),
   }
}

/// PUT /api/employee/{id}
///
/// 従業員を更新する。既存レコードを取得し、`first_name` / `last_name` /
/// `email` を上書きして保存する。`id` は変更されない。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の従業員情報
/// - `400 Bad Request`: メールアドレスの形式が不正
/// - `404 Not Found`: 従業員が見つからない（空ボディ）
/// - `409 Conflict`: メールアドレスが他の従業員と重複している
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_employee(
   State(state): State<Arc<EmployeeState>>,
   Path(id): Path<i64>,
   Json(req): Json<UpdateEmployeeRequest>,
) -> Response {
   let email = match Email::new(&req.email) {
      Ok(email) => email,
      Err(e) => return ServiceError::from(e).into_response(),
   };

   let found = match state.usecase.get_by_id(EmployeeId::from_i64(id)).await {
      Ok(employee) => employee,
      Err(ServiceError::Domain(DomainError::NotFound { .. })) => {
         return StatusCode::NOT_FOUND.into_response();
      }
      Err(e) => return e.into_response(),
   };

   let changed = Employee::new(found.id(), req.first_name, req.last_name, email);
   match state.usecase.update(changed).await {
      Ok(updated) => (StatusCode::OK, Json(EmployeeResponse::from(&updated))).into_response(),
      Err(ServiceError::Domain(DomainError::NotFound { .. })) => {
         // 取得と更新の間に行が消えた場合
         StatusCode::NOT_FOUND.into_response()
      }
      Err(e) => e.into_response(),
   }
}

/// DELETE /api/employee/{id}
///
/// 従業員を削除する。対象が存在しない場合も成功として扱い、
/// 常に 200 と確認メッセージを返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_employee(
   State(state): State<Arc<EmployeeState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
   state.usecase.delete(EmployeeId::from_i64(id)).await?;

   Ok((
      StatusCode::OK,
      format!("従業員 (id: {id}) を削除しました。"),
   ))
}
