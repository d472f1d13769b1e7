//! # EmployeeRepository
//!
//! 従業員情報の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID はストレージ採番**: `INSERT .. RETURNING` で BIGSERIAL の採番結果を受け取る
//! - **一意性制約の変換**: `employees_email_key` 違反を
//!   [`InfraError::conflict`] に変換し、ユースケース層でドメインエラーに写す
//! - **冪等な削除**: 対象行が存在しなくてもエラーにしない

use async_trait::async_trait;
use sqlx::PgPool;
use staffhub_domain::employee::{Email, Employee, EmployeeId, NewEmployee};

use crate::error::InfraError;

/// email 列の UNIQUE 制約名（マイグレーションの定義に従う）
const EMAIL_UNIQUE_CONSTRAINT: &str = "employees_email_key";

/// クエリ間で共有する列リスト
const COLUMNS: &str = "id, first_name, last_name, email";

/// 従業員リポジトリトレイト
///
/// 従業員情報の永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、ユースケース層から利用する。
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
   /// 従業員を挿入し、採番済みのエンティティを返す
   ///
   /// email の一意性制約に違反した場合は
   /// [`InfraErrorKind::Conflict`](crate::error::InfraErrorKind::Conflict) を返す。
   async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError>;

   /// 従業員を更新する
   ///
   /// `first_name` / `last_name` / `email` を上書きする。`id` は変更しない。
   ///
   /// # 戻り値
   ///
   /// - `Ok(Some(employee))`: 更新後の従業員
   /// - `Ok(None)`: 対象の行が存在しない場合
   /// - `Err(_)`: データベースエラー（email 重複の Conflict を含む）
   async fn update(&self, employee: &Employee) -> Result<Option<Employee>, InfraError>;

   /// ID で従業員を検索する
   async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError>;

   /// メールアドレスで従業員を検索する
   async fn find_by_email(&self, email: &Email) -> Result<Option<Employee>, InfraError>;

   /// 全従業員を取得する
   ///
   /// 並び順はストレージ定義（ID 昇順）。契約としての順序保証はない。
   async fn find_all(&self) -> Result<Vec<Employee>, InfraError>;

   /// ID で従業員を削除する
   ///
   /// 対象の行が存在しない場合も成功として扱う（冪等）。
   async fn delete_by_id(&self, id: EmployeeId) -> Result<(), InfraError>;
}

/// PostgreSQL 実装の EmployeeRepository
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
   pool: PgPool,
}

impl PostgresEmployeeRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

/// employees テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
   id:         i64,
   first_name: String,
   last_name:  String,
   email:      String,
}

impl EmployeeRow {
   /// 行をドメインエンティティに変換する
   ///
   /// DB 上の email がドメインの検証を通らない場合は Unexpected 扱いにする。
   fn into_domain(self) -> Result<Employee, InfraError> {
      let email = Email::new(&self.email).map_err(|e| InfraError::unexpected(e.to_string()))?;
      Ok(Employee::new(
         EmployeeId::from_i64(self.id),
         self.first_name,
         self.last_name,
         email,
      ))
   }
}

/// 書き込みエラーのうち email の一意性制約違反を Conflict に変換する
fn map_write_error(err: sqlx::Error, email: &Email) -> InfraError {
   if let sqlx::Error::Database(ref db_err) = err {
      if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) {
         return InfraError::conflict("Employee", email.as_str());
      }
   }
   err.into()
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
   #[tracing::instrument(skip_all)]
   async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError> {
      let query = format!(
         "INSERT INTO employees (first_name, last_name, email)
          VALUES ($1, $2, $3)
          RETURNING {COLUMNS}"
      );
      let row = sqlx::query_as::<_, EmployeeRow>(&query)
         .bind(&employee.first_name)
         .bind(&employee.last_name)
         .bind(employee.email.as_str())
         .fetch_one(&self.pool)
         .await
         .map_err(|e| map_write_error(e, &employee.email))?;

      row.into_domain()
   }

   #[tracing::instrument(skip_all, fields(employee_id = employee.id().as_i64()))]
   async fn update(&self, employee: &Employee) -> Result<Option<Employee>, InfraError> {
      let query = format!(
         "UPDATE employees
          SET first_name = $2, last_name = $3, email = $4
          WHERE id = $1
          RETURNING {COLUMNS}"
      );
      let row = sqlx::query_as::<_, EmployeeRow>(&query)
         .bind(employee.id().as_i64())
         .bind(employee.first_name())
         .bind(employee.last_name())
         .bind(employee.email().as_str())
         .fetch_optional(&self.pool)
         .await
         .map_err(|e| map_write_error(e, employee.email()))?;

      row.map(EmployeeRow::into_domain).transpose()
   }

   #[tracing::instrument(skip_all, fields(employee_id = id.as_i64()))]
   async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
      let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
      let row = sqlx::query_as::<_, EmployeeRow>(&query)
         .bind(id.as_i64())
         .fetch_optional(&self.pool)
         .await?;

      row.map(EmployeeRow::into_domain).transpose()
   }

   #[tracing::instrument(skip_all)]
   async fn find_by_email(&self, email: &Email) -> Result<Option<Employee>, InfraError> {
      let query = format!("SELECT {COLUMNS} FROM employees WHERE email = $1");
      let row = sqlx::query_as::<_, EmployeeRow>(&query)
         .bind(email.as_str())
         .fetch_optional(&self.pool)
         .await?;

      row.map(EmployeeRow::into_domain).transpose()
   }

   #[tracing::instrument(skip_all)]
   async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
      let query = format!("SELECT {COLUMNS} FROM employees ORDER BY id");
      let rows = sqlx::query_as::<_, EmployeeRow>(&query)
         .fetch_all(&self.pool)
         .await?;

      rows.into_iter().map(EmployeeRow::into_domain).collect()
   }

   #[tracing::instrument(skip_all, fields(employee_id = id.as_i64()))]
   async fn delete_by_id(&self, id: EmployeeId) -> Result<(), InfraError> {
      // rows_affected は見ない: 存在しない ID の削除も成功として扱う
      sqlx::query("DELETE FROM employees WHERE id = $1")
         .bind(id.as_i64())
         .execute(&self.pool)
         .await?;
      Ok(())
   }
}
