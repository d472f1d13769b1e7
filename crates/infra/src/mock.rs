//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! staffhub-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! PostgreSQL 実装と同じ観察可能な振る舞いを再現する:
//! ID の採番、email の一意性制約（[`InfraError::conflict`]）、冪等な削除。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use staffhub_domain::employee::{Email, Employee, EmployeeId, NewEmployee};

use crate::{error::InfraError, repository::EmployeeRepository};

/// インメモリ実装の EmployeeRepository
#[derive(Clone)]
pub struct MockEmployeeRepository {
   employees: Arc<Mutex<Vec<Employee>>>,
   next_id:   Arc<Mutex<i64>>,
}

impl Default for MockEmployeeRepository {
   fn default() -> Self {
      Self::new()
   }
}

impl MockEmployeeRepository {
   pub fn new() -> Self {
      Self {
         employees: Arc::new(Mutex::new(Vec::new())),
         next_id:   Arc::new(Mutex::new(1)),
      }
   }

   /// 保持している従業員数を返す（アサーション用）
   pub fn len(&self) -> usize {
      self.employees.lock().unwrap().len()
   }

   pub fn is_empty(&self) -> bool {
      self.employees.lock().unwrap().is_empty()
   }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
   async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError> {
      let mut employees = self.employees.lock().unwrap();

      // UNIQUE 制約のエミュレーション
      if employees.iter().any(|e| e.email() == &employee.email) {
         return Err(InfraError::conflict("Employee", employee.email.as_str()));
      }

      let mut next_id = self.next_id.lock().unwrap();
      let id = EmployeeId::from_i64(*next_id);
      *next_id += 1;

      let created = Employee::new(
         id,
         employee.first_name.clone(),
         employee.last_name.clone(),
         employee.email.clone(),
      );
      employees.push(created.clone());
      Ok(created)
   }

   async fn update(&self, employee: &Employee) -> Result<Option<Employee>, InfraError> {
      let mut employees = self.employees.lock().unwrap();

      // 他の行が同じ email を持っていれば UNIQUE 制約違反
      if employees
         .iter()
         .any(|e| e.id() != employee.id() && e.email() == employee.email())
      {
         return Err(InfraError::conflict("Employee", employee.email().as_str()));
      }

      match employees.iter_mut().find(|e| e.id() == employee.id()) {
         Some(slot) => {
            *slot = employee.clone();
            Ok(Some(employee.clone()))
         }
         None => Ok(None),
      }
   }

   async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
      Ok(self
         .employees
         .lock()
         .unwrap()
         .iter()
         .find(|e| e.id() == id)
         .cloned())
   }

   async fn find_by_email(&self, email: &Email) -> Result<Option<Employee>, InfraError> {
      Ok(self
         .employees
         .lock()
         .unwrap()
         .iter()
         .find(|e| e.email() == email)
         .cloned())
   }

   async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
      Ok(self.employees.lock().unwrap().clone())
   }

   async fn delete_by_id(&self, id: EmployeeId) -> Result<(), InfraError> {
      self.employees.lock().unwrap().retain(|e| e.id() != id);
      Ok(())
   }
}
