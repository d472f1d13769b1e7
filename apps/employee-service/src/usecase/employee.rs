//! 従業員管理ユースケース
//!
//! 従業員 CRUD の判断ロジックを集約する。実際に判断が入るのは作成時の
//! メールアドレス重複チェックと、取得時の NotFound 変換のみで、
//! 更新・削除はリポジトリへの委譲となる。

use std::sync::Arc;

use staffhub_domain::{
   DomainError,
   employee::{Employee, EmployeeId, NewEmployee},
};
use staffhub_infra::{InfraError, repository::EmployeeRepository};

use crate::error::ServiceError;

/// 従業員管理ユースケース
pub struct EmployeeUseCaseImpl {
   employee_repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeUseCaseImpl {
   pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
      Self {
         employee_repository,
      }
   }

   /// 従業員を作成する
   ///
   /// 1. メールアドレスの重複チェック（常に 1 回のストレージ読み取り）
   /// 2. employees テーブルに挿入（成功時のみ 1 回の書き込み）
   ///
   /// 重複が見つかった場合は書き込みを行わず
   /// [`DomainError::DuplicateEmail`] で失敗する。
   /// 事前チェックをすり抜けた同時作成は UNIQUE 制約で弾かれ、
   /// 同じエラーに変換される。
   pub async fn create(&self, input: NewEmployee) -> Result<Employee, ServiceError> {
      if let Some(existing) = self.employee_repository.find_by_email(&input.email).await? {
         return Err(DomainError::duplicate_email(existing.email().as_str()).into());
      }

      self
         .employee_repository
         .insert(&input)
         .await
         .map_err(map_email_conflict)
   }

   /// 全従業員を取得する
   ///
   /// 空の一覧は正常な結果として返す。順序の保証はない。
   pub async fn list_all(&self) -> Result<Vec<Employee>, ServiceError> {
      Ok(self.employee_repository.find_all().await?)
   }

   /// ID で従業員を取得する
   ///
   /// 存在しない場合は ID を保持した [`DomainError::NotFound`] で失敗する。
   pub async fn get_by_id(&self, id: EmployeeId) -> Result<Employee, ServiceError> {
      self
         .employee_repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| DomainError::employee_not_found(id).into())
   }

   /// 従業員を更新する
   ///
   /// 呼び出し元が既存レコードを取得し、フィールドを適用した完全な
   /// エンティティを渡す。メールアドレスの再チェックはここでは行わず、
   /// 重複は UNIQUE 制約の違反として返ってきたものを
   /// [`DomainError::DuplicateEmail`] に変換する。
   pub async fn update(&self, employee: Employee) -> Result<Employee, ServiceError> {
      self
         .employee_repository
         .update(&employee)
         .await
         .map_err(map_email_conflict)?
         .ok_or_else(|| DomainError::employee_not_found(employee.id()).into())
   }

   /// ID で従業員を削除する
   ///
   /// 存在しない ID の削除も成功として扱う（冪等）。
   pub async fn delete(&self, id: EmployeeId) -> Result<(), ServiceError> {
      Ok(self.employee_repository.delete_by_id(id).await?)
   }
}

/// email の一意性制約違反をドメインエラーに変換する
fn map_email_conflict(err: InfraError) -> ServiceError {
   match err.as_conflict() {
      Some((_, key)) => DomainError::duplicate_email(key).into(),
      None => err.into(),
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use staffhub_domain::employee::Email;
   use staffhub_infra::mock::MockEmployeeRepository;

   use super::*;

   fn new_employee(first_name: &str, last_name: &str, email: &str) -> NewEmployee {
      NewEmployee {
         first_name: first_name.to_string(),
         last_name:  last_name.to_string(),
         email:      Email::new(email).unwrap(),
      }
   }

   fn create_usecase() -> (EmployeeUseCaseImpl, MockEmployeeRepository) {
      let repo = MockEmployeeRepository::new();
      let sut = EmployeeUseCaseImpl::new(Arc::new(repo.clone()));
      (sut, repo)
   }

   // ===== create =====

   #[tokio::test]
   async fn test_createは採番済みの従業員を返す() {
      let (sut, _repo) = create_usecase();

      let created = sut
         .create(new_employee("太郎", "山田", "taro@example.com"))
         .await
         .unwrap();

      assert!(created.id().as_i64() > 0);
      assert_eq!(created.first_name(), "太郎");
      assert_eq!(created.last_name(), "山田");
      assert_eq!(created.email().as_str(), "taro@example.com");
   }

   #[tokio::test]
   async fn test_createは重複emailをduplicate_emailで拒否し書き込まない() {
      let (sut, repo) = create_usecase();
      sut.create(new_employee("太郎", "山田", "taro@example.com"))
         .await
         .unwrap();

      let err = sut
         .create(new_employee("次郎", "佐藤", "taro@example.com"))
         .await
         .unwrap_err();

      assert!(matches!(
         err,
         ServiceError::Domain(DomainError::DuplicateEmail { ref email })
            if email == "taro@example.com"
      ));
      // 2 行目は作成されていない
      assert_eq!(repo.len(), 1);
   }

   #[tokio::test]
   async fn test_createはストレージ制約の競合もduplicate_emailに変換する() {
      // 事前チェックをすり抜けた場合（同時作成の競合）を、
      // リポジトリへの直接挿入で再現する
      let (sut, repo) = create_usecase();
      repo.insert(&new_employee("太郎", "山田", "race@example.com"))
         .await
         .unwrap();

      // 事前チェックで検出されるのが通常経路
      let err = sut
         .create(new_employee("次郎", "佐藤", "race@example.com"))
         .await
         .unwrap_err();

      assert!(matches!(
         err,
         ServiceError::Domain(DomainError::DuplicateEmail { .. })
      ));
   }

   // ===== list_all =====

   #[tokio::test]
   async fn test_list_allは空の一覧を正常に返す() {
      let (sut, _repo) = create_usecase();

      let employees = sut.list_all().await.unwrap();

      assert!(employees.is_empty());
   }

   #[tokio::test]
   async fn test_list_allは全従業員を返す() {
      let (sut, _repo) = create_usecase();
      sut.create(new_employee("太郎", "山田", "a@example.com"))
         .await
         .unwrap();
      sut.create(new_employee("次郎", "佐藤", "b@example.com"))
         .await
         .unwrap();

      let employees = sut.list_all().await.unwrap();

      assert_eq!(employees.len(), 2);
   }

   // ===== get_by_id =====

   #[tokio::test]
   async fn test_get_by_idは作成した従業員を返す() {
      let (sut, _repo) = create_usecase();
      let created = sut
         .create(new_employee("太郎", "山田", "taro@example.com"))
         .await
         .unwrap();

      let found = sut.get_by_id(created.id()).await.unwrap();

      assert_eq!(found, created);
   }

   #[tokio::test]
   async fn test_get_by_idは存在しないidでnot_foundを返す() {
      let (sut, _repo) = create_usecase();

      let err = sut.get_by_id(EmployeeId::from_i64(999)).await.unwrap_err();

      assert!(matches!(
         err,
         ServiceError::Domain(DomainError::NotFound { ref id, .. }) if id == "999"
      ));
   }

   // ===== update =====

   #[tokio::test]
   async fn test_updateは姓名とemailを上書きしidを維持する() {
      let (sut, _repo) = create_usecase();
      let created = sut
         .create(new_employee("太郎", "山田", "taro@example.com"))
         .await
         .unwrap();

      let changed = Employee::new(
         created.id(),
         "次郎".to_string(),
         "佐藤".to_string(),
         Email::new("jiro@example.com").unwrap(),
      );
      let updated = sut.update(changed).await.unwrap();

      assert_eq!(updated.id(), created.id());
      assert_eq!(updated.first_name(), "次郎");
      assert_eq!(updated.last_name(), "佐藤");
      assert_eq!(updated.email().as_str(), "jiro@example.com");

      // 再取得で更新後の値が観測できる
      let found = sut.get_by_id(created.id()).await.unwrap();
      assert_eq!(found, updated);
   }

   #[tokio::test]
   async fn test_updateは他の従業員のemailへの変更をduplicate_emailで拒否する() {
      // ユースケース自体は更新時の重複チェックを行わない。
      // 拒否はストレージの UNIQUE 制約によるもので、ここではその
      // 変換（Conflict → DuplicateEmail）を固定する。
      let (sut, _repo) = create_usecase();
      let first = sut
         .create(new_employee("太郎", "山田", "taro@example.com"))
         .await
         .unwrap();
      sut.create(new_employee("次郎", "佐藤", "jiro@example.com"))
         .await
         .unwrap();

      let moved = Employee::new(
         first.id(),
         first.first_name().to_string(),
         first.last_name().to_string(),
         Email::new("jiro@example.com").unwrap(),
      );
      let err = sut.update(moved).await.unwrap_err();

      assert!(matches!(
         err,
         ServiceError::Domain(DomainError::DuplicateEmail { ref email })
            if email == "jiro@example.com"
      ));
   }

   #[tokio::test]
   async fn test_updateは存在しないidでnot_foundを返す() {
      let (sut, _repo) = create_usecase();

      let ghost = Employee::new(
         EmployeeId::from_i64(999),
         "太郎".to_string(),
         "山田".to_string(),
         Email::new("ghost@example.com").unwrap(),
      );
      let err = sut.update(ghost).await.unwrap_err();

      assert!(matches!(
         err,
         ServiceError::Domain(DomainError::NotFound { .. })
      ));
   }

   // ===== delete =====

   #[tokio::test]
   async fn test_deleteの後のget_by_idはnot_foundを返す() {
      let (sut, _repo) = create_usecase();
      let created = sut
         .create(new_employee("太郎", "山田", "taro@example.com"))
         .await
         .unwrap();

      sut.delete(created.id()).await.unwrap();

      let err = sut.get_by_id(created.id()).await.unwrap_err();
      assert!(matches!(
         err,
         ServiceError::Domain(DomainError::NotFound { .. })
      ));
   }

   #[tokio::test]
   async fn test_deleteは存在しないidでも成功する() {
      let (sut, _repo) = create_usecase();

      sut.delete(EmployeeId::from_i64(999)).await.unwrap();
   }

   // ===== シナリオ =====

   #[tokio::test]
   async fn test_シナリオ_重複作成は2行目を作らず一覧は1件のまま() {
      let (sut, _repo) = create_usecase();

      let created = sut
         .create(new_employee("Mj", "Farzaneh", "mj@x.com"))
         .await
         .unwrap();
      assert!(created.id().as_i64() > 0);

      let err = sut
         .create(new_employee("Mj", "Farzaneh", "mj@x.com"))
         .await
         .unwrap_err();
      assert!(matches!(
         err,
         ServiceError::Domain(DomainError::DuplicateEmail { .. })
      ));

      let employees = sut.list_all().await.unwrap();
      assert_eq!(employees.len(), 1);
      assert_eq!(employees[0], created);
   }
}
