//! User service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use board_service_lib::repository::{
    BoardRepository, MockBoardRepository, MockUserRepository, UnitOfWork, UserRepository,
};
use board_service_lib::service::{UserManager, UserService};
use common::AppError;
use domain::{CreateUser, UpdateUser, User};

fn create_test_user(id: Uuid) -> User {
    User {
        id,
        username: "최성욱".to_string(),
        email: "choi@example.com".to_string(),
        password: "password123".to_string(),
        birth: "1995-03-01".to_string(),
        phone_number: "010-1234-5678".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Test Unit of Work wrapping a MockUserRepository
struct TestUnitOfWork {
    user_repo: Arc<MockUserRepository>,
    board_repo: Arc<MockBoardRepository>,
}

impl TestUnitOfWork {
    fn new(user_repo: MockUserRepository) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            board_repo: Arc::new(MockBoardRepository::new()),
        }
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn boards(&self) -> Arc<dyn BoardRepository> {
        self.board_repo.clone()
    }
}

fn service(repo: MockUserRepository) -> UserManager<TestUnitOfWork> {
    UserManager::new(Arc::new(TestUnitOfWork::new(repo)))
}

#[tokio::test]
async fn test_create_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|data| Ok(User::new(Uuid::new_v4(), data)));

    let user = service(repo)
        .create_user(CreateUser {
            username: "최성욱".to_string(),
            email: "choi@example.com".to_string(),
            password: "password123".to_string(),
            birth: "1995-03-01".to_string(),
            phone_number: "010-1234-5678".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.username, "최성욱");
    assert_eq!(user.email, "choi@example.com");
}

#[tokio::test]
async fn test_get_user_success() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(user_id))
        .returning(|id| Ok(Some(create_test_user(id))));

    let user = service(repo).get_user(user_id).await.unwrap();
    assert_eq!(user.id, user_id);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let result = service(repo).get_user(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "User not found"));
}

#[tokio::test]
async fn test_update_user_changes_only_present_fields() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(|id| Ok(Some(create_test_user(id))));
    repo.expect_update()
        .withf(|user| user.password == "password123" && user.phone_number == "010-9999-8888")
        .times(1)
        .returning(|user| Ok(user));

    let user = service(repo)
        .update_user(
            Uuid::new_v4(),
            UpdateUser {
                password: None,
                phone_number: Some("010-9999-8888".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(user.phone_number, "010-9999-8888");
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));
    repo.expect_update().never();

    let result = service(repo)
        .update_user(Uuid::new_v4(), UpdateUser::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_user_returns_true() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(|id| Ok(Some(create_test_user(id))));
    repo.expect_delete()
        .with(eq(user_id))
        .times(1)
        .returning(|_| Ok(()));

    assert!(service(repo).delete_user(user_id).await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));
    repo.expect_delete().never();

    let result = service(repo).delete_user(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
