use sea_orm::DatabaseConnection;
use utils::testing::setup_test_db;

mod persistence;

async fn test_db() -> DatabaseConnection {
    setup_test_db("sqlite::memory:")
        .await
        .expect("Set up db failed!")
}

#[tokio::test]
async fn repository_main() {
    let db = test_db().await;
    persistence::repository::test_repository(&db).await;
}

#[tokio::test]
async fn user_main() {
    let db = test_db().await;
    persistence::user::test_user(&db).await;
}

#[tokio::test]
async fn notification_main() {
    let db = test_db().await;
    persistence::user::test_user(&db).await;
    persistence::notification::test_notification(&db).await;
}

#[tokio::test]
async fn group_main() {
    let db = test_db().await;
    persistence::user::test_user(&db).await;
    persistence::group::test_group(&db).await;
}
