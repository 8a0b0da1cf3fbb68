use sea_orm::DatabaseConnection;

use app::error::AppError;
use app::persistence::users::{UserQuery, create_user, get_user, search_users, update_user};
use models::params::user::{CreateUserParams, UpdateUserParams};
use models::queries::user::{UserFilters, UserShape};

pub(crate) async fn test_user(db: &DatabaseConnection) {
    for (username, country) in [("grace", "USA"), ("linus", "FI")] {
        let params = CreateUserParams {
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            country: Some(country.to_owned()),
            bio: None,
        };
        create_user(db, params).await.expect("Create user failed!");
    }

    let duplicate = CreateUserParams {
        username: "grace".to_owned(),
        email: "other@example.com".to_owned(),
        country: None,
        bio: None,
    };
    let err = create_user(db, duplicate).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");

    let mut query = UserQuery::with_filters(
        UserFilters {
            country: Some("FI".to_owned()),
            ..Default::default()
        },
        10,
    );
    query.return_full_count = true;
    let page = search_users(db, &query).await.unwrap();
    assert_eq!(page.total, Some(1));
    assert_eq!(page.rows[0]["username"], "linus");

    let err = get_user(db, 42, UserShape::Base).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("user")));

    let updated = update_user(
        db,
        1,
        UpdateUserParams {
            is_admin: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(updated.is_admin);
    assert_eq!(updated.username, "grace");

    let unchanged = update_user(db, 1, UpdateUserParams::default()).await.unwrap();
    assert_eq!(unchanged, updated);

    let err = update_user(db, 42, UpdateUserParams::default()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("user")));
}
