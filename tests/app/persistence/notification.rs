use sea_orm::DatabaseConnection;

use app::error::AppError;
use app::persistence::notifications::{
    NotificationQuery, create_notification, delete_notification, get_notification,
    search_notifications, update_notification,
};
use models::params::notification::{CreateNotificationParams, UpdateNotificationParams};
use models::queries::SortOrder;
use models::queries::notification::{NotificationFilters, NotificationShape, NotificationSort};

pub(crate) async fn test_notification(db: &DatabaseConnection) {
    for title in ["Welcome", "Round one", "Round two"] {
        let params = CreateNotificationParams {
            user_id: 1,
            title: title.to_owned(),
            body: format!("{title} body"),
        };
        create_notification(db, params).await.expect("Create notification failed!");
    }

    let orphan = CreateNotificationParams {
        user_id: 404,
        title: "Lost".to_owned(),
        body: String::new(),
    };
    let err = create_notification(db, orphan).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("user")));

    update_notification(db, 1, UpdateNotificationParams { is_read: Some(true) })
        .await
        .unwrap();

    let mut query = NotificationQuery::with_filters(
        NotificationFilters {
            user_id: Some(1),
            is_read: Some(false),
        },
        10,
    );
    query.sort.field = NotificationSort::Id;
    query.sort.order = SortOrder::Desc;
    let page = search_notifications(db, &query).await.unwrap();
    let titles: Vec<&str> = page.rows.iter().map(|n| n["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["Round two", "Round one"]);
    assert_eq!(page.total, None);

    let notification = get_notification(db, 2, NotificationShape::Extended).await.unwrap();
    assert_eq!(notification["body"], "Round one body");
    assert_eq!(notification["user"]["username"], "grace");

    let deleted = delete_notification(db, 2).await.unwrap();
    assert_eq!(deleted.title, "Round one");
    let err = get_notification(db, 2, NotificationShape::Mini).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("notification")));
}
