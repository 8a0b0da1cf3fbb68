use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, Set, TransactionTrait};

use app::error::AppError;
use app::persistence::groups::{GroupQuery, create_group, get_group, join_group, search_groups};
use app::persistence::query::ShapePlan;
use models::domains::{group_members, groups, sea_orm_active_enums::MemberRole};
use models::params::group::{CreateGroupParams, JoinGroupParams};
use models::queries::group::{GroupFilters, GroupShape};

fn chess_club(owner_id: i32) -> CreateGroupParams {
    CreateGroupParams {
        name: "Chess Club".to_owned(),
        description: None,
        country: Some("USA".to_owned()),
        owner_id,
    }
}

async fn group_total(db: &DatabaseConnection) -> Option<u64> {
    let mut query = GroupQuery::with_filters(GroupFilters::default(), 12);
    query.return_full_count = true;
    search_groups(db, &query).await.unwrap().total
}

pub(crate) async fn test_group(db: &DatabaseConnection) {
    let created = create_group(db, chess_club(1)).await.expect("Create group failed!");

    let owner = group_members::Entity::find_by_id((created.id, 1))
        .one(db)
        .await
        .unwrap()
        .expect("owner is not a member");
    assert_eq!(owner.role, MemberRole::Admin);

    let err = create_group(db, chess_club(404)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("user")));
    assert_eq!(group_total(db).await, Some(1));

    // an insert made inside a transaction disappears with it
    let txn = db.begin().await.unwrap();
    let draft = groups::ActiveModel {
        name: Set("Draft".to_owned()),
        owner_id: Set(1),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    };
    app::persistence::create::<groups::Entity, _>(&txn, draft)
        .await
        .unwrap();
    txn.rollback().await.unwrap();
    assert_eq!(group_total(db).await, Some(1));

    let joined = join_group(db, created.id, JoinGroupParams { user_id: 2, role: None })
        .await
        .unwrap();
    assert_eq!(joined.role, MemberRole::Member);
    let err = join_group(db, created.id, JoinGroupParams { user_id: 2, role: None })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let group = get_group(db, created.id, GroupShape::WithMembers).await.unwrap();
    for key in ShapePlan::resolve::<groups::Entity>(GroupShape::WithMembers).aliases() {
        assert!(group.get(key).is_some(), "{key} missing from {group}");
    }
    assert_eq!(group["memberCount"], 2);
    assert_eq!(group["owner"]["username"], "grace");
    assert_eq!(group["members"].as_array().map(Vec::len), Some(2));
}
