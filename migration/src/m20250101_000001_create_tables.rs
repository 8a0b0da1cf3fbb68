use models::domains::{group_members, groups, locations, notifications, tournaments, users};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id<C: IntoIden>(column: C) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn created_at<C: IntoIden>(column: C) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(users::Entity)
                    .if_not_exists()
                    .col(id(users::Column::Id))
                    .col(
                        ColumnDef::new(users::Column::Username)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(users::Column::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(users::Column::Country).string_len(64).null())
                    .col(ColumnDef::new(users::Column::Bio).text().null())
                    .col(
                        ColumnDef::new(users::Column::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(created_at(users::Column::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(groups::Entity)
                    .if_not_exists()
                    .col(id(groups::Column::Id))
                    .col(
                        ColumnDef::new(groups::Column::Name)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(groups::Column::Description).text().null())
                    .col(ColumnDef::new(groups::Column::Country).string_len(64).null())
                    .col(ColumnDef::new(groups::Column::OwnerId).integer().not_null())
                    .col(created_at(groups::Column::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_groups_owner_id")
                            .from(groups::Entity, groups::Column::OwnerId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(group_members::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(group_members::Column::GroupId).integer().not_null())
                    .col(ColumnDef::new(group_members::Column::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(group_members::Column::Role)
                            .string_len(16)
                            .not_null()
                            .default("member"),
                    )
                    .col(created_at(group_members::Column::JoinedAt))
                    .primary_key(
                        Index::create()
                            .col(group_members::Column::GroupId)
                            .col(group_members::Column::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_members_group_id")
                            .from(group_members::Entity, group_members::Column::GroupId)
                            .to(groups::Entity, groups::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_members_user_id")
                            .from(group_members::Entity, group_members::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(locations::Entity)
                    .if_not_exists()
                    .col(id(locations::Column::Id))
                    .col(ColumnDef::new(locations::Column::Name).string_len(128).not_null())
                    .col(ColumnDef::new(locations::Column::Address).string_len(256).null())
                    .col(ColumnDef::new(locations::Column::Country).string_len(64).null())
                    .col(ColumnDef::new(locations::Column::Latitude).double().not_null())
                    .col(ColumnDef::new(locations::Column::Longitude).double().not_null())
                    .col(created_at(locations::Column::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(notifications::Entity)
                    .if_not_exists()
                    .col(id(notifications::Column::Id))
                    .col(ColumnDef::new(notifications::Column::UserId).integer().not_null())
                    .col(ColumnDef::new(notifications::Column::Title).string_len(256).not_null())
                    .col(ColumnDef::new(notifications::Column::Body).text().not_null())
                    .col(
                        ColumnDef::new(notifications::Column::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(created_at(notifications::Column::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notifications_user_id")
                            .from(notifications::Entity, notifications::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(tournaments::Entity)
                    .if_not_exists()
                    .col(id(tournaments::Column::Id))
                    .col(ColumnDef::new(tournaments::Column::Name).string_len(128).not_null())
                    .col(ColumnDef::new(tournaments::Column::Description).text().null())
                    .col(
                        ColumnDef::new(tournaments::Column::Privacy)
                            .string_len(16)
                            .not_null()
                            .default("open"),
                    )
                    .col(ColumnDef::new(tournaments::Column::GroupId).integer().null())
                    .col(ColumnDef::new(tournaments::Column::LocationId).integer().null())
                    .col(ColumnDef::new(tournaments::Column::CreatedBy).integer().not_null())
                    .col(
                        ColumnDef::new(tournaments::Column::StartsAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(created_at(tournaments::Column::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournaments_group_id")
                            .from(tournaments::Entity, tournaments::Column::GroupId)
                            .to(groups::Entity, groups::Column::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournaments_location_id")
                            .from(tournaments::Entity, tournaments::Column::LocationId)
                            .to(locations::Entity, locations::Column::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournaments_created_by")
                            .from(tournaments::Entity, tournaments::Column::CreatedBy)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_user_id")
                    .table(notifications::Entity)
                    .col(notifications::Column::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tournaments_starts_at")
                    .table(tournaments::Entity)
                    .col(tournaments::Column::StartsAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(tournaments::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(notifications::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(locations::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(group_members::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(groups::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(users::Entity).to_owned())
            .await
    }
}
