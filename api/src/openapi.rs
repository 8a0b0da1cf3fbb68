use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tourney API",
        version = "0.1.0",
        description = "Tournament platform backend with shape-aware list endpoints",
        license(name = "MIT"),
    ),
    paths(
        crate::routers::root::root_get,
        crate::routers::user::users_get,
        crate::routers::user::users_id_get,
        crate::routers::user::users_post,
        crate::routers::user::users_id_patch,
        crate::routers::user::users_id_delete,
        crate::routers::group::groups_get,
        crate::routers::group::groups_id_get,
        crate::routers::group::groups_post,
        crate::routers::group::groups_id_patch,
        crate::routers::group::groups_id_delete,
        crate::routers::group::groups_id_members_post,
        crate::routers::location::locations_get,
        crate::routers::location::locations_id_get,
        crate::routers::location::locations_post,
        crate::routers::location::locations_id_patch,
        crate::routers::location::locations_id_delete,
        crate::routers::notification::notifications_get,
        crate::routers::notification::notifications_id_get,
        crate::routers::notification::notifications_post,
        crate::routers::notification::notifications_id_patch,
        crate::routers::notification::notifications_id_delete,
        crate::routers::tournament::tournaments_get,
        crate::routers::tournament::tournaments_id_get,
        crate::routers::tournament::tournaments_post,
        crate::routers::tournament::tournaments_id_patch,
        crate::routers::tournament::tournaments_id_delete,
    ),
    components(
        schemas(
            crate::models::response::ApiErrorResponse,
            models::schemas::CreatedId,
            models::schemas::pagination::PaginationMeta,
            models::schemas::pagination::Links,
            models::queries::SortOrder,
            models::params::user::CreateUserParams,
            models::params::user::UpdateUserParams,
            models::params::group::CreateGroupParams,
            models::params::group::UpdateGroupParams,
            models::params::group::JoinGroupParams,
            models::params::location::CreateLocationParams,
            models::params::location::UpdateLocationParams,
            models::params::notification::CreateNotificationParams,
            models::params::notification::UpdateNotificationParams,
            models::params::tournament::CreateTournamentParams,
            models::params::tournament::UpdateTournamentParams,
            models::domains::sea_orm_active_enums::TournamentPrivacy,
            models::domains::sea_orm_active_enums::MemberRole,
        )
    ),
    tags(
        (name = "health", description = "Liveness endpoint"),
        (name = "users", description = "User endpoints"),
        (name = "groups", description = "Group and membership endpoints"),
        (name = "locations", description = "Venue endpoints"),
        (name = "notifications", description = "Notification endpoints"),
        (name = "tournaments", description = "Tournament endpoints"),
    )
)]
pub struct ApiDoc;
