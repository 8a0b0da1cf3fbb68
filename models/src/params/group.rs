use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domains::sea_orm_active_enums::MemberRole;

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupParams {
    #[validate(length(min = 2, max = 64))]
    pub name: String,
    #[validate(length(max = 2048))]
    pub description: Option<String>,
    #[validate(length(min = 2, max = 64))]
    pub country: Option<String>,
    pub owner_id: i32,
}

#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupParams {
    #[validate(length(min = 2, max = 64))]
    pub name: Option<String>,
    #[validate(length(max = 2048))]
    pub description: Option<String>,
    #[validate(length(min = 2, max = 64))]
    pub country: Option<String>,
}

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JoinGroupParams {
    pub user_id: i32,
    pub role: Option<MemberRole>,
}
