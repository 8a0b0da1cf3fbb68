use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationParams {
    pub user_id: i32,
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    #[validate(length(max = 4096))]
    pub body: String,
}

#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationParams {
    pub is_read: Option<bool>,
}
