use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserParams {
    #[validate(length(min = 2, max = 32))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 2, max = 64))]
    pub country: Option<String>,
    #[validate(length(max = 1024))]
    pub bio: Option<String>,
}

#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserParams {
    #[validate(length(min = 2, max = 32))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 2, max = 64))]
    pub country: Option<String>,
    #[validate(length(max = 1024))]
    pub bio: Option<String>,
    pub is_admin: Option<bool>,
}
