use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationParams {
    #[validate(length(min = 2, max = 128))]
    pub name: String,
    #[validate(length(max = 256))]
    pub address: Option<String>,
    #[validate(length(min = 2, max = 64))]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationParams {
    #[validate(length(min = 2, max = 128))]
    pub name: Option<String>,
    #[validate(length(max = 256))]
    pub address: Option<String>,
    #[validate(length(min = 2, max = 64))]
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
