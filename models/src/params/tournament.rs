use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domains::sea_orm_active_enums::TournamentPrivacy;

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentParams {
    #[validate(length(min = 2, max = 128))]
    pub name: String,
    pub description: Option<String>,
    pub privacy: Option<TournamentPrivacy>,
    pub group_id: Option<i32>,
    pub location_id: Option<i32>,
    pub created_by: i32,
    pub starts_at: DateTime<FixedOffset>,
}

#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTournamentParams {
    #[validate(length(min = 2, max = 128))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub privacy: Option<TournamentPrivacy>,
    pub group_id: Option<i32>,
    pub location_id: Option<i32>,
    pub starts_at: Option<DateTime<FixedOffset>>,
}
