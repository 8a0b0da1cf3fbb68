use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::domains::sea_orm_active_enums::TournamentPrivacy;

use super::ResponseShape;

lenient_enum! {
    pub enum TournamentSort {
        #[default]
        Id = "id",
        Name = "name",
        StartsAt = "startsAt",
        CreatedAt = "createdAt",
    }
}

lenient_enum! {
    pub enum TournamentShape {
        Mini = "mini",
        #[default]
        Base = "base",
        Extended = "extended",
        Admin = "admin",
    }
}

impl ResponseShape for TournamentShape {
    fn narrower(self) -> Option<Self> {
        match self {
            TournamentShape::Mini => None,
            TournamentShape::Base => Some(TournamentShape::Mini),
            TournamentShape::Extended => Some(TournamentShape::Base),
            TournamentShape::Admin => Some(TournamentShape::Extended),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TournamentFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<TournamentPrivacy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_after: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_before: Option<DateTime<FixedOffset>>,
}
