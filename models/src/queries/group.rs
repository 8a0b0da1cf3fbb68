use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use super::ResponseShape;

lenient_enum! {
    pub enum GroupSort {
        #[default]
        Id = "id",
        Name = "name",
        CreatedAt = "createdAt",
    }
}

lenient_enum! {
    pub enum GroupShape {
        Mini = "mini",
        #[default]
        Base = "base",
        Extended = "extended",
        WithMembers = "withMembers",
    }
}

impl ResponseShape for GroupShape {
    fn narrower(self) -> Option<Self> {
        match self {
            GroupShape::Mini => None,
            GroupShape::Base => Some(GroupShape::Mini),
            GroupShape::Extended => Some(GroupShape::Base),
            GroupShape::WithMembers => Some(GroupShape::Extended),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GroupFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i32>,
    /// Only groups this user belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
}
