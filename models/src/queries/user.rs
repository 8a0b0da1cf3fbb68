use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use super::ResponseShape;

lenient_enum! {
    pub enum UserSort {
        #[default]
        Id = "id",
        Username = "username",
        Country = "country",
        CreatedAt = "createdAt",
    }
}

lenient_enum! {
    pub enum UserShape {
        Mini = "mini",
        #[default]
        Base = "base",
        Extended = "extended",
        Admin = "admin",
    }
}

impl ResponseShape for UserShape {
    fn narrower(self) -> Option<Self> {
        match self {
            UserShape::Mini => None,
            UserShape::Base => Some(UserShape::Mini),
            UserShape::Extended => Some(UserShape::Base),
            UserShape::Admin => Some(UserShape::Extended),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserFilters {
    /// Case-insensitive substring of the username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    /// Only members of this group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i32>,
}
