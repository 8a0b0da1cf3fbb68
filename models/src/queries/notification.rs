use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use super::ResponseShape;

lenient_enum! {
    pub enum NotificationSort {
        #[default]
        Id = "id",
        CreatedAt = "createdAt",
    }
}

lenient_enum! {
    pub enum NotificationShape {
        Mini = "mini",
        #[default]
        Base = "base",
        Extended = "extended",
    }
}

impl ResponseShape for NotificationShape {
    fn narrower(self) -> Option<Self> {
        match self {
            NotificationShape::Mini => None,
            NotificationShape::Base => Some(NotificationShape::Mini),
            NotificationShape::Extended => Some(NotificationShape::Base),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NotificationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
}
