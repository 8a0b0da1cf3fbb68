use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use super::ResponseShape;

lenient_enum! {
    pub enum LocationSort {
        #[default]
        Id = "id",
        Name = "name",
        Country = "country",
    }
}

lenient_enum! {
    pub enum LocationShape {
        Mini = "mini",
        #[default]
        Base = "base",
        Extended = "extended",
    }
}

impl ResponseShape for LocationShape {
    fn narrower(self) -> Option<Self> {
        match self {
            LocationShape::Mini => None,
            LocationShape::Base => Some(LocationShape::Mini),
            LocationShape::Extended => Some(LocationShape::Base),
        }
    }
}

/// `lat`, `lng` and `distance` form one radius filter and must be supplied
/// together.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LocationFilters {
    /// Case-insensitive name prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    /// Radius in kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}
