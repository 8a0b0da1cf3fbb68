//! Query descriptors shared by every list endpoint.
//!
//! A list request is parsed in two independent passes over the same query
//! string: [`ListParams`] (pagination, sort, response type) and an
//! entity-specific filter struct. [`ListQuery`] bundles both once the
//! lenient enum fields have been resolved.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Declares a string-backed enum whose parser never fails: input that does
/// not name a variant resolves to the `#[default]` one.
macro_rules! lenient_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $str:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::queries::QueryEnum for $name {
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $str ),+
                }
            }

            fn parse_or_default(value: &str) -> Self {
                match value {
                    $( $str => $name::$variant, )+
                    _ => Self::default(),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::queries::QueryEnum::as_str(*self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<Ser: ::serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
                serializer.serialize_str($crate::queries::QueryEnum::as_str(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok(<$name as $crate::queries::QueryEnum>::parse_or_default(&value))
            }
        }
    };
}

pub mod group;
pub mod location;
pub mod notification;
pub mod tournament;
pub mod user;

/// String-keyed enum used in query strings (sort keys, response types).
pub trait QueryEnum: Copy + Eq + Default + Debug + Display + Send + Sync + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Parses a query-string value. Never fails: unrecognised input yields
    /// `Self::default()`.
    fn parse_or_default(value: &str) -> Self;
}

/// A response shape: one link of an entity's mini → base → extended → ...
/// chain. Each shape names the shape it widens.
pub trait ResponseShape: QueryEnum {
    /// The shape this one extends, `None` for the narrowest shape.
    fn narrower(self) -> Option<Self>;

    /// The chain from the narrowest shape up to and including `self`.
    fn lineage(self) -> Vec<Self> {
        let mut chain = vec![self];
        let mut current = self;
        while let Some(narrower) = current.narrower() {
            chain.push(narrower);
            current = narrower;
        }
        chain.reverse();
        chain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort<S> {
    pub field: S,
    pub order: SortOrder,
}

/// Pagination, sort and shape parameters recognised by every list endpoint.
///
/// `field` and `responseType` stay raw strings here; they are resolved
/// leniently against the entity's enums by [`ListQuery::new`].
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100))]
    pub page_size: Option<u64>,
    pub field: Option<String>,
    pub order: Option<SortOrder>,
    pub response_type: Option<String>,
    pub return_full_count: Option<bool>,
}

/// Response shape selector accepted by single-entity endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShapeParams {
    pub response_type: Option<String>,
}

impl ShapeParams {
    pub fn resolve<R: QueryEnum>(&self) -> R {
        self.response_type
            .as_deref()
            .map(R::parse_or_default)
            .unwrap_or_default()
    }
}

/// The query descriptor handed to the executor and the metadata maker.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F, S, R> {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub default_page_size: u64,
    pub sort: Sort<S>,
    pub response_type: R,
    pub return_full_count: bool,
    pub query: F,
}

impl<F, S: QueryEnum, R: QueryEnum> ListQuery<F, S, R> {
    pub fn new(params: ListParams, query: F, default_page_size: u64) -> Self {
        Self {
            page: params.page,
            page_size: params.page_size,
            default_page_size,
            sort: Sort {
                field: params
                    .field
                    .as_deref()
                    .map(S::parse_or_default)
                    .unwrap_or_default(),
                order: params.order.unwrap_or_default(),
            },
            response_type: params
                .response_type
                .as_deref()
                .map(R::parse_or_default)
                .unwrap_or_default(),
            return_full_count: params.return_full_count.unwrap_or(false),
            query,
        }
    }
}

impl<F, S, R> ListQuery<F, S, R> {
    /// Descriptor with default pagination, sort and shape.
    pub fn with_filters(query: F, default_page_size: u64) -> Self
    where
        S: Default,
        R: Default,
    {
        Self {
            page: None,
            page_size: None,
            default_page_size,
            sort: Sort::default(),
            response_type: R::default(),
            return_full_count: false,
            query,
        }
    }

    /// 1-indexed page, clamped to at least 1.
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> u64 {
        self.page_size.unwrap_or(self.default_page_size).max(1)
    }

    /// Row offset of the requested page. Never underflows.
    pub fn offset(&self) -> u64 {
        (self.page() - 1).saturating_mul(self.page_size())
    }
}
