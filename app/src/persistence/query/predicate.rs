use sea_orm::{
    Value,
    sea_query::{Alias, Expr, Func, LikeExpr, Query, SimpleExpr},
};

use super::Dialect;
use super::projection::qualified;

/// Mean Earth radius used by the haversine distance, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Length of one degree of latitude, in kilometres.
const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// A single WHERE condition on the base table.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Equals {
        column: &'static str,
        value: Value,
    },
    /// Case-insensitive substring match.
    Contains {
        column: &'static str,
        needle: String,
    },
    /// Case-insensitive prefix match.
    StartsWith {
        column: &'static str,
        prefix: String,
    },
    /// Inclusive bounds; at least one is present.
    Range {
        column: &'static str,
        min: Option<Value>,
        max: Option<Value>,
    },
    /// Distance from a point, in kilometres. Haversine on Postgres; SQLite
    /// ships without math functions and gets an equirectangular distance
    /// inside a latitude band instead.
    WithinRadius {
        latitude: &'static str,
        longitude: &'static str,
        lat: f64,
        lng: f64,
        radius_km: f64,
    },
    /// A row exists in `table` whose `foreign_key` points at the base row and
    /// whose `column` equals `value`.
    Related {
        table: &'static str,
        foreign_key: &'static str,
        column: &'static str,
        value: Value,
    },
}

impl Predicate {
    pub fn equals(column: &'static str, value: impl Into<Value>) -> Self {
        Predicate::Equals {
            column,
            value: value.into(),
        }
    }

    pub fn contains(column: &'static str, needle: &str) -> Self {
        Predicate::Contains {
            column,
            needle: needle.to_owned(),
        }
    }

    pub fn starts_with(column: &'static str, prefix: &str) -> Self {
        Predicate::StartsWith {
            column,
            prefix: prefix.to_owned(),
        }
    }

    /// `None` when neither bound is given.
    pub fn range<V: Into<Value>>(column: &'static str, min: Option<V>, max: Option<V>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(Predicate::Range {
            column,
            min: min.map(Into::into),
            max: max.map(Into::into),
        })
    }

    pub fn related(
        table: &'static str,
        foreign_key: &'static str,
        column: &'static str,
        value: impl Into<Value>,
    ) -> Self {
        Predicate::Related {
            table,
            foreign_key,
            column,
            value: value.into(),
        }
    }

    pub fn into_condition(self, base: &str, primary_key: &str, dialect: Dialect) -> SimpleExpr {
        let col = |column: &str| Expr::col((Alias::new(base), Alias::new(column)));

        match self {
            Predicate::Equals { column, value } => col(column).eq(value),
            Predicate::Contains { column, needle } => lower_like(
                col(column),
                format!("%{}%", escape_like_wildcards(&needle.to_lowercase())),
            ),
            Predicate::StartsWith { column, prefix } => lower_like(
                col(column),
                format!("{}%", escape_like_wildcards(&prefix.to_lowercase())),
            ),
            Predicate::Range { column, min, max } => match (min, max) {
                (Some(min), Some(max)) => col(column).gte(min).and(col(column).lte(max)),
                (Some(min), None) => col(column).gte(min),
                (None, Some(max)) => col(column).lte(max),
                (None, None) => Expr::value(true),
            },
            Predicate::WithinRadius {
                latitude,
                longitude,
                lat,
                lng,
                radius_km,
            } => {
                let latitude = qualified(base, latitude);
                let longitude = qualified(base, longitude);
                match dialect {
                    Dialect::Postgres => haversine(&latitude, &longitude, lat, lng, radius_km),
                    Dialect::Sqlite => equirectangular(&latitude, &longitude, lat, lng, radius_km),
                }
            }
            Predicate::Related {
                table,
                foreign_key,
                column,
                value,
            } => Expr::exists(
                Query::select()
                    .expr(Expr::val(1))
                    .from(Alias::new(table))
                    .and_where(
                        Expr::col((Alias::new(table), Alias::new(foreign_key)))
                            .equals((Alias::new(base), Alias::new(primary_key))),
                    )
                    .and_where(Expr::col((Alias::new(table), Alias::new(column))).eq(value))
                    .to_owned(),
            ),
        }
    }
}

fn haversine(latitude: &str, longitude: &str, lat: f64, lng: f64, radius_km: f64) -> SimpleExpr {
    Expr::cust_with_values(
        format!(
            "{EARTH_RADIUS_KM:.1} * 2 * ASIN(SQRT(POWER(SIN(RADIANS({latitude} - $1) / 2), 2) \
             + COS(RADIANS($2)) * COS(RADIANS({latitude})) \
             * POWER(SIN(RADIANS({longitude} - $3) / 2), 2))) <= $4"
        ),
        [lat, lat, lng, radius_km],
    )
}

/// Plain arithmetic only. The cosine of the centre latitude is computed here
/// and bound as a value.
fn equirectangular(latitude: &str, longitude: &str, lat: f64, lng: f64, radius_km: f64) -> SimpleExpr {
    let band = radius_km / KM_PER_DEGREE;
    let lng_scale = KM_PER_DEGREE * lat.to_radians().cos();
    Expr::cust_with_values(
        format!(
            "{latitude} BETWEEN $1 AND $2 \
             AND (({latitude} - $3) * $4) * (({latitude} - $5) * $6) \
             + (({longitude} - $7) * $8) * (({longitude} - $9) * $10) <= $11"
        ),
        [
            lat - band,
            lat + band,
            lat,
            KM_PER_DEGREE,
            lat,
            KM_PER_DEGREE,
            lng,
            lng_scale,
            lng,
            lng_scale,
            radius_km * radius_km,
        ],
    )
}

fn lower_like(column: Expr, pattern: String) -> SimpleExpr {
    Expr::expr(Func::lower(column)).like(LikeExpr::new(pattern).escape('\\'))
}

/// Escapes `%`, `_` and the escape character itself so user input matches
/// literally inside a LIKE pattern.
pub fn escape_like_wildcards(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
