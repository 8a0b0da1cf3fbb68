use sea_orm::sea_query::{Alias, Expr, SimpleExpr};

use super::Dialect;

/// Cardinality of a join relative to one base row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

/// A `LEFT JOIN table AS alias ON on.0.on.1 = alias.column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Join {
    pub table: &'static str,
    pub alias: &'static str,
    /// Left side of the condition: `(source alias, column)`.
    pub on: (&'static str, &'static str),
    pub column: &'static str,
    pub cardinality: Cardinality,
}

impl Join {
    pub const fn one(
        table: &'static str,
        alias: &'static str,
        on: (&'static str, &'static str),
        column: &'static str,
    ) -> Self {
        Self {
            table,
            alias,
            on,
            column,
            cardinality: Cardinality::One,
        }
    }

    pub const fn many(
        table: &'static str,
        alias: &'static str,
        on: (&'static str, &'static str),
        column: &'static str,
    ) -> Self {
        Self {
            table,
            alias,
            on,
            column,
            cardinality: Cardinality::Many,
        }
    }

    pub fn condition(&self) -> SimpleExpr {
        Expr::col((Alias::new(self.on.0), Alias::new(self.on.1)))
            .equals((Alias::new(self.alias), Alias::new(self.column)))
    }
}

/// One output key of a response shape.
///
/// For `Object` and `Array` the first `(column, key)` pair must be a column
/// that is never null on a matched row; it decides whether anything joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Column {
        column: &'static str,
        alias: &'static str,
    },
    Count {
        source: &'static str,
        column: &'static str,
        alias: &'static str,
    },
    Object {
        source: &'static str,
        fields: &'static [(&'static str, &'static str)],
        alias: &'static str,
    },
    Array {
        source: &'static str,
        fields: &'static [(&'static str, &'static str)],
        alias: &'static str,
    },
}

impl Field {
    pub const fn column(column: &'static str, alias: &'static str) -> Self {
        Field::Column { column, alias }
    }

    pub const fn count(source: &'static str, column: &'static str, alias: &'static str) -> Self {
        Field::Count {
            source,
            column,
            alias,
        }
    }

    pub const fn object(
        source: &'static str,
        fields: &'static [(&'static str, &'static str)],
        alias: &'static str,
    ) -> Self {
        Field::Object {
            source,
            fields,
            alias,
        }
    }

    pub const fn array(
        source: &'static str,
        fields: &'static [(&'static str, &'static str)],
        alias: &'static str,
    ) -> Self {
        Field::Array {
            source,
            fields,
            alias,
        }
    }

    /// Output key in the result row.
    pub fn alias(&self) -> &'static str {
        match self {
            Field::Column { alias, .. }
            | Field::Count { alias, .. }
            | Field::Object { alias, .. }
            | Field::Array { alias, .. } => alias,
        }
    }

    /// Join alias this field reads from, `None` for base columns.
    pub fn source(&self) -> Option<&'static str> {
        match self {
            Field::Column { .. } => None,
            Field::Count { source, .. }
            | Field::Object { source, .. }
            | Field::Array { source, .. } => Some(source),
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Field::Count { .. } | Field::Array { .. })
    }

    /// `true` when the database hands this field back as JSON (or JSON text).
    pub fn is_json(&self) -> bool {
        matches!(self, Field::Object { .. } | Field::Array { .. })
    }

    pub fn expr(&self, base: &str, dialect: Dialect) -> SimpleExpr {
        match *self {
            Field::Column { column, .. } => Expr::col((Alias::new(base), Alias::new(column))).into(),
            Field::Count { source, column, .. } => {
                let count = format!("COUNT(DISTINCT {})", qualified(source, column));
                Expr::cust(match dialect {
                    Dialect::Postgres => count,
                    // untyped expressions are skipped by the SQLite row decoder
                    Dialect::Sqlite => format!("CAST({count} AS INTEGER)"),
                })
            }
            Field::Object { source, fields, .. } => {
                let key = qualified(source, key_column(fields));
                Expr::cust(format!(
                    "CASE WHEN {key} IS NULL THEN NULL ELSE {} END",
                    json_object(source, fields, dialect)
                ))
            }
            Field::Array { source, fields, .. } => {
                let key = qualified(source, key_column(fields));
                let object = json_object(source, fields, dialect);
                Expr::cust(match dialect {
                    Dialect::Postgres => format!(
                        "COALESCE(json_agg({object}) FILTER (WHERE {key} IS NOT NULL), '[]'::json)"
                    ),
                    Dialect::Sqlite => {
                        format!("json_group_array({object}) FILTER (WHERE {key} IS NOT NULL)")
                    }
                })
            }
        }
    }
}

fn key_column(fields: &[(&'static str, &'static str)]) -> &'static str {
    fields.first().map(|(column, _)| *column).unwrap_or("id")
}

pub(crate) fn qualified(source: &str, column: &str) -> String {
    format!("\"{source}\".\"{column}\"")
}

fn json_object(source: &str, fields: &[(&'static str, &'static str)], dialect: Dialect) -> String {
    let function = match dialect {
        Dialect::Postgres => "json_build_object",
        Dialect::Sqlite => "json_object",
    };
    let pairs = fields
        .iter()
        .map(|(column, key)| format!("'{key}', {}", qualified(source, column)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{function}({pairs})")
}
