//! Shape-aware list queries.
//!
//! Every queryable entity describes, once, how its filters turn into
//! predicates, which output keys each response shape adds and which joins
//! those keys need. [`super::repository::Repository`] turns that description
//! into one SQL statement per request.

use sea_orm::{DbBackend, DbErr, EntityTrait};
use serde::Serialize;
use thiserror::Error;

use models::queries::{ListQuery, QueryEnum, ResponseShape};

mod predicate;
mod projection;

pub use predicate::{EARTH_RADIUS_KM, Predicate, escape_like_wildcards};
pub use projection::{Cardinality, Field, Join};

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("filters {} must be supplied together", .required.join(", "))]
    InvalidFilterCombination { required: &'static [&'static str] },
    #[error("unsupported database backend {0:?}")]
    UnsupportedBackend(DbBackend),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// SQL flavours the shape builder can emit JSON aggregation for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl TryFrom<DbBackend> for Dialect {
    type Error = QueryError;

    fn try_from(backend: DbBackend) -> Result<Self, Self::Error> {
        match backend {
            DbBackend::Postgres => Ok(Dialect::Postgres),
            DbBackend::Sqlite => Ok(Dialect::Sqlite),
            other => Err(QueryError::UnsupportedBackend(other)),
        }
    }
}

/// What a single shape adds on top of the shape it extends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeLayer {
    pub fields: Vec<Field>,
    pub joins: Vec<Join>,
}

impl ShapeLayer {
    pub fn fields(fields: Vec<Field>) -> Self {
        Self {
            fields,
            joins: Vec::new(),
        }
    }

    pub fn with_joins(mut self, joins: Vec<Join>) -> Self {
        self.joins = joins;
        self
    }
}

pub type EntityQuery<E> = ListQuery<
    <E as QueryEntity>::Filters,
    <E as QueryEntity>::Sort,
    <E as QueryEntity>::Shape,
>;

pub trait QueryEntity: EntityTrait {
    /// Singular name used in error messages.
    const NAME: &'static str;
    /// Base table, also the qualifier of every base column.
    const TABLE: &'static str;
    const DEFAULT_PAGE_SIZE: u64;

    type Filters: Clone + Serialize + Send + Sync + 'static;
    type Sort: QueryEnum;
    type Shape: ResponseShape;

    fn primary_key() -> Self::Column;

    /// Translates filter values into predicates. Absent filters add nothing.
    fn predicates(filters: &Self::Filters) -> Result<Vec<Predicate>, QueryError>;

    fn layer(shape: Self::Shape) -> ShapeLayer;

    fn sort_column(key: Self::Sort) -> Self::Column;
}

/// The fields and joins of a shape, accumulated along its lineage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePlan {
    pub fields: Vec<Field>,
    pub joins: Vec<Join>,
}

impl ShapePlan {
    pub fn resolve<E: QueryEntity>(shape: E::Shape) -> Self {
        let mut plan = ShapePlan::default();
        for step in shape.lineage() {
            let layer = E::layer(step);
            plan.fields.extend(layer.fields);
            for join in layer.joins {
                if !plan.joins.iter().any(|j| j.alias == join.alias) {
                    plan.joins.push(join);
                }
            }
        }
        plan
    }

    /// Output keys, in select order.
    pub fn aliases(&self) -> Vec<&'static str> {
        self.fields.iter().map(Field::alias).collect()
    }

    pub fn needs_grouping(&self) -> bool {
        self.fields.iter().any(Field::is_aggregate)
    }

    /// Join aliases referenced by a field or a join condition without being
    /// joined first. Empty for a well-formed shape.
    pub fn missing_joins(&self, base: &str) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for (index, join) in self.joins.iter().enumerate() {
            let source = join.on.0;
            if source != base && !self.joins[..index].iter().any(|j| j.alias == source) {
                missing.push(source);
            }
        }
        for source in self.fields.iter().filter_map(Field::source) {
            if !self.joins.iter().any(|j| j.alias == source) && !missing.contains(&source) {
                missing.push(source);
            }
        }
        missing
    }

    /// Joins whose columns must appear in GROUP BY next to the primary key.
    pub fn grouped_joins(&self) -> impl Iterator<Item = &Join> {
        self.joins
            .iter()
            .filter(|join| join.cardinality == Cardinality::One)
    }
}
