use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, IdenStatic, JsonValue, PrimaryKeyTrait, QueryFilter,
    sea_query::{Alias, Asterisk, Expr, JoinType, Order, Query, SelectStatement},
};

use models::{
    queries::SortOrder,
    schemas::{CreatedId, pagination::Page},
};

use super::query::{Dialect, EntityQuery, Field, Predicate, QueryEntity, QueryError, ShapePlan};

/// Generic read and write access to one [`QueryEntity`], over a pooled
/// connection or an open transaction.
pub struct Repository<'db, E, C = DatabaseConnection> {
    db: &'db C,
    entity: PhantomData<E>,
}

impl<'db, E: QueryEntity, C: ConnectionTrait> Repository<'db, E, C> {
    pub fn new(db: &'db C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    fn dialect(&self) -> Result<Dialect, QueryError> {
        Dialect::try_from(self.db.get_database_backend())
    }

    /// One page of rows in the requested shape. The total is computed only
    /// when the descriptor asks for it.
    pub async fn get_query(&self, query: &EntityQuery<E>) -> Result<Page<JsonValue>, QueryError> {
        let dialect = self.dialect()?;
        let plan = ShapePlan::resolve::<E>(query.response_type);
        let predicates = E::predicates(&query.query)?;

        let select = list_statement::<E>(query, &plan, predicates.clone(), dialect);
        let statement = self.db.get_database_backend().build(&select);
        tracing::debug!(entity = E::NAME, shape = %query.response_type, sql = %statement, "list query");
        let rows = JsonValue::find_by_statement(statement).all(self.db).await?;

        let total = if query.return_full_count {
            Some(self.count(predicates, dialect).await?)
        } else {
            None
        };

        Ok(Page::new(decode_json_fields(&plan, rows), total))
    }

    /// The row with `id` in the requested shape. Zero or one element; a
    /// missing id is not an error.
    pub async fn get_single_query(
        &self,
        id: i32,
        shape: E::Shape,
    ) -> Result<Vec<JsonValue>, QueryError> {
        let dialect = self.dialect()?;
        let plan = ShapePlan::resolve::<E>(shape);
        let select = single_statement::<E>(id, &plan, dialect);
        let statement = self.db.get_database_backend().build(&select);
        tracing::debug!(entity = E::NAME, id, %shape, sql = %statement, "single query");
        let rows = JsonValue::find_by_statement(statement).all(self.db).await?;
        Ok(decode_json_fields(&plan, rows))
    }

    async fn count(&self, predicates: Vec<Predicate>, dialect: Dialect) -> Result<u64, QueryError> {
        let select = count_statement::<E>(predicates, dialect);
        let statement = self.db.get_database_backend().build(&select);
        let total = match self.db.query_one(statement).await? {
            Some(row) => row.try_get_by::<i64, _>(0)?,
            None => 0,
        };
        Ok(u64::try_from(total).unwrap_or_default())
    }

    pub async fn create_entity<A>(&self, payload: A) -> Result<Vec<CreatedId>, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + Send,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Into<i32>,
    {
        let result = E::insert(payload).exec(self.db).await?;
        Ok(vec![CreatedId {
            id: result.last_insert_id.into(),
        }])
    }

    /// Applies the set fields of `payload` and returns the updated rows,
    /// empty when `id` does not exist.
    pub async fn update_entity<A>(&self, id: i32, payload: A) -> Result<Vec<E::Model>, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + Send,
    {
        if payload.is_changed() {
            let result = E::update_many()
                .set(payload)
                .filter(E::primary_key().eq(id))
                .exec(self.db)
                .await?;
            if result.rows_affected == 0 {
                return Ok(Vec::new());
            }
        }
        E::find()
            .filter(E::primary_key().eq(id))
            .all(self.db)
            .await
    }

    /// Deletes the row and returns it as it was, empty when `id` does not
    /// exist.
    pub async fn delete_entity(&self, id: i32) -> Result<Vec<E::Model>, DbErr> {
        let rows = E::find()
            .filter(E::primary_key().eq(id))
            .all(self.db)
            .await?;
        if !rows.is_empty() {
            E::delete_many()
                .filter(E::primary_key().eq(id))
                .exec(self.db)
                .await?;
        }
        Ok(rows)
    }

    pub async fn entity_exists(&self, id: i32) -> Result<bool, DbErr> {
        let row = E::find()
            .filter(E::primary_key().eq(id))
            .one(self.db)
            .await?;
        Ok(row.is_some())
    }
}

/// Projection, joins and grouping of `plan` over the base table.
fn select_shape<E: QueryEntity>(plan: &ShapePlan, dialect: Dialect) -> SelectStatement {
    let base = E::TABLE;
    let primary_key = E::primary_key();
    let mut select = Query::select();
    select.from(Alias::new(base));

    for field in &plan.fields {
        select.expr_as(field.expr(base, dialect), Alias::new(field.alias()));
    }
    for join in &plan.joins {
        select.join_as(
            JoinType::LeftJoin,
            Alias::new(join.table),
            Alias::new(join.alias),
            join.condition(),
        );
    }
    if plan.needs_grouping() {
        select.group_by_col((Alias::new(base), Alias::new(primary_key.as_str())));
        for join in plan.grouped_joins() {
            select.group_by_col((Alias::new(join.alias), Alias::new(join.column)));
        }
    }
    select
}

fn apply_predicates<E: QueryEntity>(
    select: &mut SelectStatement,
    predicates: Vec<Predicate>,
    dialect: Dialect,
) {
    let primary_key = E::primary_key();
    for predicate in predicates {
        select.and_where(predicate.into_condition(E::TABLE, primary_key.as_str(), dialect));
    }
}

/// The page statement: shape, filters, sort with a primary-key tie-breaker,
/// limit and offset.
pub fn list_statement<E: QueryEntity>(
    query: &EntityQuery<E>,
    plan: &ShapePlan,
    predicates: Vec<Predicate>,
    dialect: Dialect,
) -> SelectStatement {
    let base = E::TABLE;
    let mut select = select_shape::<E>(plan, dialect);
    apply_predicates::<E>(&mut select, predicates, dialect);

    let order = match query.sort.order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    };
    let sort = E::sort_column(query.sort.field);
    let primary_key = E::primary_key();
    select.order_by((Alias::new(base), Alias::new(sort.as_str())), order.clone());
    if sort.as_str() != primary_key.as_str() {
        select.order_by((Alias::new(base), Alias::new(primary_key.as_str())), order);
    }

    select.limit(query.page_size()).offset(query.offset());
    select
}

pub fn single_statement<E: QueryEntity>(id: i32, plan: &ShapePlan, dialect: Dialect) -> SelectStatement {
    let primary_key = E::primary_key();
    let mut select = select_shape::<E>(plan, dialect);
    select.and_where(Expr::col((Alias::new(E::TABLE), Alias::new(primary_key.as_str()))).eq(id));
    select
}

/// `SELECT COUNT(*)` over the filtered base rows, ignoring shape and paging.
pub fn count_statement<E: QueryEntity>(predicates: Vec<Predicate>, dialect: Dialect) -> SelectStatement {
    let base = E::TABLE;
    let primary_key = E::primary_key();
    let mut matched = Query::select();
    matched
        .column((Alias::new(base), Alias::new(primary_key.as_str())))
        .from(Alias::new(base));
    apply_predicates::<E>(&mut matched, predicates, dialect);

    Query::select()
        .expr(Expr::col(Asterisk).count())
        .from_subquery(matched, Alias::new("matched"))
        .to_owned()
}

/// SQLite returns JSON expressions as text; parse them back into values.
/// Keys the row decoder dropped are restored so every row carries each key
/// of its shape: counts as `0`, anything else as `null`.
fn decode_json_fields(plan: &ShapePlan, mut rows: Vec<JsonValue>) -> Vec<JsonValue> {
    for row in &mut rows {
        let Some(object) = row.as_object_mut() else {
            continue;
        };
        for field in &plan.fields {
            let key = field.alias();
            let decoded = match (object.get(key), field) {
                (None, Field::Count { .. }) => Some(JsonValue::from(0)),
                (None, _) => Some(JsonValue::Null),
                (Some(JsonValue::String(text)), _) if field.is_json() => {
                    serde_json::from_str::<JsonValue>(text).ok()
                }
                _ => None,
            };
            if let Some(decoded) = decoded {
                object.insert(key.to_owned(), decoded);
            }
        }
    }
    rows
}
