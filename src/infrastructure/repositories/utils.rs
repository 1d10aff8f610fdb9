use crate::domain::ValidatedFilters;
use crate::error::AppResult;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use std::future::Future;
use std::time::Duration;

/// Bounds a database call by the configured per-query timeout.
pub async fn with_timeout<T, F>(timeout: Duration, query: F) -> AppResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    Ok(tokio::time::timeout(timeout, query).await??)
}

/// Read-only REPEATABLE READ transaction, so a page window and its total count
/// observe the same snapshot.
pub async fn begin_snapshot(pool: &PgPool) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

pub fn push_search_predicate<'args>(builder: &mut QueryBuilder<'args, Postgres>, search: &'args str) {
    builder.push(" AND (fts @@ plainto_tsquery('simple', ");
    builder.push_bind(search);
    builder.push(") OR ");
    builder.push_bind(search);
    builder.push(" = '')");
}

/// Appends ORDER BY, LIMIT and OFFSET. `tiebreak` keeps page windows stable
/// when the sort column has duplicates.
pub fn push_window(builder: &mut QueryBuilder<'_, Postgres>, filters: &ValidatedFilters, tiebreak: &str) {
    builder.push(format!(
        " ORDER BY {} {}, {} ASC",
        filters.sort_column(),
        filters.sort_direction().as_sql(),
        tiebreak
    ));
    builder.push(" LIMIT ");
    builder.push_bind(filters.limit());
    builder.push(" OFFSET ");
    builder.push_bind(filters.offset());
}
