use super::HOTEL_COLUMNS;
use crate::domain::{Hotel, ValidatedFilters};
use crate::infrastructure::repositories::utils::{push_search_predicate, push_window};
use sqlx::{PgConnection, Postgres, QueryBuilder};

pub async fn search(
    conn: &mut PgConnection,
    search: &str,
    filters: &ValidatedFilters,
) -> Result<Vec<Hotel>, sqlx::Error> {
    let mut builder =
        QueryBuilder::<Postgres>::new(format!("SELECT {HOTEL_COLUMNS} FROM hotels WHERE 1=1"));
    push_search_predicate(&mut builder, search);
    push_window(&mut builder, filters, "hotel_id");

    builder.build_query_as::<Hotel>().fetch_all(conn).await
}

pub async fn count_search(conn: &mut PgConnection, search: &str) -> Result<i64, sqlx::Error> {
    let mut builder =
        QueryBuilder::<Postgres>::new("SELECT COUNT(*) AS count FROM hotels WHERE 1=1");
    push_search_predicate(&mut builder, search);

    let (count,): (i64,) = builder.build_query_as().fetch_one(conn).await?;
    Ok(count)
}
