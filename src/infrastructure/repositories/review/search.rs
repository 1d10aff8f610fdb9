use super::REVIEW_COLUMNS;
use crate::domain::{Review, ValidatedFilters};
use crate::infrastructure::repositories::utils::{push_search_predicate, push_window};
use sqlx::{PgConnection, Postgres, QueryBuilder};

pub async fn search(
    conn: &mut PgConnection,
    hotel_id: i64,
    search: &str,
    filters: &ValidatedFilters,
) -> Result<Vec<Review>, sqlx::Error> {
    let mut builder = QueryBuilder::<Postgres>::new(format!(
        "SELECT {REVIEW_COLUMNS} FROM reviews WHERE hotel_id = "
    ));
    builder.push_bind(hotel_id);
    push_search_predicate(&mut builder, search);
    push_window(&mut builder, filters, "id");

    builder.build_query_as::<Review>().fetch_all(conn).await
}

pub async fn count_search(
    conn: &mut PgConnection,
    hotel_id: i64,
    search: &str,
) -> Result<i64, sqlx::Error> {
    let mut builder =
        QueryBuilder::<Postgres>::new("SELECT COUNT(*) AS count FROM reviews WHERE hotel_id = ");
    builder.push_bind(hotel_id);
    push_search_predicate(&mut builder, search);

    let (count,): (i64,) = builder.build_query_as().fetch_one(conn).await?;
    Ok(count)
}
