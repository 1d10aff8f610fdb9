use crate::domain::{NewReview, Review, ValidatedFilters};
use crate::error::AppResult;
use crate::infrastructure::repositories::traits::ReviewRepository;
use crate::infrastructure::repositories::utils::{begin_snapshot, with_timeout};
use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Duration;

pub mod search;

pub(crate) const REVIEW_COLUMNS: &str = "id, hotel_id, average_score, country, type, name, \
     date, headline, language, pros, cons, source, created_at";

pub struct ReviewRepositoryImpl {
    pool: PgPool,
    query_timeout: Duration,
}

impl ReviewRepositoryImpl {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn find_by_id(&self, hotel_id: i64, review_id: i64) -> AppResult<Option<Review>> {
        let sql = format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1 AND hotel_id = $2");
        with_timeout(
            self.query_timeout,
            sqlx::query_as::<_, Review>(&sql)
                .bind(review_id)
                .bind(hotel_id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn list(
        &self,
        hotel_id: i64,
        search: &str,
        filters: &ValidatedFilters,
    ) -> AppResult<(Vec<Review>, i64)> {
        with_timeout(self.query_timeout, async {
            let mut tx = begin_snapshot(&self.pool).await?;
            let reviews = search::search(&mut tx, hotel_id, search, filters).await?;
            let total = search::count_search(&mut tx, hotel_id, search).await?;
            tx.commit().await?;
            Ok::<_, sqlx::Error>((reviews, total))
        })
        .await
    }

    async fn upsert(&self, hotel_id: i64, review: &NewReview) -> AppResult<Review> {
        let sql = format!(
            r#"
            INSERT INTO reviews (hotel_id, average_score, country, type, name, date,
                                 headline, language, pros, cons, source)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT ON CONSTRAINT reviews_natural_key DO UPDATE SET
                average_score = EXCLUDED.average_score,
                country = EXCLUDED.country,
                type = EXCLUDED.type,
                language = EXCLUDED.language,
                pros = EXCLUDED.pros,
                cons = EXCLUDED.cons,
                source = EXCLUDED.source
            RETURNING {REVIEW_COLUMNS}
            "#
        );
        with_timeout(
            self.query_timeout,
            sqlx::query_as::<_, Review>(&sql)
                .bind(hotel_id)
                .bind(review.average_score)
                .bind(&review.country)
                .bind(&review.kind)
                .bind(&review.name)
                .bind(&review.date)
                .bind(&review.headline)
                .bind(&review.language)
                .bind(&review.pros)
                .bind(&review.cons)
                .bind(&review.source)
                .fetch_one(&self.pool),
        )
        .await
    }
}
