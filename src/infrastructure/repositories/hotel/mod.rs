use crate::domain::{Hotel, NewHotel, ValidatedFilters};
use crate::error::AppResult;
use crate::infrastructure::repositories::traits::HotelRepository;
use crate::infrastructure::repositories::utils::{begin_snapshot, with_timeout};
use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Duration;

pub mod search;

pub(crate) const HOTEL_COLUMNS: &str = "hotel_id, main_image_th, hotel_name, phone, email, \
     address, city, state, country, postal_code, stars, rating, review_count, \
     child_allowed, pets_allowed, description, created_at, updated_at";

pub struct HotelRepositoryImpl {
    pool: PgPool,
    query_timeout: Duration,
}

impl HotelRepositoryImpl {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_by_id(&self, hotel_id: i64) -> AppResult<Option<Hotel>> {
        let sql = format!("SELECT {HOTEL_COLUMNS} FROM hotels WHERE hotel_id = $1");
        with_timeout(
            self.query_timeout,
            sqlx::query_as::<_, Hotel>(&sql)
                .bind(hotel_id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn list(
        &self,
        search: &str,
        filters: &ValidatedFilters,
    ) -> AppResult<(Vec<Hotel>, i64)> {
        with_timeout(self.query_timeout, async {
            let mut tx = begin_snapshot(&self.pool).await?;
            let hotels = search::search(&mut tx, search, filters).await?;
            let total = search::count_search(&mut tx, search).await?;
            tx.commit().await?;
            Ok::<_, sqlx::Error>((hotels, total))
        })
        .await
    }

    async fn upsert(&self, hotel: &NewHotel) -> AppResult<Hotel> {
        let sql = format!(
            r#"
            INSERT INTO hotels (hotel_id, main_image_th, hotel_name, phone, email,
                                address, city, state, country, postal_code,
                                stars, rating, review_count, child_allowed, pets_allowed, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT (hotel_id) DO UPDATE SET
                main_image_th = EXCLUDED.main_image_th,
                hotel_name = EXCLUDED.hotel_name,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                address = EXCLUDED.address,
                city = EXCLUDED.city,
                state = EXCLUDED.state,
                country = EXCLUDED.country,
                postal_code = EXCLUDED.postal_code,
                stars = EXCLUDED.stars,
                rating = EXCLUDED.rating,
                review_count = EXCLUDED.review_count,
                child_allowed = EXCLUDED.child_allowed,
                pets_allowed = EXCLUDED.pets_allowed,
                description = EXCLUDED.description,
                updated_at = NOW()
            RETURNING {HOTEL_COLUMNS}
            "#
        );
        with_timeout(
            self.query_timeout,
            sqlx::query_as::<_, Hotel>(&sql)
                .bind(hotel.hotel_id)
                .bind(&hotel.main_image_th)
                .bind(&hotel.hotel_name)
                .bind(&hotel.phone)
                .bind(&hotel.email)
                .bind(&hotel.address.address)
                .bind(&hotel.address.city)
                .bind(&hotel.address.state)
                .bind(&hotel.address.country)
                .bind(&hotel.address.postal_code)
                .bind(hotel.stars)
                .bind(hotel.rating)
                .bind(hotel.review_count)
                .bind(hotel.child_allowed)
                .bind(hotel.pets_allowed)
                .bind(&hotel.description)
                .fetch_one(&self.pool),
        )
        .await
    }
}
