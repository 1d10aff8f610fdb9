use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub hotel_id: i64,
    pub average_score: i32,
    pub country: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub name: String,
    /// Free-form date string as published by the partner.
    pub date: String,
    pub headline: String,
    pub language: String,
    pub pros: String,
    pub cons: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub average_score: i32,
    pub country: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub date: String,
    pub headline: String,
    pub language: String,
    pub pros: String,
    pub cons: String,
    pub source: String,
}

impl Review {
    pub fn summary_prompt(&self) -> String {
        format!(
            "summarize the following hotel review in a few sentences:\n\
             headline: {}\n\
             average score: {}\n\
             pros: {}\n\
             cons: {}",
            self.headline, self.average_score, self.pros, self.cons
        )
    }
}

pub const REVIEW_SORT_SAFELIST: &[&str] = &[
    "id",
    "average_score",
    "country",
    "date",
    "name",
    "language",
    "-id",
    "-average_score",
    "-country",
    "-date",
    "-name",
    "-language",
];

pub const REVIEW_DEFAULT_SORT: &str = "id";
