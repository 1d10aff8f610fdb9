//! Batch job that pulls hotels and their reviews from the partner API and
//! upserts them into the database.

pub mod cli;
pub mod client;
pub mod dtos;
pub mod error;
pub mod job;

pub use cli::SyncArgs;
pub use client::{HttpPartnerClient, PartnerClient};
pub use dtos::{PartnerAddress, PartnerHotel, PartnerReview};
pub use error::SyncError;
pub use job::{load_ids, read_ids, SyncJob, SyncReport};
