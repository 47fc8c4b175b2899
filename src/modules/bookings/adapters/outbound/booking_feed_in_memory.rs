// In memory bookings feed.
//
// Purpose
// - Serve the view without a backend, for tests and local development.
//
// Responsibilities
// - Hold one snapshot of raw rows, duplicates included, in feed order.
// - Optionally start from a seed file in the feed's JSON shape.

use crate::modules::bookings::adapters::outbound::raw_booking::decode_feed;
use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::use_cases::list_bookings::queries_port::{BookingFeed, FeedError};
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBookingFeed {
    rows: RwLock<Vec<BookingRecord>>,
    is_offline: bool,
}

impl InMemoryBookingFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<BookingRecord>) -> Self {
        Self {
            rows: RwLock::new(records),
            is_offline: false,
        }
    }

    pub async fn from_seed_file(path: &Path) -> Result<Self, FeedError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| FeedError::Unavailable(format!("{}: {e}", path.display())))?;
        let records = decode_feed(&bytes)?;
        tracing::info!(path = %path.display(), rows = records.len(), "seeded bookings feed");
        Ok(Self::with_records(records))
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn push(&self, record: BookingRecord) {
        self.rows.write().await.push(record);
    }

    pub async fn replace(&self, records: Vec<BookingRecord>) {
        *self.rows.write().await = records;
    }
}

#[async_trait::async_trait]
impl BookingFeed for InMemoryBookingFeed {
    async fn fetch_all(&self) -> Result<Vec<BookingRecord>, FeedError> {
        if self.is_offline {
            return Err(FeedError::Unavailable("Booking feed offline".into()));
        }

        Ok(self.rows.read().await.clone())
    }
}
