// Port to the remote bookings feed.
//
// Purpose
// - Hand the use case a complete, unfiltered snapshot of every booking row visible to the admin.
//
// Boundaries
// - Implementations do no filtering, deduplication or paging. The view engine owns that.

use crate::modules::bookings::core::booking::BookingRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed unavailable: {0}")]
    Unavailable(String),

    #[error("malformed feed: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait BookingFeed: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<BookingRecord>, FeedError>;
}
