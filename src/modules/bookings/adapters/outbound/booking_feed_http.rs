// Bookings feed served by the marketplace backend over HTTP.
//
// Purpose
// - GET the full, unfiltered booking list on every refresh.
//
// Responsibilities
// - Map transport failures and non-success statuses to FeedError::Unavailable.
// - Leave decoding to the lenient wire shape in raw_booking.

use crate::modules::bookings::adapters::outbound::raw_booking::decode_feed;
use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::use_cases::list_bookings::queries_port::{BookingFeed, FeedError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct HttpBookingFeed {
    client: Client,
    url: String,
}

impl HttpBookingFeed {
    pub fn new(url: impl Into<String>) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl BookingFeed for HttpBookingFeed {
    async fn fetch_all(&self) -> Result<Vec<BookingRecord>, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        let records = decode_feed(&bytes)?;
        tracing::debug!(url = %self.url, rows = records.len(), "fetched bookings feed");
        Ok(records)
    }
}
