// List bookings use case.
//
// Responsibilities
// - Fetch a fresh snapshot from the bookings feed on every request.
// - Run the pure view engine over it with the caller's parameters.

use crate::modules::bookings::core::view::{BookingView, compute_view};
use crate::modules::bookings::core::view_params::ViewParams;
use crate::modules::bookings::use_cases::list_bookings::queries_port::{BookingFeed, FeedError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Feed(#[from] FeedError),
}

#[derive(Clone)]
pub struct ListBookingsHandler {
    feed: Arc<dyn BookingFeed>,
}

impl ListBookingsHandler {
    pub fn new(feed: Arc<dyn BookingFeed>) -> Self {
        Self { feed }
    }

    pub async fn handle(&self, params: &ViewParams) -> Result<BookingView, ApplicationError> {
        let records = self.feed.fetch_all().await?;
        let view = compute_view(&records, params);
        tracing::debug!(
            rows = records.len(),
            status = ?params.status_filter,
            sort = ?params.sort_order,
            page_size = %params.page_size,
            page = view.page_number,
            total_count = view.total_count,
            total_pages = view.total_pages,
            "computed bookings view"
        );
        Ok(view)
    }
}
