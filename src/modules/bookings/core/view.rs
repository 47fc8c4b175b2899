// Booking view engine: derive the admin page from a raw feed snapshot.
//
// Purpose
// - Map (records, params) to the page to display plus pagination metadata.
//
// Pipeline, in this order
// - status branch filter
// - search filter
// - keep the latest row per booking_id
// - stable sort by booking_time
// - paginate
//
// Boundaries
// - Pure. No input or output, no logging, no state between calls.

use std::collections::HashMap;

use serde::Serialize;

use crate::modules::bookings::core::booking::{BookingRecord, BookingStatus};
use crate::modules::bookings::core::view_params::{
    PageSize, SortOrder, StatusFilter, ViewParams,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub page: Vec<BookingRecord>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page_number: usize,
}

pub fn compute_view(records: &[BookingRecord], params: &ViewParams) -> BookingView {
    let filtered = filter_by_status(records, params.status_filter);
    let searched = filter_by_search(filtered, &params.search_query);
    let mut latest = dedup_latest(searched);
    sort_by_booking_time(&mut latest, params.sort_order);
    paginate(latest, params.page_size, params.page_number)
}

pub fn filter_by_status(records: &[BookingRecord], filter: StatusFilter) -> Vec<&BookingRecord> {
    let paid = records.iter().filter(|record| record.is_paid());
    match filter {
        StatusFilter::Reject => rejected_bookings(records),
        StatusFilter::All => paid.collect(),
        StatusFilter::InProgress => paid
            .filter(|record| record.status == BookingStatus::InProgress)
            .collect(),
        StatusFilter::Completed => paid
            .filter(|record| record.status == BookingStatus::Completed)
            .collect(),
    }
}

/// Rows of every booking whose whole history is rejected.
///
/// Being rejected is a property of the group, so the first pass settles it per
/// booking_id and the second pass keeps the rows of the surviving groups in input order.
fn rejected_bookings(records: &[BookingRecord]) -> Vec<&BookingRecord> {
    let mut all_rejected: HashMap<&str, bool> = HashMap::new();
    for record in records {
        let entry = all_rejected
            .entry(record.booking_id.as_str())
            .or_insert(true);
        *entry &= record.status == BookingStatus::Rejected;
    }

    records
        .iter()
        .filter(|record| {
            all_rejected
                .get(record.booking_id.as_str())
                .copied()
                .unwrap_or(false)
        })
        .collect()
}

pub fn filter_by_search<'a>(records: Vec<&'a BookingRecord>, query: &str) -> Vec<&'a BookingRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| record.matches_search(&needle))
        .collect()
}

/// One row per booking_id: the latest created_at, then the highest id, then the first seen.
///
/// Groups keep the position of their first row so the following stable sort is deterministic.
pub fn dedup_latest(records: Vec<&BookingRecord>) -> Vec<&BookingRecord> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut latest: Vec<&BookingRecord> = Vec::new();

    for record in records {
        match slots.get(record.booking_id.as_str()) {
            Some(&slot) => {
                if is_more_recent(record, latest[slot]) {
                    latest[slot] = record;
                }
            }
            None => {
                slots.insert(record.booking_id.as_str(), latest.len());
                latest.push(record);
            }
        }
    }
    latest
}

fn is_more_recent(candidate: &BookingRecord, current: &BookingRecord) -> bool {
    (candidate.created_at, candidate.id) > (current.created_at, current.id)
}

pub fn sort_by_booking_time(records: &mut [&BookingRecord], order: SortOrder) {
    match order {
        SortOrder::Asc => records.sort_by(|a, b| a.booking_time.cmp(&b.booking_time)),
        SortOrder::Desc => records.sort_by(|a, b| b.booking_time.cmp(&a.booking_time)),
    }
}

/// An empty result has zero pages whatever the page size.
pub fn paginate(records: Vec<&BookingRecord>, page_size: PageSize, page_number: usize) -> BookingView {
    let total_count = records.len();
    match page_size {
        PageSize::All => BookingView {
            page: records.into_iter().cloned().collect(),
            total_count,
            total_pages: usize::from(total_count > 0),
            page_number: 1,
        },
        PageSize::Limit(size) => {
            let size = size.get();
            let page_number = page_number.max(1);
            let start = (page_number - 1).saturating_mul(size);
            BookingView {
                page: records.into_iter().skip(start).take(size).cloned().collect(),
                total_count,
                total_pages: total_count.div_ceil(size),
                page_number,
            }
        }
    }
}
