// A single row of the bookings feed.
//
// Purpose
// - Represent one historical row of a logical booking. Several rows may share a booking_id.
//
// Notes
// - All time values are epoch milliseconds.
// - Free text fields are optional. A missing field never matches a search and never fails.

use serde::{Deserialize, Serialize};

pub const PAYMENT_CONFIRMED: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum BookingStatus {
    InProgress,
    Completed,
    Rejected,
    Unknown(i64),
}

impl BookingStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => BookingStatus::InProgress,
            2 => BookingStatus::Completed,
            3 => BookingStatus::Rejected,
            other => BookingStatus::Unknown(other),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            BookingStatus::InProgress => 1,
            BookingStatus::Completed => 2,
            BookingStatus::Rejected => 3,
            BookingStatus::Unknown(code) => code,
        }
    }

    /// Display label shown next to a booking in the admin list.
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::InProgress => "InProgress",
            BookingStatus::Completed => "Completed",
            BookingStatus::Rejected => "Reject",
            BookingStatus::Unknown(_) => "Unknown",
        }
    }
}

impl From<i64> for BookingStatus {
    fn from(code: i64) -> Self {
        BookingStatus::from_code(code)
    }
}

impl From<BookingStatus> for i64 {
    fn from(status: BookingStatus) -> Self {
        status.code()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: i64,
    pub booking_id: String,
    pub worker_id: Option<String>,
    pub user_id: Option<String>,
    pub status: BookingStatus,
    pub payment_status: i64,
    pub booking_time: i64,
    pub created_at: i64,
    pub contact_number: Option<String>,
    pub work_location: Option<String>,
    pub description: Option<String>,
    pub worker_name: Option<String>,
    pub worker_mobile: Option<String>,
    pub customer_name: Option<String>,
    pub customer_mobile: Option<String>,
}

impl BookingRecord {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PAYMENT_CONFIRMED
    }

    /// `needle` must already be trimmed and lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        let searchable = [
            Some(self.booking_id.as_str()),
            self.worker_name.as_deref(),
            self.customer_name.as_deref(),
            self.contact_number.as_deref(),
            self.work_location.as_deref(),
            self.description.as_deref(),
        ];
        searchable
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
