// Shared test fixture for BookingRecord.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::bookings::core::booking::{BookingRecord, BookingStatus};
use std::fs;

const BOOKING_RECORD_JSON: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/tests/fixtures/json/booking_record.json"
);

pub const BOOKINGS_FEED_JSON: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/tests/fixtures/json/bookings_feed.json"
);

pub struct BookingRecordBuilder {
    inner: BookingRecord,
}

impl Default for BookingRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookingRecordBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(BOOKING_RECORD_JSON).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn booking_id(mut self, v: impl Into<String>) -> Self {
        self.inner.booking_id = v.into();
        self
    }

    pub fn status(mut self, v: i64) -> Self {
        self.inner.status = BookingStatus::from_code(v);
        self
    }

    pub fn payment_status(mut self, v: i64) -> Self {
        self.inner.payment_status = v;
        self
    }

    pub fn booking_time(mut self, v: i64) -> Self {
        self.inner.booking_time = v;
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn contact_number(mut self, v: impl Into<String>) -> Self {
        self.inner.contact_number = Some(v.into());
        self
    }

    pub fn work_location(mut self, v: impl Into<String>) -> Self {
        self.inner.work_location = Some(v.into());
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn worker_name(mut self, v: impl Into<String>) -> Self {
        self.inner.worker_name = Some(v.into());
        self
    }

    pub fn worker_mobile(mut self, v: impl Into<String>) -> Self {
        self.inner.worker_mobile = Some(v.into());
        self
    }

    pub fn customer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.customer_name = Some(v.into());
        self
    }

    pub fn customer_mobile(mut self, v: impl Into<String>) -> Self {
        self.inner.customer_mobile = Some(v.into());
        self
    }

    pub fn without_text_fields(mut self) -> Self {
        self.inner.contact_number = None;
        self.inner.work_location = None;
        self.inner.description = None;
        self.inner.worker_name = None;
        self.inner.worker_mobile = None;
        self.inner.customer_name = None;
        self.inner.customer_mobile = None;
        self
    }

    pub fn build(self) -> BookingRecord {
        self.inner
    }
}

#[cfg(test)]
mod booking_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = BookingRecordBuilder::default().build();
        assert_eq!(built.id, 1);
        assert_eq!(built.booking_id, "bk-fixed-0001");
        assert_eq!(built.status, BookingStatus::InProgress);
        assert!(built.is_paid());
        assert_eq!(built.booking_time, 1_700_000_000_000i64);
        assert_eq!(built.customer_name.as_deref(), Some("Jane Customer"));
    }

    #[rstest]
    fn without_text_fields_clears_every_free_text_field() {
        let built = BookingRecordBuilder::new().without_text_fields().build();
        assert_eq!(built.contact_number, None);
        assert_eq!(built.work_location, None);
        assert_eq!(built.description, None);
        assert_eq!(built.worker_name, None);
        assert_eq!(built.worker_mobile, None);
        assert_eq!(built.customer_name, None);
        assert_eq!(built.customer_mobile, None);
    }
}
