// Wire shape of the remote bookings feed.
//
// Purpose
// - Accept the feed as the backend actually sends it: ids and flags as numbers, strings or
//   booleans, timestamps as epoch milliseconds or date strings, text fields possibly null or numeric.
// - Accept a bare JSON array or an object wrapping it under "data".
//
// Leniency
// - A field of an unexpected JSON type decodes as RawScalar::Other and is treated as absent.
// - A row that still cannot be read is skipped, the rest of the feed is kept.

use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::use_cases::list_bookings::queries_port::FeedError;
use serde::Deserialize;
use serde_json::Value;

const I64_RANGE: std::ops::Range<f64> = -9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Other(Value),
}

impl RawScalar {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawScalar::Int(value) => Some(*value),
            RawScalar::Float(value) if value.fract() == 0.0 && I64_RANGE.contains(value) => {
                Some(*value as i64)
            }
            RawScalar::Bool(value) => Some(i64::from(*value)),
            RawScalar::Text(value) => value.trim().parse().ok(),
            RawScalar::Float(_) | RawScalar::Other(_) => None,
        }
    }

    /// `None` for arrays and objects, which have no text form in the admin list.
    pub fn into_text(self) -> Option<String> {
        match self {
            RawScalar::Int(value) => Some(value.to_string()),
            RawScalar::Float(value) => Some(value.to_string()),
            RawScalar::Bool(value) => Some(value.to_string()),
            RawScalar::Text(value) => Some(value),
            RawScalar::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBookingRecord {
    pub id: Option<RawScalar>,
    pub booking_id: Option<RawScalar>,
    pub worker_id: Option<RawScalar>,
    pub user_id: Option<RawScalar>,
    pub status: Option<RawScalar>,
    pub payment_status: Option<RawScalar>,
    pub booking_time: Option<RawScalar>,
    pub created_at: Option<RawScalar>,
    pub contact_number: Option<RawScalar>,
    pub work_location: Option<RawScalar>,
    pub description: Option<RawScalar>,
    pub worker_name: Option<RawScalar>,
    pub worker_mobile: Option<RawScalar>,
    pub customer_name: Option<RawScalar>,
    pub customer_mobile: Option<RawScalar>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedPayload {
    List(Vec<Value>),
    Wrapped { data: Vec<Value> },
}

/// Rows that are not objects or carry no booking id cannot be grouped and are skipped.
/// Only a payload that is not a list of rows fails as a whole.
pub fn decode_feed(bytes: &[u8]) -> Result<Vec<BookingRecord>, FeedError> {
    let payload: FeedPayload =
        serde_json::from_slice(bytes).map_err(|e| FeedError::Malformed(e.to_string()))?;
    let rows = match payload {
        FeedPayload::List(rows) | FeedPayload::Wrapped { data: rows } => rows,
    };

    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match decode_row(row) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(index, %error, "skipping booking row");
                None
            }
        })
        .collect())
}

fn decode_row(row: Value) -> Result<BookingRecord, FeedError> {
    let raw: RawBookingRecord =
        serde_json::from_value(row).map_err(|e| FeedError::Malformed(e.to_string()))?;
    BookingRecord::try_from(raw)
}

#[cfg(test)]
mod raw_booking_tests {
    use super::*;
    use crate::modules::bookings::core::booking::BookingStatus;
    use crate::tests::fixtures::booking_records::BOOKINGS_FEED_JSON;
    use rstest::rstest;

    #[rstest]
    fn it_should_decode_a_lenient_feed() {
        let bytes = std::fs::read(BOOKINGS_FEED_JSON).unwrap();
        let records = decode_feed(&bytes).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].worker_id.as_deref(), Some("42"));
        assert_eq!(records[0].status, BookingStatus::Rejected);
        assert_eq!(records[1].id, 12);
        assert_eq!(records[1].status, BookingStatus::InProgress);
        assert!(records[1].is_paid());
        assert_eq!(records[2].booking_id, "1002");
        assert!(!records[2].is_paid());
    }

    #[rstest]
    fn it_should_accept_a_wrapped_feed() {
        let json = br#"{"data":[{"id":1,"bookingId":"B1","status":1,"paymentStatus":1}]}"#;
        let records = decode_feed(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].booking_id, "B1");
    }

    #[rstest]
    fn it_should_skip_rows_without_a_booking_id() {
        let json = br#"[{"id":1,"status":1},{"id":2,"bookingId":"B2"}]"#;
        let records = decode_feed(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 2);
    }

    #[rstest]
    #[case::boolean_flag(r#"{"bookingId":"B2","paymentStatus":true}"#)]
    #[case::float_timestamp(r#"{"bookingId":"B2","bookingTime":1.7e12}"#)]
    #[case::oversized_id(r#"{"bookingId":"B2","id":18446744073709551615}"#)]
    #[case::object_text(r#"{"bookingId":"B2","workLocation":{"lat":1,"lng":2}}"#)]
    #[case::array_text(r#"{"bookingId":"B2","description":["a","b"]}"#)]
    fn it_should_keep_the_feed_when_a_row_has_an_odd_field(#[case] odd_row: &str) {
        let json = format!(r#"[{{"id":1,"bookingId":"B1","status":1,"paymentStatus":1}},{odd_row}]"#);
        let records = decode_feed(json.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].booking_id, "B1");
        assert_eq!(records[1].booking_id, "B2");
    }

    #[rstest]
    fn it_should_read_odd_scalars_as_far_as_they_make_sense() {
        let json = br#"[{"id":4.0,"bookingId":"B1","paymentStatus":true,"bookingTime":1.7e12,
            "createdAt":18446744073709551615,"workLocation":{"lat":1,"lng":2},"description":false}]"#;
        let records = decode_feed(json).unwrap();
        assert_eq!(records[0].id, 4);
        assert!(records[0].is_paid());
        assert_eq!(records[0].booking_time, 1_700_000_000_000);
        assert_eq!(records[0].created_at, 0);
        assert_eq!(records[0].work_location, None);
        assert_eq!(records[0].description.as_deref(), Some("false"));
    }

    #[rstest]
    fn it_should_skip_rows_that_are_not_objects() {
        let json = br#"[42,"B0",null,{"id":2,"bookingId":"B2"}]"#;
        let records = decode_feed(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 2);
    }

    #[rstest]
    #[case(&b"not json"[..])]
    #[case(&b"{\"rows\":[]}"[..])]
    fn it_should_reject_a_payload_that_is_not_a_feed(#[case] bytes: &[u8]) {
        assert!(matches!(decode_feed(bytes), Err(FeedError::Malformed(_))));
    }
}
