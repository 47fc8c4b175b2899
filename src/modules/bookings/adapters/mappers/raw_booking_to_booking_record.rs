use crate::modules::bookings::adapters::outbound::raw_booking::{RawBookingRecord, RawScalar};
use crate::modules::bookings::core::booking::{BookingRecord, BookingStatus};
use crate::modules::bookings::use_cases::list_bookings::queries_port::FeedError;
use chrono::{DateTime, NaiveDateTime};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

impl TryFrom<RawBookingRecord> for BookingRecord {
    type Error = FeedError;

    fn try_from(raw: RawBookingRecord) -> Result<Self, Self::Error> {
        let id = raw.id.as_ref().and_then(RawScalar::as_int).unwrap_or(0);
        let booking_id = raw
            .booking_id
            .and_then(RawScalar::into_text)
            .ok_or_else(|| FeedError::Malformed(format!("row {id} has no bookingId")))?;

        Ok(Self {
            id,
            booking_time: timestamp_or_zero(raw.booking_time, "bookingTime", &booking_id),
            created_at: timestamp_or_zero(raw.created_at, "createdAt", &booking_id),
            booking_id: booking_id.clone(),
            worker_id: text_field(raw.worker_id, "workerId", &booking_id),
            user_id: text_field(raw.user_id, "userId", &booking_id),
            status: BookingStatus::from_code(
                raw.status.as_ref().and_then(RawScalar::as_int).unwrap_or(0),
            ),
            payment_status: raw
                .payment_status
                .as_ref()
                .and_then(RawScalar::as_int)
                .unwrap_or(0),
            contact_number: text_field(raw.contact_number, "contactNumber", &booking_id),
            work_location: text_field(raw.work_location, "workLocation", &booking_id),
            description: text_field(raw.description, "description", &booking_id),
            worker_name: text_field(raw.worker_name, "workerName", &booking_id),
            worker_mobile: text_field(raw.worker_mobile, "workerMobile", &booking_id),
            customer_name: text_field(raw.customer_name, "customerName", &booking_id),
            customer_mobile: text_field(raw.customer_mobile, "customerMobile", &booking_id),
        })
    }
}

fn text_field(value: Option<RawScalar>, field: &str, booking_id: &str) -> Option<String> {
    match value? {
        RawScalar::Other(raw) => {
            tracing::warn!(booking_id, field, %raw, "unreadable text field, leaving it empty");
            None
        }
        scalar => scalar.into_text(),
    }
}

fn timestamp_or_zero(value: Option<RawScalar>, field: &str, booking_id: &str) -> i64 {
    match value.as_ref().and_then(parse_timestamp) {
        Some(millis) => millis,
        None => {
            tracing::warn!(booking_id, field, raw = ?value, "unreadable timestamp, using epoch");
            0
        }
    }
}

/// Epoch milliseconds from a whole number, a numeric string, RFC 3339, or a zone-less UTC date time.
pub fn parse_timestamp(value: &RawScalar) -> Option<i64> {
    let text = match value {
        RawScalar::Int(_) | RawScalar::Float(_) => return value.as_int(),
        RawScalar::Text(text) => text.trim(),
        RawScalar::Bool(_) | RawScalar::Other(_) => return None,
    };
    if let Ok(millis) = text.parse::<i64>() {
        return Some(millis);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.timestamp_millis());
    }
    NAIVE_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(text, format)
            .ok()
            .map(|naive| naive.and_utc().timestamp_millis())
    })
}
