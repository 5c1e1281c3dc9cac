//! Wire-side intake payloads and their validated counterparts.

use charter_fleet::TransportMode;
use charter_shared::Masked;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

/// Raw booking form exactly as the public site posts it. Every field is
/// optional here; [`crate::validate::validate_submission`] decides what is
/// actually acceptable and reports all violations at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub city: Option<String>,
    pub transport_mode: Option<String>,
    pub vehicle_id: Option<String>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    /// Sent as a string by the form widget, parsed into a count on our side.
    pub passengers: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub special_requests: Option<String>,
    pub is_round_trip: Option<bool>,
    pub return_date: Option<String>,
    pub return_time: Option<String>,
}

/// A booking submission that passed every field rule. Strings are trimmed,
/// the email is lowercased and the schedule fields are real calendar types.
#[derive(Debug, Clone)]
pub struct NormalizedBooking {
    /// City reference as typed by the customer; resolved against the
    /// catalog later, by slug or by display name.
    pub city: String,
    pub transport_mode: TransportMode,
    /// Optional vehicle preference, still in wire form. An id that does not
    /// parse as a UUID simply fails resolution.
    pub vehicle_id: Option<String>,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub passengers: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub special_requests: Option<String>,
    /// Round-trip intent is rendered into the notification document only;
    /// it is never persisted.
    pub is_round_trip: bool,
    pub return_date: Option<String>,
    pub return_time: Option<String>,
}

impl NormalizedBooking {
    /// Wall-clock moment of the requested pickup, for the future-only rule.
    pub fn pickup_datetime(&self) -> NaiveDateTime {
        self.pickup_date.and_time(self.pickup_time)
    }
}

/// Raw contact form payload from the public site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// A contact form message that passed validation.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub full_name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub message: String,
}
