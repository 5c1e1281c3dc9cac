use charter_fleet::{CityRef, TransportMode, VehicleRef};
use charter_shared::Masked;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::submission::NormalizedBooking;

/// Booking status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::InProgress,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::InProgress => "IN_PROGRESS",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// Parses the wire form; anything outside the five values is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
    }

    /// COMPLETED and CANCELLED close the lifecycle; every other state can
    /// still move, including straight to CANCELLED.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single source of truth for one customer's charter request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub transport_mode: TransportMode,
    pub vehicle_id: Option<Uuid>,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub passengers: i32,
    pub special_requests: Option<String>,
    pub city_id: Uuid,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingRequest {
    /// Builds the record to persist. The lifecycle always starts at
    /// PENDING; callers never get to choose the initial status.
    pub fn new(booking: &NormalizedBooking, city_id: Uuid, vehicle_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name: booking.first_name.clone(),
            last_name: booking.last_name.clone(),
            email: booking.email.clone(),
            phone: booking.phone.clone(),
            transport_mode: booking.transport_mode,
            vehicle_id,
            pickup_location: booking.pickup_location.clone(),
            dropoff_location: booking.dropoff_location.clone(),
            pickup_date: booking.pickup_date,
            pickup_time: booking.pickup_time,
            passengers: booking.passengers,
            special_requests: booking.special_requests.clone(),
            city_id,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the lifecycle status
    pub fn update_status(&mut self, status: BookingStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A booking joined with the catalog records it references, the shape every
/// read path hands back.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDetails {
    pub booking: BookingRequest,
    pub city: CityRef,
    pub vehicle: Option<VehicleRef>,
}
