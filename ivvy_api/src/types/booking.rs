//! Venue bookings and the accommodation attached to them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::venue::VenueID;

/// Numeric identifier for a venue booking.
pub type BookingID = i64;

vendor_enum! {
    /// Lifecycle status of a venue booking.
    pub enum BookingStatus {
        Prospective = 1 => "prospective",
        Tentative = 2 => "tentative",
        Confirmed = 3 => "confirmed",
        Cancelled = 4 => "cancelled",
    }
}

/// A booking held at a venue.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingID,

    pub venue_id: VenueID,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub current_status: BookingStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_event_start: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_event_end: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_accommodation_included: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<String>,
}

/// An accommodation group of a booking.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: i64,

    pub booking_id: BookingID,

    pub room_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_option_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_plan_id: Option<i64>,

    pub arrival_date: NaiveDate,

    pub departure_date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_rooms: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

/// One reserved room of a booking.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomReservation {
    pub id: i64,

    pub booking_id: BookingID,

    pub room_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_option_id: Option<i64>,

    pub arrival_date: NaiveDate,

    pub departure_date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_adults: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_children: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

impl RoomReservation {
    /// Number of nights between arrival and departure.
    pub fn nights(&self) -> i64 {
        (self.departure_date - self.arrival_date).num_days()
    }
}
