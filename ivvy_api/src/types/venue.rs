//! Venue-level resources: the venue itself, its rooms, room options and
//! rate plans.

use serde::{Deserialize, Serialize};

use super::contact::Address;

/// Numeric identifier for a venue.
pub type VenueID = i64;

/// A venue in the account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: VenueID,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// IANA zone name, e.g. "Australia/Brisbane".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// ISO 4217 code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// An accommodation room type of a venue.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<VenueID>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default inventory of this room type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_rooms: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_occupants: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A bookable option (e.g. bed configuration) of a room type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomOption {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_occupants: Option<i64>,
}

/// A rate plan offered by a venue.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatePlan {
    pub id: i64,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// Ids of the rooms this plan can be booked for.
    #[serde(default)]
    pub room_ids: Vec<i64>,
}

vendor_enum! {
    /// Close-out status of a rate plan booking rule for a date range.
    pub enum CloseOutStatus {
        /// Bookable.
        Open = 0 => "open",
        /// Not bookable.
        Closed = 1 => "closed",
        /// No stays may start in the range.
        ClosedToArrival = 2 => "closed-to-arrival",
        /// No stays may end in the range.
        ClosedToDeparture = 3 => "closed-to-departure",
    }
}
