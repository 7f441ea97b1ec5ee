use chrono::NaiveDate;
use serde_json::json;

use crate::{
    codec::Codec,
    dispatcher::{Dispatcher, Operation},
    query::{FilterSpec, Page},
    transport::Transport,
    types::{
        Accommodation, Booking, BookingID, CloseOutStatus, PagedCollection, RatePlan, ResultSuccess,
        Room, RoomOption, RoomReservation, Venue, VenueID,
    },
    Error, Result,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Venue operations: venue details, rooms, rate plans, bookings and the
/// inventory writes (room counts, dynamic rates, booking rules).
///
/// The write methods are not idempotent from the vendor's point of view and
/// are never retried here.
pub struct VenueApi<'a, T, C> {
    dispatcher: &'a Dispatcher<T, C>,
}

impl<'a, T: Transport, C: Codec> VenueApi<'a, T, C> {
    pub(crate) fn new(dispatcher: &'a Dispatcher<T, C>) -> Self {
        Self { dispatcher }
    }

    /// Fetches a single venue.
    pub async fn get_venue(&self, venue_id: VenueID) -> Result<Venue> {
        self.dispatcher
            .execute(Operation::get("/venues/{venueId}").with_path_param("venueId", venue_id))
            .await
    }

    /// Fetches one page of the venue's accommodation rooms.
    pub async fn list_rooms(&self, venue_id: VenueID, page: Page) -> Result<PagedCollection<Room>> {
        self.dispatcher
            .execute_list(
                Operation::get("/venues/{venueId}/rooms").with_path_param("venueId", venue_id),
                Some(page),
            )
            .await
    }

    /// Fetches one page of the venue's room options.
    pub async fn list_room_options(
        &self,
        venue_id: VenueID,
        page: Page,
    ) -> Result<PagedCollection<RoomOption>> {
        self.dispatcher
            .execute_list(
                Operation::get("/venues/{venueId}/room-options")
                    .with_path_param("venueId", venue_id),
                Some(page),
            )
            .await
    }

    /// Fetches one page of the venue's rate plans.
    pub async fn list_rate_plans(
        &self,
        venue_id: VenueID,
        page: Page,
    ) -> Result<PagedCollection<RatePlan>> {
        self.dispatcher
            .execute_list(
                Operation::get("/venues/{venueId}/rate-plans").with_path_param("venueId", venue_id),
                Some(page),
            )
            .await
    }

    /// Fetches a single booking of a venue.
    pub async fn get_booking(&self, venue_id: VenueID, booking_id: BookingID) -> Result<Booking> {
        self.dispatcher
            .execute(
                Operation::get("/venues/{venueId}/bookings/{bookingId}")
                    .with_path_param("venueId", venue_id)
                    .with_path_param("bookingId", booking_id),
            )
            .await
    }

    /// Fetches the accommodation groups of a booking. The vendor returns them
    /// all in one envelope; no window is sent.
    pub async fn list_booking_accommodation(
        &self,
        venue_id: VenueID,
        booking_id: BookingID,
    ) -> Result<PagedCollection<Accommodation>> {
        self.dispatcher
            .execute_list(
                Operation::get("/venues/{venueId}/bookings/{bookingId}/accommodation")
                    .with_path_param("venueId", venue_id)
                    .with_path_param("bookingId", booking_id),
                None,
            )
            .await
    }

    /// Fetches one page of room reservations, optionally restricted to one
    /// booking.
    pub async fn list_room_reservations(
        &self,
        venue_id: VenueID,
        page: Page,
        booking_id: Option<BookingID>,
        filter: Option<&FilterSpec>,
    ) -> Result<PagedCollection<RoomReservation>> {
        let mut op = Operation::get("/venues/{venueId}/room-reservations")
            .with_path_param("venueId", venue_id)
            .with_filter(filter);
        if let Some(booking_id) = booking_id {
            op = op.with_query("bookingId", booking_id);
        }
        self.dispatcher.execute_list(op, Some(page)).await
    }

    /// Fetches one page of a venue's bookings.
    pub async fn list_bookings(
        &self,
        venue_id: VenueID,
        page: Page,
        filter: Option<&FilterSpec>,
    ) -> Result<PagedCollection<Booking>> {
        self.dispatcher
            .execute_list(
                Operation::get("/venues/{venueId}/bookings")
                    .with_path_param("venueId", venue_id)
                    .with_filter(filter),
                Some(page),
            )
            .await
    }

    /// Fetches one page of bookings across every venue in the account.
    pub async fn list_account_bookings(
        &self,
        page: Page,
        filter: Option<&FilterSpec>,
    ) -> Result<PagedCollection<Booking>> {
        self.dispatcher
            .execute_list(Operation::get("/bookings").with_filter(filter), Some(page))
            .await
    }

    /// Adds or updates the inventory count of a room for a date range.
    pub async fn set_room_counts(
        &self,
        venue_id: VenueID,
        room_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        room_count: u32,
    ) -> Result<ResultSuccess> {
        self.dispatcher
            .execute(
                Operation::put("/venues/{venueId}/rooms/{roomId}/counts")
                    .with_path_param("venueId", venue_id)
                    .with_path_param("roomId", room_id)
                    .with_body(json!({
                        "startDate": date(start_date),
                        "endDate": date(end_date),
                        "roomCount": room_count,
                    })),
            )
            .await
    }

    /// Adds or updates the dynamic rate of a room under a rate plan for a
    /// date range. `cost` must include or exclude tax according to the
    /// venue's configuration.
    pub async fn set_room_dynamic_rates(
        &self,
        venue_id: VenueID,
        rate_plan_id: i64,
        room_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        cost: f64,
    ) -> Result<ResultSuccess> {
        if !cost.is_finite() {
            return Err(Error::configuration(format!("dynamic rate cost {} is not finite", cost)));
        }
        self.dispatcher
            .execute(
                dynamic_rates(Operation::put(DYNAMIC_RATES_PATH), venue_id, rate_plan_id, room_id)
                    .with_body(json!({
                        "startDate": date(start_date),
                        "endDate": date(end_date),
                        "cost": cost,
                    })),
            )
            .await
    }

    /// Removes the dynamic rates of a room under a rate plan for a date range.
    pub async fn remove_room_dynamic_rates(
        &self,
        venue_id: VenueID,
        rate_plan_id: i64,
        room_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<ResultSuccess> {
        self.dispatcher
            .execute(
                dynamic_rates(Operation::delete(DYNAMIC_RATES_PATH), venue_id, rate_plan_id, room_id)
                    .with_query("startDate", date(start_date))
                    .with_query("endDate", date(end_date)),
            )
            .await
    }

    /// Adds or updates the booking rule (close-out status) of a room under a
    /// rate plan for a date range.
    pub async fn set_rate_plan_rules(
        &self,
        venue_id: VenueID,
        rate_plan_id: i64,
        room_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        close_out_status: CloseOutStatus,
    ) -> Result<ResultSuccess> {
        self.dispatcher
            .execute(
                Operation::put("/venues/{venueId}/rate-plans/{ratePlanId}/rooms/{roomId}/rules")
                    .with_path_param("venueId", venue_id)
                    .with_path_param("ratePlanId", rate_plan_id)
                    .with_path_param("roomId", room_id)
                    .with_body(json!({
                        "startDate": date(start_date),
                        "endDate": date(end_date),
                        "closeOutStatus": close_out_status,
                    })),
            )
            .await
    }
}

const DYNAMIC_RATES_PATH: &str = "/venues/{venueId}/rate-plans/{ratePlanId}/rooms/{roomId}/dynamic-rates";

fn dynamic_rates(op: Operation<'_>, venue_id: VenueID, rate_plan_id: i64, room_id: i64) -> Operation<'_> {
    op.with_path_param("venueId", venue_id)
        .with_path_param("ratePlanId", rate_plan_id)
        .with_path_param("roomId", room_id)
}
