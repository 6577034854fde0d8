//! [`Booking`] definitions.

use std::sync::atomic::{AtomicI64, Ordering};

use common::{unit, Date, DateTime, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

use crate::domain::{listing, user};

/// Reservation of a [`Listing`] for a date range.
///
/// Immutable after creation: the listing display fields and the price are
/// snapshotted at booking time, so the record survives later edits or
/// deletion of the [`Listing`] it references.
///
/// [`Listing`]: crate::domain::Listing
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID the booked [`Listing`] had at booking time.
    ///
    /// The [`Listing`] may no longer exist.
    ///
    /// [`Listing`]: crate::domain::Listing
    pub listing_id: listing::Id,

    /// [`Title`] the booked [`Listing`] had at booking time.
    ///
    /// [`Listing`]: crate::domain::Listing
    /// [`Title`]: listing::Title
    pub listing_title: listing::Title,

    /// [`Location`] the booked [`Listing`] had at booking time.
    ///
    /// [`Listing`]: crate::domain::Listing
    /// [`Location`]: listing::Location
    pub listing_location: listing::Location,

    /// [`ImageUrl`] the booked [`Listing`] had at booking time.
    ///
    /// [`ImageUrl`]: listing::ImageUrl
    /// [`Listing`]: crate::domain::Listing
    pub listing_image: listing::ImageUrl,

    /// Check-in [`Date`].
    pub checkin: Date,

    /// Check-out [`Date`] (strictly after the check-in one).
    pub checkout: Date,

    /// Number of guests.
    pub guests: listing::NumGuests,

    /// Number of nights, derived from the date range at creation.
    pub nights: Nights,

    /// Per-night price the [`Listing`] had at booking time.
    ///
    /// [`Listing`]: crate::domain::Listing
    pub price_per_night: Money,

    /// Total price of this [`Booking`], frozen at creation.
    ///
    /// Never recomputed from a later [`Listing`] price.
    ///
    /// [`Listing`]: crate::domain::Listing
    pub total_price: Money,

    /// [`DateTime`] when this [`Booking`] was created.
    #[serde(rename = "bookingDate", with = "common::datetime::serde::rfc3339")]
    pub booked_at: CreationDateTime,

    /// [`Status`] of this [`Booking`].
    pub status: Status,

    /// [`Login`] of the user who created this [`Booking`].
    ///
    /// [`Login`]: user::Login
    pub guest_name: user::Login,
}

impl Booking {
    /// Indicates whether this [`Booking`] occupies its [`Listing`] on the
    /// provided date.
    ///
    /// Derived at read time, never stored: an active [`Booking`] occupies on
    /// every date of its `checkin..=checkout` range.
    ///
    /// [`Listing`]: crate::domain::Listing
    #[must_use]
    pub fn occupies(&self, today: Date) -> bool {
        self.status == Status::Active
            && self.checkin <= today
            && today <= self.checkout
    }
}

/// ID of a [`Booking`].
///
/// Derived from the creation time (Unix epoch milliseconds), like
/// [`listing::Id`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(i64);

impl Id {
    /// Creates a new time-derived [`Id`].
    ///
    /// Strictly monotonic within the process, so back-to-back creations in
    /// the same millisecond never collide.
    #[must_use]
    pub fn new() -> Self {
        static LAST: AtomicI64 = AtomicI64::new(0);

        let now = DateTime::now().unix_timestamp_millis();
        let prev = LAST
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        Self(now.max(prev + 1))
    }
}

/// Status of a [`Booking`].
///
/// Never transitioned automatically by date: "currently occupying" is the
/// derived [`Booking::occupies`] predicate, not a stored state.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    EnumString,
    Eq,
    PartialEq,
    Serialize,
    StrumDisplay,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    /// The [`Booking`] is in effect.
    Active,

    /// The [`Booking`] has been completed.
    Completed,
}

/// Number of nights of a [`Booking`].
pub type Nights = u32;

/// Returns the number of [`Nights`] between the provided check-in and
/// check-out [`Date`]s.
///
/// At least `1`, whatever the range.
#[must_use]
pub fn nights(checkin: Date, checkout: Date) -> Nights {
    Nights::try_from(checkin.whole_days_until(checkout)).unwrap_or(0).max(1)
}

/// [`DateTime`] when a [`Booking`] was created.
pub type CreationDateTime = DateTimeOf<(Booking, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::Date;

    use super::{nights, Booking, Status};
    use crate::domain::{listing, user};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn booking(checkin: &str, checkout: &str, status: Status) -> Booking {
        let price: common::Money = "1200MAD".parse().unwrap();
        Booking {
            id: super::Id::new(),
            listing_id: listing::Id::new(),
            listing_title: listing::Title::new("Test").unwrap(),
            listing_location: listing::Location::new("Rabat").unwrap(),
            listing_image: listing::ImageUrl::placeholder(),
            checkin: date(checkin),
            checkout: date(checkout),
            guests: 2,
            nights: nights(date(checkin), date(checkout)),
            price_per_night: price,
            total_price: price * nights(date(checkin), date(checkout)),
            booked_at: common::DateTime::now().coerce(),
            status,
            guest_name: user::Login::new("user").unwrap(),
        }
    }

    #[test]
    fn nights_is_whole_days() {
        assert_eq!(nights(date("2024-06-01"), date("2024-06-04")), 3);
        assert_eq!(nights(date("2024-06-01"), date("2024-06-02")), 1);
    }

    #[test]
    fn occupies_within_range() {
        let b = booking("2024-06-01", "2024-06-04", Status::Active);
        assert!(b.occupies(date("2024-06-01")));
        assert!(b.occupies(date("2024-06-02")));
        assert!(b.occupies(date("2024-06-04")));
        assert!(!b.occupies(date("2024-05-31")));
        assert!(!b.occupies(date("2024-06-05")));
    }

    #[test]
    fn completed_never_occupies() {
        let b = booking("2024-06-01", "2024-06-04", Status::Completed);
        assert!(!b.occupies(date("2024-06-02")));
    }
}
