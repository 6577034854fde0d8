//! [`Command`] for creating a new [`Booking`].

use common::{
    operations::{By, Insert, Select},
    Date, DateTime,
};
use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{
    domain::{booking, listing, Booking, Listing, Session},
    infra::{database, Database},
    Service,
};

use super::{access::AccessError, Command};

/// [`Command`] for creating a new [`Booking`].
///
/// Requires any [`Session`] (administrators book like everyone else). The
/// booked [`Listing`]'s display fields and per-night price are snapshotted
/// into the [`Booking`], so it survives later edits or deletion of the
/// [`Listing`].
///
/// Overlapping [`Booking`]s of the same [`Listing`] are accepted: there is
/// no double-booking prevention.
#[derive(Clone, Copy, Debug)]
pub struct CreateBooking {
    /// ID of the [`Listing`] to book.
    pub listing_id: listing::Id,

    /// Check-in [`Date`].
    pub checkin: Date,

    /// Check-out [`Date`].
    pub checkout: Date,

    /// Number of guests.
    pub guests: listing::NumGuests,
}

impl<Db> Command<CreateBooking> for Service<Db>
where
    Db: Database<
            Select<By<Option<Session>, ()>>,
            Ok = Option<Session>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Listing>, listing::Id>>,
            Ok = Option<Listing>,
            Err = Traced<database::Error>,
        > + Database<Insert<Booking>, Err = Traced<database::Error>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: CreateBooking) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBooking {
            listing_id,
            checkin,
            checkout,
            guests,
        } = cmd;

        let session = self
            .require_session()
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let listing = self
            .database()
            .execute(Select(By::new(listing_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or_else(|| tracerr::new!(E::ListingNotExists(listing_id)))?;

        // Validation order is fixed: the first failed check names the error,
        // even if later checks would fail too.
        if checkout <= checkin {
            return Err(tracerr::new!(E::InvalidDateRange));
        }
        if guests == 0 {
            return Err(tracerr::new!(E::InvalidGuestCount));
        }
        if guests > listing.max_guests {
            return Err(tracerr::new!(E::GuestLimitExceeded(
                listing.max_guests,
            )));
        }

        let nights = booking::nights(checkin, checkout);
        let booking = Booking {
            id: booking::Id::new(),
            listing_id,
            listing_title: listing.title,
            listing_location: listing.location,
            listing_image: listing.image,
            checkin,
            checkout,
            guests,
            nights,
            price_per_night: listing.price,
            total_price: listing.price * nights,
            booked_at: DateTime::now().coerce(),
            status: booking::Status::Active,
            guest_name: session.login,
        };

        self.database()
            .execute(Insert(booking.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(booking)
    }
}

/// Error of [`CreateBooking`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// Nobody is logged in.
    #[display("Action not allowed")]
    Forbidden,

    /// [`Listing`] with the provided ID does not exist.
    #[display("`Listing(id: {_0})` does not exist")]
    ListingNotExists(#[error(not(source))] listing::Id),

    /// The check-out [`Date`] is not strictly after the check-in one.
    #[display("Check-out date must be after the check-in one")]
    InvalidDateRange,

    /// The number of guests is less than one.
    #[display("At least one guest is required")]
    InvalidGuestCount,

    /// The number of guests exceeds the [`Listing`]'s limit.
    #[display("No more than {_0} guests are accommodated")]
    GuestLimitExceeded(#[error(not(source))] listing::NumGuests),
}

impl From<database::Error> for ExecutionError {
    fn from(e: database::Error) -> Self {
        Self::Db(e)
    }
}

impl From<AccessError> for ExecutionError {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::Db(e) => Self::Db(e),
            AccessError::Forbidden => Self::Forbidden,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Date;

    use crate::{domain::listing, query, read, testing, Command as _};

    use super::{CreateBooking, ExecutionError};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn cmd() -> CreateBooking {
        CreateBooking {
            // Seeded listing 1: 1200MAD per night, up to 4 guests.
            listing_id: listing::Id::from(1),
            checkin: date("2026-09-01"),
            checkout: date("2026-09-04"),
            guests: 2,
        }
    }

    #[test]
    fn snapshots_listing_and_freezes_total() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "user", "user123");

        let booking = service.execute(cmd()).unwrap();
        assert_eq!(booking.nights, 3);
        assert_eq!(booking.price_per_night, "1200MAD".parse().unwrap());
        assert_eq!(booking.total_price, "3600MAD".parse().unwrap());
        assert_eq!(
            booking.listing_title.to_string(),
            "Luxury Apartment in Casablanca",
        );
        assert_eq!(booking.guest_name.to_string(), "user");

        let bookings = service
            .execute(query::bookings::List::by(
                read::booking::list::Selector::default(),
            ))
            .unwrap();
        assert_eq!(bookings.len(), 1);
    }

    #[test]
    fn requires_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());

        let err = service.execute(cmd()).unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::Forbidden));
    }

    #[test]
    fn refuses_unknown_listing() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "user", "user123");

        let err = service
            .execute(CreateBooking {
                listing_id: listing::Id::from(404),
                ..cmd()
            })
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::ListingNotExists(_),
        ));
    }

    #[test]
    fn validates_in_a_fixed_order() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "user", "user123");

        // Bad date range wins even when the guest count is bad too.
        let err = service
            .execute(CreateBooking {
                checkout: date("2026-09-01"),
                guests: 0,
                ..cmd()
            })
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::InvalidDateRange));

        let err = service
            .execute(CreateBooking { guests: 0, ..cmd() })
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::InvalidGuestCount));

        let err = service
            .execute(CreateBooking { guests: 5, ..cmd() })
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::GuestLimitExceeded(4),
        ));
    }

    #[test]
    fn accepts_overlapping_bookings() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "user", "user123");

        _ = service.execute(cmd()).unwrap();
        _ = service.execute(cmd()).unwrap();

        let bookings = service
            .execute(query::bookings::List::by(
                read::booking::list::Selector::default(),
            ))
            .unwrap();
        assert_eq!(bookings.len(), 2);
    }
}
