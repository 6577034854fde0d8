//! [`Command`] for deleting a [`Listing`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing, Session},
    infra::{database, Database},
    Service,
};

use super::{access::AccessError, Command};

/// [`Command`] for deleting a [`Listing`].
///
/// Requires an administrator [`Session`]. The deleted [`Listing`]'s ID is
/// also removed from the [`Favorites`] set, while [`Booking`]s referencing
/// it are kept as-is (their display fields are snapshots).
///
/// [`Booking`]: crate::domain::Booking
/// [`Favorites`]: crate::domain::Favorites
#[derive(Clone, Copy, Debug)]
pub struct DeleteListing {
    /// ID of the [`Listing`] to delete.
    pub id: listing::Id,
}

impl<Db> Command<DeleteListing> for Service<Db>
where
    Db: Database<
            Select<By<Option<Session>, ()>>,
            Ok = Option<Session>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Listing>, listing::Id>>,
            Ok = Option<Listing>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Listing, listing::Id>>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: DeleteListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteListing { id } = cmd;

        _ = self
            .require_admin()
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let listing = self
            .database()
            .execute(Select(By::new(id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or_else(|| tracerr::new!(E::ListingNotExists(id)))?;

        self.database()
            .execute(Delete(By::new(id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(listing)
    }
}

/// Error of [`DeleteListing`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// The current [`Session`] is not allowed to delete [`Listing`]s.
    #[display("Action not allowed")]
    Forbidden,

    /// [`Listing`] with the provided ID does not exist.
    #[display("`Listing(id: {_0})` does not exist")]
    ListingNotExists(#[error(not(source))] listing::Id),
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

    use crate::{
        command::{CreateBooking, ToggleFavorite},
        domain::listing,
        query, read, testing, Command as _,
    };

    use super::{DeleteListing, ExecutionError};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn removes_listing_and_its_favorite_mark() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "admin", "admin123");

        let id = listing::Id::from(1);
        _ = service.execute(ToggleFavorite { id }).unwrap();

        let deleted = service.execute(DeleteListing { id }).unwrap();
        assert_eq!(deleted.id, id);

        let found = service.execute(query::listing::ById::by(id)).unwrap();
        assert!(found.is_none());

        let favorites = service.execute(query::favorites::Set::by(())).unwrap();
        assert!(!favorites.contains(id));
    }

    #[test]
    fn keeps_bookings_of_the_deleted_listing() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "admin", "admin123");

        let id = listing::Id::from(1);
        let booking = service
            .execute(CreateBooking {
                listing_id: id,
                checkin: date("2026-09-01"),
                checkout: date("2026-09-04"),
                guests: 2,
            })
            .unwrap();

        _ = service.execute(DeleteListing { id }).unwrap();

        let bookings = service
            .execute(query::bookings::List::by(
                read::booking::list::Selector::default(),
            ))
            .unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].id, booking.id);
        assert_eq!(
            bookings[0].listing_title.to_string(),
            "Luxury Apartment in Casablanca",
        );
    }

    #[test]
    fn forbidden_without_admin_session() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());

        let err = service
            .execute(DeleteListing {
                id: listing::Id::from(1),
            })
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::Forbidden));
    }
}
