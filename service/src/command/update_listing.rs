//! [`Command`] for updating an existing [`Listing`].

use std::collections::BTreeSet;

use common::{
    operations::{By, Select, Update},
    Money,
};
use derive_more::{Display, Error};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::listing::{
    Description, ImageUrl, Kind, Location, NumBathrooms, NumBedrooms,
    NumGuests, Title,
};
use crate::{
    domain::{listing, Listing, Session},
    infra::{database, Database},
    Service,
};

use super::{access::AccessError, Command};

/// [`Command`] for updating an existing [`Listing`].
///
/// Requires an administrator [`Session`]. Replaces every field of the
/// [`Listing`] except its ID and its `featured` mark, which are preserved
/// verbatim.
#[derive(Clone, Debug)]
pub struct UpdateListing {
    /// ID of the [`Listing`] to update.
    pub id: listing::Id,

    /// New [`Title`] of the [`Listing`].
    pub title: listing::Title,

    /// New [`Location`] of the [`Listing`].
    pub location: listing::Location,

    /// New per-night price of the [`Listing`].
    pub price: Money,

    /// New [`Kind`] of the [`Listing`].
    pub kind: listing::Kind,

    /// New number of bedrooms ([`NumBedrooms`] default when absent).
    pub bedrooms: Option<listing::NumBedrooms>,

    /// New number of bathrooms ([`NumBathrooms`] default when absent).
    pub bathrooms: Option<listing::NumBathrooms>,

    /// New maximum number of guests ([`NumGuests`] default when absent).
    pub max_guests: Option<listing::NumGuests>,

    /// New [`Description`] of the [`Listing`] (empty when absent).
    pub description: Option<listing::Description>,

    /// New [`ImageUrl`] of the [`Listing`] (placeholder when absent).
    pub image: Option<listing::ImageUrl>,

    /// New [`Amenity`]s of the [`Listing`].
    ///
    /// [`Amenity`]: listing::Amenity
    pub amenities: BTreeSet<listing::Amenity>,

    /// Whether the [`Listing`] is available for booking.
    pub available: bool,
}

impl<Db> Command<UpdateListing> for Service<Db>
where
    Db: Database<
            Select<By<Option<Session>, ()>>,
            Ok = Option<Session>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Listing>, listing::Id>>,
            Ok = Option<Listing>,
            Err = Traced<database::Error>,
        > + Database<Update<Listing>, Err = Traced<database::Error>>,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: UpdateListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateListing {
            id,
            title,
            location,
            price,
            kind,
            bedrooms,
            bathrooms,
            max_guests,
            description,
            image,
            amenities,
            available,
        } = cmd;

        _ = self
            .require_admin()
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let existing = self
            .database()
            .execute(Select(By::new(id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or_else(|| tracerr::new!(E::ListingNotExists(id)))?;

        let listing = Listing {
            id,
            title,
            location,
            price,
            kind,
            bedrooms: bedrooms.unwrap_or(listing::DEFAULT_NUM_BEDROOMS),
            bathrooms: bathrooms.unwrap_or(listing::DEFAULT_NUM_BATHROOMS),
            max_guests: max_guests.unwrap_or(listing::DEFAULT_MAX_GUESTS),
            description: description.unwrap_or_default(),
            image: image.unwrap_or_else(listing::ImageUrl::placeholder),
            amenities,
            available,
            featured: existing.featured,
        };

        self.database()
            .execute(Update(listing.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(listing)
    }
}

/// Error of [`UpdateListing`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// The current [`Session`] is not allowed to update [`Listing`]s.
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
    use std::collections::BTreeSet;

    use crate::{domain::listing, query, testing, Command as _};

    use super::{ExecutionError, UpdateListing};

    fn cmd(id: listing::Id) -> UpdateListing {
        UpdateListing {
            id,
            title: "Renamed".parse().unwrap(),
            location: "Essaouira".parse().unwrap(),
            price: "1000MAD".parse().unwrap(),
            kind: listing::Kind::Apartment,
            bedrooms: Some(3),
            bathrooms: None,
            max_guests: Some(6),
            description: None,
            image: None,
            amenities: BTreeSet::new(),
            available: false,
        }
    }

    #[test]
    fn preserves_id_and_featured_mark() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "admin", "admin123");

        // Seeded listing 1 is featured.
        let id = listing::Id::from(1);
        let updated = service.execute(cmd(id)).unwrap();
        assert_eq!(updated.id, id);
        assert!(updated.featured);
        assert_eq!(updated.title.to_string(), "Renamed");
        assert!(!updated.available);

        let stored = service
            .execute(query::listing::ById::by(id))
            .unwrap()
            .unwrap();
        assert_eq!(stored.title.to_string(), "Renamed");
        assert!(stored.featured);
    }

    #[test]
    fn refuses_unknown_listing() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "admin", "admin123");

        let err = service.execute(cmd(listing::Id::from(404))).unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::ListingNotExists(_),
        ));
    }

    #[test]
    fn forbidden_without_admin_session() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "user", "user123");

        let err = service.execute(cmd(listing::Id::from(1))).unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::Forbidden));
    }
}
