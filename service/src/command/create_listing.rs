//! [`Command`] for creating a new [`Listing`].

use std::collections::BTreeSet;

use common::{
    operations::{By, Insert, Select},
    Money,
};
use derive_more::{Display, Error};
use rand::Rng as _;
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

/// [`Command`] for creating a new [`Listing`].
///
/// Requires an administrator [`Session`].
#[derive(Clone, Debug)]
pub struct CreateListing {
    /// [`Title`] of a new [`Listing`].
    pub title: listing::Title,

    /// [`Location`] of a new [`Listing`].
    pub location: listing::Location,

    /// Per-night price of a new [`Listing`].
    pub price: Money,

    /// [`Kind`] of a new [`Listing`].
    pub kind: listing::Kind,

    /// Number of bedrooms ([`NumBedrooms`] default when absent).
    pub bedrooms: Option<listing::NumBedrooms>,

    /// Number of bathrooms ([`NumBathrooms`] default when absent).
    pub bathrooms: Option<listing::NumBathrooms>,

    /// Maximum number of guests ([`NumGuests`] default when absent).
    pub max_guests: Option<listing::NumGuests>,

    /// [`Description`] of a new [`Listing`] (empty when absent).
    pub description: Option<listing::Description>,

    /// [`ImageUrl`] of a new [`Listing`] (placeholder when absent).
    pub image: Option<listing::ImageUrl>,

    /// [`Amenity`]s of a new [`Listing`].
    ///
    /// [`Amenity`]: listing::Amenity
    pub amenities: BTreeSet<listing::Amenity>,

    /// Whether a new [`Listing`] is available for booking.
    pub available: bool,
}

impl CreateListing {
    /// Probability of a new [`Listing`] being marked as featured.
    ///
    /// The mark is rolled once at creation and then preserved verbatim on
    /// every subsequent edit.
    const FEATURED_PROBABILITY: f64 = 0.2;
}

impl<Db> Command<CreateListing> for Service<Db>
where
    Db: Database<
            Select<By<Option<Session>, ()>>,
            Ok = Option<Session>,
            Err = Traced<database::Error>,
        > + Database<Insert<Listing>, Err = Traced<database::Error>>,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: CreateListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateListing {
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

        let listing = Listing {
            id: listing::Id::new(),
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
            featured: rand::thread_rng()
                .gen_bool(CreateListing::FEATURED_PROBABILITY),
        };

        self.database()
            .execute(Insert(listing.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(listing)
    }
}

/// Error of [`CreateListing`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// The current [`Session`] is not allowed to create [`Listing`]s.
    #[display("Action not allowed")]
    Forbidden,
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
    use std::{collections::BTreeSet, fs};

    use crate::{domain::listing, query, read, testing, Command as _};

    use super::{CreateListing, ExecutionError};

    fn cmd() -> CreateListing {
        CreateListing {
            title: "Surf Shack".parse().unwrap(),
            location: "Taghazout".parse().unwrap(),
            price: "900MAD".parse().unwrap(),
            kind: listing::Kind::House,
            bedrooms: None,
            bathrooms: None,
            max_guests: None,
            description: None,
            image: None,
            amenities: BTreeSet::new(),
            available: true,
        }
    }

    #[test]
    fn applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "admin", "admin123");

        let listing = service.execute(cmd()).unwrap();
        assert_eq!(listing.bedrooms, listing::DEFAULT_NUM_BEDROOMS);
        assert_eq!(listing.bathrooms, listing::DEFAULT_NUM_BATHROOMS);
        assert_eq!(listing.max_guests, listing::DEFAULT_MAX_GUESTS);
        assert!(listing.description.is_empty());
        assert_eq!(listing.image.to_string(), listing::ImageUrl::PLACEHOLDER);

        let found = service
            .execute(query::listing::ById::by(listing.id))
            .unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn appends_after_seeded_listings() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "admin", "admin123");

        let listing = service.execute(cmd()).unwrap();

        let all = service
            .execute(query::listings::List::by(
                read::listing::list::Filter::default(),
            ))
            .unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(all.last().unwrap().id, listing.id);
    }

    #[test]
    fn forbidden_without_admin_session() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        let persisted = fs::read(dir.path().join("listings.json")).unwrap();

        let err = service.execute(cmd()).unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::Forbidden));

        testing::login(&service, "user", "user123");
        let err = service.execute(cmd()).unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::Forbidden));

        // A refused command leaves the persisted collection untouched.
        let unchanged = fs::read(dir.path().join("listings.json")).unwrap();
        assert_eq!(persisted, unchanged);
    }
}
