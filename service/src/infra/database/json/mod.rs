//! JSON file [`Database`] implementation.

mod impls;
mod seed;

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use derive_more::{Display, Error as StdError, From};
use serde::{de::DeserializeOwned, Serialize};
use tracerr::Traced;
use tracing as log;

use crate::domain::{Booking, Favorites, Listing, Session};

#[cfg(doc)]
use super::Database;

/// File a `listings` collection is persisted to.
const LISTINGS_FILE: &str = "listings.json";

/// File a `favorites` collection is persisted to.
const FAVORITES_FILE: &str = "favorites.json";

/// File a `bookings` collection is persisted to.
const BOOKINGS_FILE: &str = "bookings.json";

/// File a `currentUser` record is persisted to.
const SESSION_FILE: &str = "current_user.json";

/// [`Json`] store configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory the collection files live in.
    ///
    /// Created if absent.
    pub dir: PathBuf,
}

/// [`Database`] persisting every collection as a JSON file in a directory.
///
/// The whole dataset is held in memory as the single mutable working copy,
/// read once on [`Json::open`]. Every successful mutation synchronously
/// rewrites the affected collection file before returning (write-through),
/// so no mutation is considered complete until it is durable.
#[derive(Clone, Debug)]
pub struct Json(Arc<Inner>);

/// Inner state of a [`Json`] store.
#[derive(Debug)]
struct Inner {
    /// Directory the collection files live in.
    dir: PathBuf,

    /// In-memory working copy of the persisted collections.
    state: RwLock<State>,
}

/// In-memory working copy of the persisted collections.
#[derive(Debug, Default)]
struct State {
    /// [`Listing`]s collection, in insertion order.
    listings: Vec<Listing>,

    /// [`Favorites`] set.
    favorites: Favorites,

    /// [`Booking`]s collection, in insertion order.
    bookings: Vec<Booking>,

    /// Current [`Session`], if any.
    session: Option<Session>,
}

impl Json {
    /// Opens a [`Json`] store in the configured directory.
    ///
    /// Absent files are treated as empty collections. If the [`Listing`]s
    /// collection turns out empty, it's seeded with the fixed demo set and
    /// persisted immediately (one-time initialization).
    ///
    /// # Errors
    ///
    /// Errors if the directory cannot be created, or any collection file
    /// cannot be read or parsed.
    pub fn open(config: &Config) -> Result<Self, Traced<super::Error>> {
        let dir = &config.dir;
        fs::create_dir_all(dir)
            .map_err(|e| tracerr::new!(super::Error::from(Error::from(e))))?;

        let mut listings: Vec<Listing> =
            read_file(dir, LISTINGS_FILE)?.unwrap_or_default();
        let favorites: Favorites =
            read_file(dir, FAVORITES_FILE)?.unwrap_or_default();
        let bookings: Vec<Booking> =
            read_file(dir, BOOKINGS_FILE)?.unwrap_or_default();
        let session: Option<Session> =
            read_file(dir, SESSION_FILE)?.unwrap_or_default();

        if listings.is_empty() {
            listings = seed::listings();
            write_file(dir, LISTINGS_FILE, &listings)?;
            log::info!(count = listings.len(), "seeded demo listings");
        }

        Ok(Self(Arc::new(Inner {
            dir: dir.clone(),
            state: RwLock::new(State {
                listings,
                favorites,
                bookings,
                session,
            }),
        })))
    }

    /// Returns a read guard over the in-memory [`State`].
    fn state(&self) -> RwLockReadGuard<'_, State> {
        // There is a single logical thread of execution, so a poisoned lock
        // can only be left by an already-reported panic.
        self.0.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a write guard over the in-memory [`State`].
    fn state_mut(&self) -> RwLockWriteGuard<'_, State> {
        self.0.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes the `listings` collection of the provided [`State`] through to
    /// its file.
    fn persist_listings(
        &self,
        state: &State,
    ) -> Result<(), Traced<super::Error>> {
        write_file(&self.0.dir, LISTINGS_FILE, &state.listings)
    }

    /// Writes the `favorites` collection of the provided [`State`] through
    /// to its file.
    fn persist_favorites(
        &self,
        state: &State,
    ) -> Result<(), Traced<super::Error>> {
        write_file(&self.0.dir, FAVORITES_FILE, &state.favorites)
    }

    /// Writes the `bookings` collection of the provided [`State`] through to
    /// its file.
    fn persist_bookings(
        &self,
        state: &State,
    ) -> Result<(), Traced<super::Error>> {
        write_file(&self.0.dir, BOOKINGS_FILE, &state.bookings)
    }

    /// Writes the current [`Session`] record of the provided [`State`]
    /// through to its file.
    fn persist_session(
        &self,
        state: &State,
    ) -> Result<(), Traced<super::Error>> {
        write_file(&self.0.dir, SESSION_FILE, &state.session)
    }
}

/// Reads the named collection file from the provided directory.
///
/// [`None`] is returned if the file doesn't exist yet.
fn read_file<T: DeserializeOwned>(
    dir: &Path,
    name: &str,
) -> Result<Option<T>, Traced<super::Error>> {
    let path = dir.join(name);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(tracerr::new!(super::Error::from(Error::from(e))));
        }
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| tracerr::new!(super::Error::from(Error::from(e))))
}

/// Writes the named collection file into the provided directory.
fn write_file<T: Serialize>(
    dir: &Path,
    name: &str,
    value: &T,
) -> Result<(), Traced<super::Error>> {
    let bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| tracerr::new!(super::Error::from(Error::from(e))))?;
    fs::write(dir.join(name), bytes)
        .map_err(|e| tracerr::new!(super::Error::from(Error::from(e))))
}

/// [`Json`] store error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read or write a collection file.
    #[display("I/O operation failed: {_0}")]
    Io(io::Error),

    /// Failed to serialize or deserialize a collection.
    #[display("JSON (de)serialization failed: {_0}")]
    Json(serde_json::Error),

    /// Insertion would duplicate an existing ID.
    #[display("duplicate id: {_0}")]
    #[from(ignore)]
    DuplicateId(#[error(not(source))] i64),

    /// Update or deletion addressed an ID that doesn't exist.
    #[display("unknown id: {_0}")]
    #[from(ignore)]
    UnknownId(#[error(not(source))] i64),

    /// Monetary amounts in different currencies cannot be summed.
    #[display("cannot sum amounts in different currencies")]
    MixedCurrencies,
}

#[cfg(test)]
mod spec {
    use std::{fs, path::Path};

    use common::{
        operations::{By, Select},
        Handler as _,
    };

    use crate::{
        domain::{listing, Listing},
        read,
    };

    use super::{Config, Json};

    fn open(dir: &Path) -> Json {
        Json::open(&Config {
            dir: dir.to_path_buf(),
        })
        .unwrap()
    }

    fn all_listings(db: &Json) -> Vec<Listing> {
        db.execute(Select(By::new(read::listing::list::Filter::default())))
            .unwrap()
    }

    #[test]
    fn seeds_empty_store_once() {
        let dir = tempfile::tempdir().unwrap();

        let db = open(dir.path());
        let all = all_listings(&db);
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].id, listing::Id::from(1));
        drop(db);

        // Reopening must neither reseed nor duplicate.
        let db = open(dir.path());
        assert_eq!(all_listings(&db).len(), 6);
    }

    #[test]
    fn seeded_villa_matches_demo_data() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(dir.path());

        let villa: Listing = db
            .execute(Select(By::new(listing::Id::from(5))))
            .unwrap()
            .unwrap();
        assert_eq!(villa.kind, listing::Kind::Villa);
        assert_eq!(villa.location.to_string(), "Rabat");
        assert_eq!(villa.price, "3000MAD".parse().unwrap());
        assert_eq!(villa.max_guests, 10);
        assert!(villa.amenities.contains(&listing::Amenity::Pool));
        assert!(villa.featured);
    }

    #[test]
    fn persists_collections_in_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        _ = open(dir.path());

        let raw =
            fs::read_to_string(dir.path().join("listings.json")).unwrap();
        assert!(raw.contains("\"maxGuests\""));
        assert!(raw.contains("\"type\""));
        assert!(!raw.contains("\"max_guests\""));
    }
}
