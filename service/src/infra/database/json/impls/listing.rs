//! [`Listing`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{
        database::{self, json, Json},
        Database,
    },
    read,
};

impl Database<Insert<Listing>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Insert(listing): Insert<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state_mut();
        if state.listings.iter().any(|l| l.id == listing.id) {
            return Err(tracerr::new!(database::Error::from(
                json::Error::DuplicateId(listing.id.into()),
            )));
        }
        state.listings.push(listing);
        self.persist_listings(&state)
    }
}

impl Database<Update<Listing>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Update(listing): Update<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state_mut();
        let Some(stored) =
            state.listings.iter_mut().find(|l| l.id == listing.id)
        else {
            return Err(tracerr::new!(database::Error::from(
                json::Error::UnknownId(listing.id.into()),
            )));
        };
        *stored = listing;
        self.persist_listings(&state)
    }
}

impl Database<Delete<By<Listing, listing::Id>>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    /// Deletes the addressed [`Listing`] and removes its ID from the
    /// [`Favorites`] set in the same pass. [`Booking`]s referencing the
    /// [`Listing`] are left untouched.
    ///
    /// [`Booking`]: crate::domain::Booking
    /// [`Favorites`]: crate::domain::Favorites
    fn execute(
        &self,
        Delete(by): Delete<By<Listing, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        let mut state = self.state_mut();
        let Some(pos) = state.listings.iter().position(|l| l.id == id) else {
            return Err(tracerr::new!(database::Error::from(
                json::Error::UnknownId(id.into()),
            )));
        };
        _ = state.listings.remove(pos);
        self.persist_listings(&state)?;

        if state.favorites.remove(id) {
            self.persist_favorites(&state)?;
        }
        Ok(())
    }
}

impl Database<Select<By<Option<Listing>, listing::Id>>> for Json {
    type Ok = Option<Listing>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.state().listings.iter().find(|l| l.id == id).cloned())
    }
}

impl Database<Select<By<Vec<Listing>, read::listing::list::Filter>>>
    for Json
{
    type Ok = Vec<Listing>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Listing>, read::listing::list::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        Ok(self
            .state()
            .listings
            .iter()
            .filter(|l| filter.matches(l))
            .cloned()
            .collect())
    }
}
