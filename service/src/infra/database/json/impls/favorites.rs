//! [`Favorites`]-related [`Database`] implementations.

use common::operations::{By, Select, Update};
use tracerr::Traced;

use crate::{
    domain::Favorites,
    infra::{
        database::{self, Json},
        Database,
    },
};

impl Database<Select<By<Favorites, ()>>> for Json {
    type Ok = Favorites;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        _: Select<By<Favorites, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state().favorites.clone())
    }
}

impl Database<Update<Favorites>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Update(favorites): Update<Favorites>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state_mut();
        state.favorites = favorites;
        self.persist_favorites(&state)
    }
}
