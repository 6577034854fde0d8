//! [`Session`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::Session,
    infra::{
        database::{self, Json},
        Database,
    },
};

impl Database<Select<By<Option<Session>, ()>>> for Json {
    type Ok = Option<Session>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        _: Select<By<Option<Session>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state().session.clone())
    }
}

impl Database<Insert<Session>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    /// Replaces any prior [`Session`]: at most one exists at a time.
    fn execute(
        &self,
        Insert(session): Insert<Session>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state_mut();
        state.session = Some(session);
        self.persist_session(&state)
    }
}

impl Database<Delete<By<Session, ()>>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    /// Clearing an already absent [`Session`] is a no-op, not an error.
    fn execute(
        &self,
        _: Delete<By<Session, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state_mut();
        state.session = None;
        self.persist_session(&state)
    }
}
