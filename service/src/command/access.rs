//! Authorization gate shared by [`Command`]s.

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use super::Command;
use crate::{
    domain::Session,
    infra::{database, Database},
    Service,
};

impl<Db> Service<Db>
where
    Db: Database<
        Select<By<Option<Session>, ()>>,
        Ok = Option<Session>,
        Err = Traced<database::Error>,
    >,
{
    /// Returns the current [`Session`], refusing when nobody is logged in.
    ///
    /// # Errors
    ///
    /// - [`AccessError::Forbidden`] if there is no current [`Session`].
    /// - [`AccessError::Db`] if the [`Database`] operation fails.
    pub fn require_session(&self) -> Result<Session, Traced<AccessError>> {
        self.database()
            .execute(Select(By::new(())))
            .map_err(tracerr::map_from_and_wrap!(=> AccessError))?
            .ok_or_else(|| tracerr::new!(AccessError::Forbidden))
    }

    /// Returns the current [`Session`], refusing unless it belongs to an
    /// administrator.
    ///
    /// The refusal is uniform: a missing [`Session`] and an
    /// under-privileged one are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// - [`AccessError::Forbidden`] if there is no current [`Session`], or
    ///   it doesn't belong to an administrator.
    /// - [`AccessError::Db`] if the [`Database`] operation fails.
    pub fn require_admin(&self) -> Result<Session, Traced<AccessError>> {
        let session = self.require_session().map_err(tracerr::wrap!())?;
        if session.is_admin() {
            Ok(session)
        } else {
            Err(tracerr::new!(AccessError::Forbidden))
        }
    }
}

/// Error of an authorization check.
#[derive(Debug, Display, Error, From)]
pub enum AccessError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// The action is not allowed for the current [`Session`] (or its
    /// absence).
    #[display("Action not allowed")]
    Forbidden,
}
