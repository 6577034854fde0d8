//! [`Error`]-related definitions.

use derive_more::{Display, Error as StdError, From};
use service::{
    command::{
        access, create_booking, create_listing, create_user_session,
        delete_listing, update_listing,
    },
    domain::listing,
    infra::database,
};
use tracerr::Traced;

/// Error of executing a CLI command.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Database`] operation failed.
    ///
    /// [`Database`]: service::infra::Database
    #[display("{_0}")]
    Database(Traced<database::Error>),

    /// Authorization refusal.
    #[display("{_0}")]
    Access(Traced<access::AccessError>),

    /// Login failed.
    #[display("{_0}")]
    CreateUserSession(Traced<create_user_session::ExecutionError>),

    /// Listing creation failed.
    #[display("{_0}")]
    CreateListing(Traced<create_listing::ExecutionError>),

    /// Listing update failed.
    #[display("{_0}")]
    UpdateListing(Traced<update_listing::ExecutionError>),

    /// Listing deletion failed.
    #[display("{_0}")]
    DeleteListing(Traced<delete_listing::ExecutionError>),

    /// Booking creation failed.
    #[display("{_0}")]
    CreateBooking(Traced<create_booking::ExecutionError>),

    /// No listing carries the requested ID.
    #[display("`Listing(id: {_0})` does not exist")]
    #[from(ignore)]
    ListingNotFound(#[error(not(source))] listing::Id),
}
