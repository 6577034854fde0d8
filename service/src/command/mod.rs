//! [`Command`] definition.

pub mod access;
pub mod create_booking;
pub mod create_listing;
pub mod create_user_session;
pub mod delete_listing;
pub mod delete_user_session;
pub mod toggle_favorite;
pub mod update_listing;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    access::AccessError, create_booking::CreateBooking,
    create_listing::CreateListing, create_user_session::CreateUserSession,
    delete_listing::DeleteListing, delete_user_session::DeleteUserSession,
    toggle_favorite::ToggleFavorite, update_listing::UpdateListing,
};
