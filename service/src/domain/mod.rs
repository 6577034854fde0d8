//! Domain entities definitions.

pub mod booking;
pub mod favorites;
pub mod listing;
pub mod user;

pub use self::{
    booking::Booking, favorites::Favorites, listing::Listing, user::Session,
};
