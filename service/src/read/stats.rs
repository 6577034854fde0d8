//! Back-office statistics definitions.

use common::Money;

#[cfg(doc)]
use crate::domain::{Booking, Favorites, Listing};

/// Aggregated back-office statistics.
#[derive(Clone, Debug)]
pub struct Stats {
    /// Total number of [`Listing`]s.
    pub total_listings: usize,

    /// Number of [`Listing`]s currently available for booking.
    pub available_listings: usize,

    /// Number of favorited [`Listing`] IDs ([`Favorites`] set size).
    pub total_favorites: usize,

    /// Total number of [`Booking`]s ever created.
    pub total_bookings: usize,

    /// Sum of the frozen total prices over all [`Booking`]s, active and
    /// completed alike (no refund or cancellation model exists).
    pub total_revenue: Money,

    /// Number of [`Booking`]s currently occupying their [`Listing`]
    /// (see [`Booking::occupies`]).
    pub occupied_now: usize,
}
