//! [`Booking`]-related read definitions.

#[cfg(doc)]
use crate::domain::Booking;

pub mod list {
    //! [`Booking`] list definitions.

    use crate::domain::{booking, user, Booking};

    /// Selector of a [`Booking`] list.
    ///
    /// Matching [`Booking`]s are returned newest-first (by creation time).
    #[derive(Clone, Debug, Default)]
    pub struct Selector {
        /// Only [`Booking`]s created by the user with this [`Login`].
        ///
        /// [`Login`]: user::Login
        pub guest: Option<user::Login>,

        /// Only [`Booking`]s with this [`Status`].
        ///
        /// [`Status`]: booking::Status
        pub status: Option<booking::Status>,

        /// Cap on the number of returned [`Booking`]s.
        pub limit: Option<usize>,
    }

    impl Selector {
        /// Checks whether the provided [`Booking`] matches this [`Selector`].
        #[must_use]
        pub fn matches(&self, booking: &Booking) -> bool {
            self.guest.as_ref().is_none_or(|g| booking.guest_name == *g)
                && self.status.is_none_or(|s| booking.status == s)
        }
    }
}
