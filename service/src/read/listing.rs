//! [`Listing`]-related read definitions.

#[cfg(doc)]
use crate::domain::Listing;

pub mod list {
    //! [`Listing`] list definitions.

    use common::Money;

    use crate::domain::{listing, Listing};

    /// Filter for a [`Listing`] list.
    ///
    /// Criteria are conjunctive: a [`Listing`] matches when every present
    /// criterion matches. An absent (or empty-text) criterion is always-true
    /// for its axis. Filtering never re-orders: the input order of the
    /// collection is preserved.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Free text to search for, case-insensitively, as a substring of
        /// the title, the location or the description.
        pub text: Option<String>,

        /// Exact [`listing::Kind`] to match.
        pub kind: Option<listing::Kind>,

        /// Exact [`listing::Location`] to match.
        ///
        /// A distinct axis from [`Filter::text`].
        pub location: Option<listing::Location>,

        /// Inclusive upper bound on the per-night price.
        pub max_price: Option<Money>,

        /// Excludes unavailable [`Listing`]s when set.
        pub available_only: bool,
    }

    impl Filter {
        /// Checks whether the provided [`Listing`] matches this [`Filter`].
        #[must_use]
        pub fn matches(&self, listing: &Listing) -> bool {
            self.matches_text(listing)
                && self.kind.as_ref().is_none_or(|k| listing.kind == *k)
                && self
                    .location
                    .as_ref()
                    .is_none_or(|l| listing.location == *l)
                && self.max_price.is_none_or(|max| listing.price <= max)
                && (!self.available_only || listing.available)
        }

        /// Checks the free-text criterion of this [`Filter`] against the
        /// provided [`Listing`].
        fn matches_text(&self, listing: &Listing) -> bool {
            let Some(text) = self.text.as_deref() else {
                return true;
            };
            if text.is_empty() {
                return true;
            }

            let text = text.to_lowercase();
            let contains = |field: &str| field.to_lowercase().contains(&text);

            contains(listing.title.as_ref())
                || contains(listing.location.as_ref())
                || contains(listing.description.as_ref())
        }
    }
}

pub mod report {
    //! [`Listing`] back-office report definitions.

    use serde::{Deserialize, Serialize};
    use strum::{Display, EnumString};

    use crate::domain::{listing, Listing};

    /// Row of the back-office [`Listing`] report: a [`Listing`] joined with
    /// the number of bookings ever made against it (including ones whose
    /// [`Listing`] fields were later edited).
    #[derive(Clone, Debug)]
    pub struct Row {
        /// The [`Listing`] itself.
        pub listing: Listing,

        /// Number of bookings referencing the [`Listing`].
        pub bookings: usize,
    }

    /// Selector of back-office report [`Row`]s.
    ///
    /// Criteria are conjunctive, like [`list::Filter`] ones.
    ///
    /// [`list::Filter`]: super::list::Filter
    #[derive(Clone, Debug, Default)]
    pub struct Selector {
        /// Free text to search for, case-insensitively, as a substring of
        /// the title, the location or the description.
        pub text: Option<String>,

        /// [`Availability`] of the [`Listing`] itself to match.
        pub availability: Option<Availability>,

        /// Exact [`listing::Kind`] to match.
        pub kind: Option<listing::Kind>,
    }

    impl Selector {
        /// Checks whether the provided [`Listing`] matches this [`Selector`].
        #[must_use]
        pub fn matches(&self, listing: &Listing) -> bool {
            use super::list::Filter;

            let availability_matches =
                self.availability.is_none_or(|a| match a {
                    Availability::Available => listing.available,
                    Availability::Unavailable => !listing.available,
                });

            availability_matches
                && Filter {
                    text: self.text.clone(),
                    kind: self.kind.clone(),
                    ..Filter::default()
                }
                .matches(listing)
        }
    }

    /// Availability of a [`Listing`] (the listing's own `available` flag,
    /// not a booking status).
    #[derive(
        Clone,
        Copy,
        Debug,
        Deserialize,
        Display,
        EnumString,
        Eq,
        PartialEq,
        Serialize,
    )]
    #[serde(rename_all = "lowercase")]
    #[strum(serialize_all = "lowercase")]
    pub enum Availability {
        /// Only available [`Listing`]s.
        Available,

        /// Only unavailable [`Listing`]s.
        Unavailable,
    }
}
