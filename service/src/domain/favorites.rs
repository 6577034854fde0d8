//! [`Favorites`] definitions.

use std::collections::BTreeSet;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::domain::listing;

/// Set of favorited [`Listing`] IDs.
///
/// Global to the whole store, deliberately not scoped per user identity:
/// every account sharing the store shares the same set.
///
/// [`Listing`]: crate::domain::Listing
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Favorites(BTreeSet<listing::Id>);

impl Favorites {
    /// Toggles the provided [`Listing`] ID in this [`Favorites`] set: adds it
    /// if absent, removes it if present.
    ///
    /// [`Listing`]: crate::domain::Listing
    pub fn toggle(&mut self, id: listing::Id) -> Toggled {
        if self.0.remove(&id) {
            Toggled::Removed
        } else {
            _ = self.0.insert(id);
            Toggled::Added
        }
    }

    /// Removes the provided [`Listing`] ID from this [`Favorites`] set.
    ///
    /// Indicates whether the ID was actually present.
    ///
    /// [`Listing`]: crate::domain::Listing
    pub fn remove(&mut self, id: listing::Id) -> bool {
        self.0.remove(&id)
    }

    /// Indicates whether the provided [`Listing`] ID is favorited.
    ///
    /// [`Listing`]: crate::domain::Listing
    #[must_use]
    pub fn contains(&self, id: listing::Id) -> bool {
        self.0.contains(&id)
    }

    /// Iterates over the favorited [`Listing`] IDs.
    ///
    /// [`Listing`]: crate::domain::Listing
    pub fn iter(&self) -> impl Iterator<Item = listing::Id> + '_ {
        self.0.iter().copied()
    }

    /// Returns the number of favorited [`Listing`] IDs.
    ///
    /// [`Listing`]: crate::domain::Listing
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether this [`Favorites`] set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of a [`Favorites::toggle`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Toggled {
    /// The ID has been added to the set.
    #[display("added to favorites")]
    Added,

    /// The ID has been removed from the set.
    #[display("removed from favorites")]
    Removed,
}

#[cfg(test)]
mod spec {
    use super::{Favorites, Toggled};
    use crate::domain::listing;

    #[test]
    fn toggle_is_its_own_inverse() {
        let id = listing::Id::from(42);
        let mut favorites = Favorites::default();

        assert_eq!(favorites.toggle(id), Toggled::Added);
        assert!(favorites.contains(id));
        assert_eq!(favorites.toggle(id), Toggled::Removed);
        assert!(!favorites.contains(id));
        assert!(favorites.is_empty());
    }
}
