//! [`Command`] for toggling a [`Listing`] in the [`Favorites`] set.

use common::operations::{By, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{favorites::Toggled, listing, Favorites},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for toggling a [`Listing`] ID in the [`Favorites`] set.
///
/// Requires no [`Session`] and performs no referential check: toggling an ID
/// no [`Listing`] has is accepted (deleting the [`Listing`] later cleans the
/// set up).
///
/// [`Listing`]: crate::domain::Listing
/// [`Session`]: crate::domain::Session
#[derive(Clone, Copy, Debug)]
pub struct ToggleFavorite {
    /// ID of the [`Listing`] to toggle.
    ///
    /// [`Listing`]: crate::domain::Listing
    pub id: listing::Id,
}

impl<Db> Command<ToggleFavorite> for Service<Db>
where
    Db: Database<
            Select<By<Favorites, ()>>,
            Ok = Favorites,
            Err = Traced<database::Error>,
        > + Database<Update<Favorites>, Err = Traced<database::Error>>,
{
    type Ok = Toggled;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: ToggleFavorite) -> Result<Self::Ok, Self::Err> {
        let ToggleFavorite { id } = cmd;

        let mut favorites = self
            .database()
            .execute(Select(By::new(())))
            .map_err(tracerr::wrap!())?;
        let toggled = favorites.toggle(id);

        self.database()
            .execute(Update(favorites))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        Ok(toggled)
    }
}

/// Error of [`ToggleFavorite`] [`Command`] execution.
pub type ExecutionError = database::Error;

#[cfg(test)]
mod spec {
    use crate::{domain::listing, query, testing, Command as _};

    use super::{ToggleFavorite, Toggled};

    #[test]
    fn toggles_and_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id = listing::Id::from(2);

        {
            let service = testing::service(dir.path());
            let toggled = service.execute(ToggleFavorite { id }).unwrap();
            assert_eq!(toggled, Toggled::Added);
        }

        let service = testing::service(dir.path());
        let favorites = service.execute(query::favorites::Set::by(())).unwrap();
        assert!(favorites.contains(id));

        let toggled = service.execute(ToggleFavorite { id }).unwrap();
        assert_eq!(toggled, Toggled::Removed);
        let favorites = service.execute(query::favorites::Set::by(())).unwrap();
        assert!(favorites.is_empty());
    }

    #[test]
    fn accepts_unknown_listing_id() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());

        let toggled = service
            .execute(ToggleFavorite {
                id: listing::Id::from(404),
            })
            .unwrap();
        assert_eq!(toggled, Toggled::Added);
    }
}
