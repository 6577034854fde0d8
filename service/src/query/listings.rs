//! [`Query`] collection related to the multiple [`Listing`]s.

use common::operations::By;

use crate::{domain::Listing, read};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of [`Listing`]s matching a [`Filter`], preserving the
/// collection order.
///
/// [`Filter`]: read::listing::list::Filter
pub type List = DatabaseQuery<By<Vec<Listing>, read::listing::list::Filter>>;

#[cfg(test)]
mod spec {
    use crate::{domain::listing, read, testing, Command as _};

    #[test]
    fn finds_seeded_villa_under_price_bound() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());

        let listings = service
            .execute(super::List::by(read::listing::list::Filter {
                kind: Some(listing::Kind::Villa),
                max_price: Some("3000MAD".parse().unwrap()),
                ..read::listing::list::Filter::default()
            }))
            .unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, listing::Id::from(5));
        assert_eq!(listings[0].location.to_string(), "Rabat");
    }
}
