//! [`Query`] collection of back-office reporting.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the rows of the back-office [`Listing`] report.
///
/// [`Listing`]: crate::domain::Listing
pub type Listings = DatabaseQuery<
    By<Vec<read::listing::report::Row>, read::listing::report::Selector>,
>;

/// Queries the aggregated back-office [`Stats`].
///
/// [`Stats`]: read::Stats
pub type Stats = DatabaseQuery<By<read::Stats, ()>>;

#[cfg(test)]
mod spec {
    use common::Date;

    use crate::{
        command::{CreateBooking, ToggleFavorite},
        domain::listing,
        read, testing, Command as _,
    };

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn book(
        service: &crate::Service<crate::infra::Json>,
        listing_id: i64,
        checkin: &str,
        checkout: &str,
    ) {
        _ = service
            .execute(CreateBooking {
                listing_id: listing::Id::from(listing_id),
                checkin: date(checkin),
                checkout: date(checkout),
                guests: 2,
            })
            .unwrap();
    }

    #[test]
    fn stats_aggregate_the_whole_store() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "user", "user123");

        book(&service, 1, "2020-01-01", "2020-01-04");
        book(&service, 1, "2020-02-01", "2020-02-02");
        _ = service
            .execute(ToggleFavorite {
                id: listing::Id::from(1),
            })
            .unwrap();
        _ = service
            .execute(ToggleFavorite {
                id: listing::Id::from(2),
            })
            .unwrap();

        let stats = service.execute(super::Stats::by(())).unwrap();
        assert_eq!(stats.total_listings, 6);
        // The seeded Agadir studio is unavailable.
        assert_eq!(stats.available_listings, 5);
        assert_eq!(stats.total_favorites, 2);
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.total_revenue, "4800MAD".parse().unwrap());
        assert_eq!(stats.occupied_now, 0);
    }

    #[test]
    fn stats_count_currently_occupying_bookings() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "user", "user123");

        book(&service, 1, "2000-01-01", "2099-12-31");
        book(&service, 2, "2020-01-01", "2020-01-04");

        let stats = service.execute(super::Stats::by(())).unwrap();
        assert_eq!(stats.occupied_now, 1);
    }

    #[test]
    fn report_joins_booking_counts() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "user", "user123");

        book(&service, 1, "2020-01-01", "2020-01-04");
        book(&service, 1, "2020-02-01", "2020-02-02");

        let rows = service
            .execute(super::Listings::by(
                read::listing::report::Selector::default(),
            ))
            .unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].bookings, 2);
        assert_eq!(rows[1].bookings, 0);

        let rows = service
            .execute(super::Listings::by(read::listing::report::Selector {
                availability: Some(
                    read::listing::report::Availability::Unavailable,
                ),
                ..read::listing::report::Selector::default()
            }))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].listing.location.to_string(), "Agadir");
    }
}
