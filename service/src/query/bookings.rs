//! [`Query`] collection related to the multiple [`Booking`]s.

use common::operations::By;

use crate::{domain::Booking, read};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of [`Booking`]s matching a [`Selector`], newest-first.
///
/// [`Selector`]: read::booking::list::Selector
pub type List = DatabaseQuery<By<Vec<Booking>, read::booking::list::Selector>>;

#[cfg(test)]
mod spec {
    use common::Date;

    use crate::{
        command::CreateBooking,
        domain::{booking, listing},
        read, testing, Command as _,
    };

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn book(service: &crate::Service<crate::infra::Json>, listing_id: i64) {
        _ = service
            .execute(CreateBooking {
                listing_id: listing::Id::from(listing_id),
                checkin: date("2020-01-01"),
                checkout: date("2020-01-04"),
                guests: 2,
            })
            .unwrap();
    }

    #[test]
    fn lists_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "user", "user123");

        book(&service, 1);
        book(&service, 2);

        let bookings = service
            .execute(super::List::by(
                read::booking::list::Selector::default(),
            ))
            .unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].listing_id, listing::Id::from(2));
        assert_eq!(bookings[1].listing_id, listing::Id::from(1));
    }

    #[test]
    fn filters_by_guest_and_caps_by_limit() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());

        testing::login(&service, "user", "user123");
        book(&service, 1);
        book(&service, 2);
        testing::login(&service, "admin", "admin123");
        book(&service, 3);

        let bookings = service
            .execute(super::List::by(read::booking::list::Selector {
                guest: Some("user".parse().unwrap()),
                ..read::booking::list::Selector::default()
            }))
            .unwrap();
        assert_eq!(bookings.len(), 2);

        let bookings = service
            .execute(super::List::by(read::booking::list::Selector {
                limit: Some(1),
                ..read::booking::list::Selector::default()
            }))
            .unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].listing_id, listing::Id::from(3));

        // Freshly created bookings are all active.
        let bookings = service
            .execute(super::List::by(read::booking::list::Selector {
                status: Some(booking::Status::Completed),
                ..read::booking::list::Selector::default()
            }))
            .unwrap();
        assert!(bookings.is_empty());
    }
}
