//! Back-office report and statistics [`Database`] implementations.

use std::collections::HashMap;

use common::{
    money::Currency,
    operations::{By, Select},
    Date, Money,
};
use tracerr::Traced;

use crate::{
    domain::listing,
    infra::{
        database::{self, json, Json},
        Database,
    },
    read::{listing::report, Stats},
};

impl Database<Select<By<Vec<report::Row>, report::Selector>>> for Json {
    type Ok = Vec<report::Row>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<report::Row>, report::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();

        let state = self.state();

        let mut counts: HashMap<listing::Id, usize> = HashMap::new();
        for b in &state.bookings {
            *counts.entry(b.listing_id).or_default() += 1;
        }

        Ok(state
            .listings
            .iter()
            .filter(|l| selector.matches(l))
            .map(|l| report::Row {
                bookings: counts.get(&l.id).copied().unwrap_or_default(),
                listing: l.clone(),
            })
            .collect())
    }
}

impl Database<Select<By<Stats, ()>>> for Json {
    type Ok = Stats;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        _: Select<By<Stats, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state();

        let mut revenue: Option<Money> = None;
        for b in &state.bookings {
            revenue = Some(match revenue {
                None => b.total_price,
                Some(sum) => {
                    sum.checked_add(b.total_price).ok_or_else(|| {
                        tracerr::new!(database::Error::from(
                            json::Error::MixedCurrencies,
                        ))
                    })?
                }
            });
        }

        let today = Date::today();
        Ok(Stats {
            total_listings: state.listings.len(),
            available_listings: state
                .listings
                .iter()
                .filter(|l| l.available)
                .count(),
            total_favorites: state.favorites.len(),
            total_bookings: state.bookings.len(),
            total_revenue: revenue.unwrap_or(Money::zero(Currency::Mad)),
            occupied_now: state
                .bookings
                .iter()
                .filter(|b| b.occupies(today))
                .count(),
        })
    }
}
