//! [`Booking`]-related [`Database`] implementations.

use std::cmp;

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::Booking,
    infra::{
        database::{self, json, Json},
        Database,
    },
    read,
};

impl Database<Insert<Booking>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Insert(booking): Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state_mut();
        if state.bookings.iter().any(|b| b.id == booking.id) {
            return Err(tracerr::new!(database::Error::from(
                json::Error::DuplicateId(booking.id.into()),
            )));
        }
        state.bookings.push(booking);
        self.persist_bookings(&state)
    }
}

impl Database<Select<By<Vec<Booking>, read::booking::list::Selector>>>
    for Json
{
    type Ok = Vec<Booking>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Booking>, read::booking::list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();

        let mut bookings: Vec<Booking> = self
            .state()
            .bookings
            .iter()
            .filter(|b| selector.matches(b))
            .cloned()
            .collect();
        bookings.sort_by_key(|b| cmp::Reverse(b.booked_at));
        if let Some(limit) = selector.limit {
            bookings.truncate(limit);
        }
        Ok(bookings)
    }
}
