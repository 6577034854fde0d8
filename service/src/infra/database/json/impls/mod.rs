//! [`Database`] implementations.

mod booking;
mod favorites;
mod listing;
mod report;
mod session;

#[cfg(doc)]
use crate::infra::Database;
