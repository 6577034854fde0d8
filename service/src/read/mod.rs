//! Read entities definitions.

pub mod booking;
pub mod listing;
pub mod stats;

pub use self::stats::Stats;
