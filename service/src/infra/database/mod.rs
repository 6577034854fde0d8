//! [`Database`]-related implementations.

pub mod json;

use derive_more::{Display, Error as StdError, From};

pub use self::json::Json;

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Json`] store error.
    Json(json::Error),
}
