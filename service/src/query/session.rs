//! [`Query`] collection related to the [`Session`].

use common::operations::By;

use crate::domain::Session;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the current [`Session`], if any.
pub type Current = DatabaseQuery<By<Option<Session>, ()>>;
