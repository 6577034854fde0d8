//! [`Query`] collection related to the [`Favorites`] set.

use common::operations::By;

use crate::domain::Favorites;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the whole [`Favorites`] set.
pub type Set = DatabaseQuery<By<Favorites, ()>>;
