//! Service contains the business logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

#[cfg(doc)]
use infra::Database;

pub use self::{command::Command, query::Query};

/// Domain service.
///
/// All collections live in the injected [`Database`]: the [`Service`] itself
/// is stateless, so isolated instances over isolated stores are cheap to
/// construct (notably in tests).
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// [`Database`] of this [`Service`].
    database: Db,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] on top of the provided [`Database`].
    pub fn new(database: Db) -> Self {
        Self { database }
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }
}

#[cfg(test)]
mod testing {
    //! Helpers shared by tests.

    use std::path::Path;

    use secrecy::SecretBox;

    use crate::{
        command,
        infra::{database::json, Json},
        Command as _, Service,
    };

    /// Opens a [`Service`] over a [`Json`] store in the provided directory.
    pub(crate) fn service(dir: &Path) -> Service<Json> {
        let database = Json::open(&json::Config {
            dir: dir.to_path_buf(),
        })
        .unwrap();
        Service::new(database)
    }

    /// Logs in with the provided credentials.
    pub(crate) fn login(service: &Service<Json>, login: &str, password: &str) {
        _ = service
            .execute(command::CreateUserSession {
                login: login.parse().unwrap(),
                password: SecretBox::new(Box::new(password.parse().unwrap())),
            })
            .unwrap();
    }
}
