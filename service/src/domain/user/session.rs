//! [`Session`] definitions.

use serde::{Deserialize, Serialize};

use crate::domain::user::{Login, Role};

/// Currently authenticated identity.
///
/// At most one exists at a time: a successful login replaces any prior
/// [`Session`], a logout clears it. There is no expiry, token or multi-session
/// support.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Session {
    /// [`Login`] this [`Session`] belongs to.
    #[serde(rename = "username")]
    pub login: Login,

    /// [`Role`] of the authenticated user.
    pub role: Role,
}

impl Session {
    /// Indicates whether this [`Session`] belongs to an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
