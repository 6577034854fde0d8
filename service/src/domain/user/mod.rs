//! User identity definitions.

pub mod session;

use std::str::FromStr;

use derive_more::{AsRef, Display, From};
use secrecy::{zeroize::Zeroize, CloneableSecret};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

pub use self::session::Session;

/// Fixed demo credential pairs this system authenticates against.
///
/// There is no real user directory: exactly these two accounts exist.
const CREDENTIALS: [(&str, &str, Role); 2] = [
    ("admin", "admin123", Role::Admin),
    ("user", "user123", Role::User),
];

/// Authenticates the provided credentials against the fixed demo pairs.
///
/// Both the [`Login`] and the [`Password`] are matched case-insensitively.
/// Returns the [`Role`] of the matched account, or [`None`] for any other
/// input.
#[must_use]
pub fn authenticate(login: &Login, password: &Password) -> Option<Role> {
    let login: &str = login.as_ref();
    let password = password.0.to_lowercase();
    CREDENTIALS.iter().find_map(|(known_login, known_password, role)| {
        (login == *known_login && password == *known_password)
            .then_some(*role)
    })
}

/// Login of a user.
///
/// Lowercased on construction, so logins compare case-insensitively.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Login(String);

impl Login {
    /// Creates a new [`Login`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `login` matches the format
    /// (including being lowercase).
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(login: impl Into<String>) -> Self {
        Self(login.into())
    }

    /// Creates a new [`Login`] if the given `login` is valid.
    #[must_use]
    pub fn new(login: impl Into<String>) -> Option<Self> {
        let login = login.into().to_lowercase();
        Self::check(&login).then_some(Self(login))
    }

    /// Checks whether the given `login` is a valid [`Login`].
    fn check(login: impl AsRef<str>) -> bool {
        let login = login.as_ref();
        !login.is_empty()
            && login.len() <= 64
            && !login.chars().any(char::is_whitespace)
    }
}

impl FromStr for Login {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Login`")
    }
}

impl TryFrom<String> for Login {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Login`")
    }
}

/// Password of a user.
#[derive(Clone, Debug, Eq, From, PartialEq)]
#[from(&str, String)]
pub struct Password(String);

impl Password {
    /// Creates a new [`Password`] if the given `password` is valid.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Option<Self> {
        let password = password.into();
        Self::check(&password).then_some(Self(password))
    }

    /// Checks whether the given `password` is a valid [`Password`].
    fn check(password: impl AsRef<str>) -> bool {
        let password = password.as_ref();
        password.len() > 1 && password.len() <= 128
    }
}

impl FromStr for Password {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Password`")
    }
}

impl CloneableSecret for Password {}
impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Role of an authenticated user.
///
/// The sole authorization axis of the system.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    EnumString,
    Eq,
    PartialEq,
    Serialize,
    StrumDisplay,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Administrator: may create, edit and delete listings.
    Admin,

    /// Regular user: may browse, favorite and book.
    User,
}

#[cfg(test)]
mod spec {
    use super::{authenticate, Login, Password, Role};

    #[test]
    fn authenticates_fixed_pairs() {
        let login = Login::new("admin").unwrap();
        let password = Password::new("admin123").unwrap();
        assert_eq!(authenticate(&login, &password), Some(Role::Admin));

        let login = Login::new("user").unwrap();
        let password = Password::new("user123").unwrap();
        assert_eq!(authenticate(&login, &password), Some(Role::User));
    }

    #[test]
    fn authenticates_case_insensitively() {
        let login = Login::new("ADMIN").unwrap();
        let password = Password::new("Admin123").unwrap();
        assert_eq!(authenticate(&login, &password), Some(Role::Admin));
    }

    #[test]
    fn rejects_unknown_credentials() {
        let login = Login::new("admin").unwrap();
        let password = Password::new("hunter2").unwrap();
        assert_eq!(authenticate(&login, &password), None);
    }
}
