//! Calendar date utilities.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::DateTime;

/// Format of a [`Date`] string representation (`YYYY-MM-DD`).
const FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// Calendar date without a time-of-day.
///
/// Check-in and check-out boundaries are calendar dates: whenever a [`Date`]
/// is compared against "now", the time-of-day is stripped first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Returns the current [`Date`] in UTC.
    #[must_use]
    pub fn today() -> Self {
        DateTime::now().date()
    }

    /// Creates a new [`Date`] from the provided `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid `YYYY-MM-DD` date.
    pub fn from_iso8601(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, FORMAT).map(Self).map_err(ParseError)
    }

    /// Returns the number of whole days from this [`Date`] until the `later`
    /// one.
    ///
    /// Negative if the `later` [`Date`] is actually earlier.
    #[must_use]
    pub fn whole_days_until(self, later: Self) -> i64 {
        (later.0 - self.0).whole_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .format(FORMAT)
            .map_err(|_| fmt::Error)
            .and_then(|s| f.write_str(&s))
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso8601(s)
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Self(date)
    }
}

impl From<Date> for time::Date {
    fn from(date: Date) -> Self {
        date.0
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid `YYYY-MM-DD` date: {_0}")]
pub struct ParseError(time::error::Parse);

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    use super::Date;

    impl serde::Serialize for Date {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            Self::from_iso8601(&String::deserialize(deserializer)?)
                .map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Date;

    #[test]
    fn roundtrips_iso8601() {
        let date = Date::from_iso8601("2024-06-01").unwrap();
        assert_eq!(date.to_string(), "2024-06-01");
    }

    #[test]
    fn rejects_invalid() {
        assert!(Date::from_iso8601("2024-13-01").is_err());
        assert!(Date::from_iso8601("01/06/2024").is_err());
    }

    #[test]
    fn whole_days() {
        let checkin = Date::from_iso8601("2024-06-01").unwrap();
        let checkout = Date::from_iso8601("2024-06-04").unwrap();
        assert_eq!(checkin.whole_days_until(checkout), 3);
        assert_eq!(checkout.whole_days_until(checkin), -3);
    }

    #[test]
    fn orders_chronologically() {
        let earlier = Date::from_iso8601("2024-06-01").unwrap();
        let later = Date::from_iso8601("2024-06-02").unwrap();
        assert!(earlier < later);
    }
}
