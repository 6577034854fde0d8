//! [`Listing`] definitions.

use std::{
    collections::BTreeSet,
    str::FromStr,
    sync::atomic::{AtomicI64, Ordering},
};

use common::{DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

/// Rentable property listing.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// [`Location`] of this [`Listing`].
    pub location: Location,

    /// Price of this [`Listing`] per night.
    pub price: Money,

    /// [`Kind`] of this [`Listing`].
    #[serde(rename = "type")]
    pub kind: Kind,

    /// Number of bedrooms in this [`Listing`].
    pub bedrooms: NumBedrooms,

    /// Number of bathrooms in this [`Listing`].
    ///
    /// May be fractional (a half-bathroom counts as `0.5`).
    pub bathrooms: NumBathrooms,

    /// Maximum number of guests this [`Listing`] accommodates.
    pub max_guests: NumGuests,

    /// [`Description`] of this [`Listing`] (may be empty).
    pub description: Description,

    /// [`ImageUrl`] of this [`Listing`].
    pub image: ImageUrl,

    /// [`Amenity`]s of this [`Listing`].
    pub amenities: BTreeSet<Amenity>,

    /// Indicator whether this [`Listing`] is available for booking.
    pub available: bool,

    /// Indicator whether this [`Listing`] is featured.
    ///
    /// Assigned once when the [`Listing`] is created and preserved verbatim
    /// on every subsequent edit.
    pub featured: bool,
}

/// Default number of bedrooms in a [`Listing`].
pub const DEFAULT_NUM_BEDROOMS: NumBedrooms = 1;

/// Default number of bathrooms in a [`Listing`].
pub const DEFAULT_NUM_BATHROOMS: NumBathrooms = Decimal::ONE;

/// Default maximum number of guests in a [`Listing`].
pub const DEFAULT_MAX_GUESTS: NumGuests = 2;

/// ID of a [`Listing`].
///
/// Derived from the creation time (Unix epoch milliseconds), so IDs grow
/// monotonically and are never reused once assigned. The store backstops
/// uniqueness on insertion.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    derive_more::FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(i64);

impl Id {
    /// Creates a new time-derived [`Id`].
    ///
    /// Strictly monotonic within the process, so back-to-back creations in
    /// the same millisecond never collide.
    #[must_use]
    pub fn new() -> Self {
        static LAST: AtomicI64 = AtomicI64::new(0);

        let now = DateTime::now().unix_timestamp_millis();
        let prev = LAST
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        Self(now.max(prev + 1))
    }
}

/// Title of a [`Listing`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 512
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

impl TryFrom<String> for Title {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Location of a [`Listing`].
///
/// Doubles as a free-text search field and as an exact-match filter key.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Location(String);

impl Location {
    /// Creates a new [`Location`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `location` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    /// Creates a new [`Location`] if the given `location` is valid.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Option<Self> {
        let location = location.into();
        Self::check(&location).then_some(Self(location))
    }

    /// Checks whether the given `location` is a valid [`Location`].
    fn check(location: impl AsRef<str>) -> bool {
        let location = location.as_ref();
        location.trim() == location
            && !location.is_empty()
            && location.len() <= 512
    }
}

impl FromStr for Location {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Location`")
    }
}

impl TryFrom<String> for Location {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Location`")
    }
}

/// Description of a [`Listing`].
///
/// May be empty.
#[derive(
    AsRef,
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `description` matches the
    /// format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// Creates a new [`Description`] if the given `description` is valid.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        Self::check(&description).then_some(Self(description))
    }

    /// Checks whether the given `description` is a valid [`Description`].
    fn check(description: impl AsRef<str>) -> bool {
        let description = description.as_ref();
        description.trim() == description && description.len() <= 4096
    }

    /// Indicates whether this [`Description`] is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

impl TryFrom<String> for Description {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

/// Image URL of a [`Listing`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Placeholder image shown for [`Listing`]s without one.
    pub const PLACEHOLDER: &'static str =
        "https://via.placeholder.com/400x250/8b5cf6/ffffff?text=No+Image";

    /// Creates a new [`ImageUrl`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `url` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Creates a new [`ImageUrl`] if the given `url` is valid.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        Self::check(&url).then_some(Self(url))
    }

    /// Creates a new placeholder [`ImageUrl`].
    #[must_use]
    pub fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.into())
    }

    /// Checks whether the given `url` is a valid [`ImageUrl`].
    fn check(url: impl AsRef<str>) -> bool {
        let url = url.as_ref();
        url.trim() == url && !url.is_empty() && url.len() <= 2048
    }
}

impl FromStr for ImageUrl {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `ImageUrl`")
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `ImageUrl`")
    }
}

/// Kind of a [`Listing`].
///
/// Open-ended: kinds outside the known set are tolerated and carried
/// verbatim.
#[derive(
    Clone,
    Debug,
    Deserialize,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    StrumDisplay,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    /// An apartment in a building.
    Apartment,

    /// A whole house.
    House,

    /// A single-room studio.
    Studio,

    /// A standalone villa.
    Villa,

    /// A kind outside the known set.
    #[strum(default)]
    Other(String),
}

impl From<String> for Kind {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Self::Other(s))
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        kind.to_string()
    }
}

/// Amenity of a [`Listing`].
///
/// The vocabulary is fixed, but unknown values are tolerated and carried
/// verbatim.
#[derive(
    Clone,
    Debug,
    Deserialize,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    StrumDisplay,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Amenity {
    /// Wireless internet access.
    Wifi,

    /// Parking spot.
    Parking,

    /// Swimming pool.
    Pool,

    /// Equipped kitchen.
    Kitchen,

    /// Air conditioning.
    Ac,

    /// Heating.
    Heating,

    /// Television.
    Tv,

    /// Washing machine.
    Washer,

    /// Balcony.
    Balcony,

    /// Gym.
    Gym,

    /// An amenity outside the known vocabulary.
    #[strum(default)]
    Other(String),
}

impl From<String> for Amenity {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Self::Other(s))
    }
}

impl From<Amenity> for String {
    fn from(amenity: Amenity) -> Self {
        amenity.to_string()
    }
}

/// Number of bedrooms in a [`Listing`].
pub type NumBedrooms = u16;

/// Number of bathrooms in a [`Listing`].
pub type NumBathrooms = Decimal;

/// Number of guests in a [`Listing`] or a booking.
pub type NumGuests = u16;

#[cfg(test)]
mod spec {
    use super::{Amenity, Id, Kind, Title};

    #[test]
    fn id_and_title_parse_from_str() {
        assert_eq!("5".parse::<Id>().unwrap(), Id::from(5));
        assert!("nope".parse::<Id>().is_err());

        assert_eq!(
            "Atlas Retreat".parse::<Title>().unwrap().to_string(),
            "Atlas Retreat",
        );
        assert!("   ".parse::<Title>().is_err());
    }

    #[test]
    fn kind_roundtrips_known_and_unknown() {
        assert_eq!("villa".parse::<Kind>().unwrap(), Kind::Villa);
        assert_eq!(Kind::Villa.to_string(), "villa");

        let unknown = "yurt".parse::<Kind>().unwrap();
        assert_eq!(unknown, Kind::Other("yurt".into()));
        assert_eq!(unknown.to_string(), "yurt");
    }

    #[test]
    fn amenity_roundtrips_known_and_unknown() {
        assert_eq!("wifi".parse::<Amenity>().unwrap(), Amenity::Wifi);
        assert_eq!(Amenity::Ac.to_string(), "ac");

        let unknown = "sauna".parse::<Amenity>().unwrap();
        assert_eq!(unknown, Amenity::Other("sauna".into()));
        assert_eq!(unknown.to_string(), "sauna");
    }
}
