//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use common::{Date, Money};
use service::{
    domain::{listing, user},
    read,
};

/// CLI of the rental marketplace demo.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Action to perform.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Logs in with the provided credentials.
    Login {
        /// Login of the account.
        login: user::Login,

        /// Password of the account.
        password: user::Password,
    },

    /// Logs the current session out.
    Logout,

    /// Prints the currently authenticated identity.
    Whoami,

    /// Lists listings, optionally filtered.
    Listings {
        /// Free text to search titles, locations and descriptions for.
        #[arg(long)]
        text: Option<String>,

        /// Exact kind to match (`apartment`, `house`, `studio`, `villa`).
        #[arg(long)]
        kind: Option<listing::Kind>,

        /// Exact location to match.
        #[arg(long)]
        location: Option<listing::Location>,

        /// Inclusive upper bound on the per-night price (e.g. `2000MAD`).
        #[arg(long)]
        max_price: Option<Money>,

        /// Excludes unavailable listings.
        #[arg(long)]
        available: bool,
    },

    /// Prints a single listing in detail.
    Listing {
        /// ID of the listing.
        id: listing::Id,
    },

    /// Toggles a listing in the favorites set.
    Favorite {
        /// ID of the listing.
        id: listing::Id,
    },

    /// Lists the favorited listings.
    Favorites,

    /// Books a listing for a date range.
    Book {
        /// ID of the listing to book.
        id: listing::Id,

        /// Check-in date (`YYYY-MM-DD`).
        #[arg(long)]
        checkin: Date,

        /// Check-out date (`YYYY-MM-DD`).
        #[arg(long)]
        checkout: Date,

        /// Number of guests.
        #[arg(long)]
        guests: listing::NumGuests,
    },

    /// Lists the current user's bookings, newest-first.
    Bookings {
        /// Lists the most recent bookings of all users instead
        /// (administrators only).
        #[arg(long)]
        all: bool,
    },

    /// Creates a new listing (administrators only).
    AddListing(ListingFields),

    /// Replaces an existing listing (administrators only).
    ///
    /// The ID and the featured mark are preserved.
    UpdateListing {
        /// ID of the listing to update.
        id: listing::Id,

        /// New fields of the listing.
        #[command(flatten)]
        fields: ListingFields,
    },

    /// Deletes a listing (administrators only).
    DeleteListing {
        /// ID of the listing to delete.
        id: listing::Id,
    },

    /// Prints aggregated statistics (administrators only).
    Stats,

    /// Prints the listing report with booking counts (administrators only).
    Report {
        /// Free text to search titles, locations and descriptions for.
        #[arg(long)]
        text: Option<String>,

        /// Availability of the listing itself (`available`, `unavailable`).
        #[arg(long)]
        availability: Option<read::listing::report::Availability>,

        /// Exact kind to match.
        #[arg(long)]
        kind: Option<listing::Kind>,
    },
}

/// Fields of a created or replaced listing.
#[derive(Debug, clap::Args)]
pub struct ListingFields {
    /// Title of the listing.
    #[arg(long)]
    pub title: listing::Title,

    /// Location of the listing.
    #[arg(long)]
    pub location: listing::Location,

    /// Per-night price of the listing (e.g. `1200MAD`).
    #[arg(long)]
    pub price: Money,

    /// Kind of the listing.
    #[arg(long)]
    pub kind: listing::Kind,

    /// Number of bedrooms (defaults to 1).
    #[arg(long)]
    pub bedrooms: Option<listing::NumBedrooms>,

    /// Number of bathrooms, possibly fractional (defaults to 1).
    #[arg(long)]
    pub bathrooms: Option<listing::NumBathrooms>,

    /// Maximum number of guests (defaults to 2).
    #[arg(long)]
    pub max_guests: Option<listing::NumGuests>,

    /// Description of the listing.
    #[arg(long)]
    pub description: Option<listing::Description>,

    /// Image URL of the listing (defaults to a placeholder).
    #[arg(long)]
    pub image: Option<listing::ImageUrl>,

    /// Comma-separated amenities (e.g. `wifi,parking,pool`).
    #[arg(long, value_delimiter = ',')]
    pub amenities: Vec<listing::Amenity>,

    /// Marks the listing as unavailable for booking.
    #[arg(long)]
    pub unavailable: bool,
}
