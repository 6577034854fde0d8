//! Execution of CLI commands against the [`Service`].

use std::fmt::Write as _;

use secrecy::SecretBox;
use service::{
    command::{
        CreateBooking, CreateListing, CreateUserSession, DeleteListing,
        DeleteUserSession, ToggleFavorite, UpdateListing,
    },
    domain::{Booking, Listing},
    query, read, Command as _,
};
use tracing as log;

use crate::{
    args::{Command, ListingFields},
    Error, Service,
};

/// Number of [`Booking`]s shown by the all-users `bookings` view.
const RECENT_BOOKINGS_LIMIT: usize = 10;

/// Executes the provided [`Command`] and renders its output.
///
/// # Errors
///
/// Errors if the underlying [`Service`] operation refuses or fails.
#[expect(clippy::too_many_lines, reason = "plain dispatch")]
pub fn run(service: &Service, command: Command) -> Result<String, Error> {
    match command {
        Command::Login { login, password } => {
            let session = service.execute(CreateUserSession {
                login,
                password: SecretBox::new(Box::new(password)),
            })?;
            log::info!(login = %session.login, "logged in");
            Ok(format!(
                "logged in as {} ({})",
                session.login, session.role,
            ))
        }

        Command::Logout => {
            service.execute(DeleteUserSession)?;
            Ok("logged out".into())
        }

        Command::Whoami => {
            let current = service.execute(query::session::Current::by(()))?;
            Ok(current.map_or_else(
                || "not logged in".into(),
                |s| format!("{} ({})", s.login, s.role),
            ))
        }

        Command::Listings {
            text,
            kind,
            location,
            max_price,
            available,
        } => {
            let listings = service.execute(query::listings::List::by(
                read::listing::list::Filter {
                    text,
                    kind,
                    location,
                    max_price,
                    available_only: available,
                },
            ))?;
            if listings.is_empty() {
                return Ok("no listings found".into());
            }
            Ok(listings.iter().map(listing_line).collect::<Vec<_>>().join("\n"))
        }

        Command::Listing { id } => {
            let listing = service
                .execute(query::listing::ById::by(id))?
                .ok_or(Error::ListingNotFound(id))?;
            Ok(listing_details(&listing))
        }

        Command::Favorite { id } => {
            let toggled = service.execute(ToggleFavorite { id })?;
            Ok(toggled.to_string())
        }

        Command::Favorites => {
            let favorites = service.execute(query::favorites::Set::by(()))?;
            if favorites.is_empty() {
                return Ok("no favorites yet".into());
            }
            let mut out = Vec::with_capacity(favorites.len());
            for id in favorites.iter() {
                if let Some(listing) =
                    service.execute(query::listing::ById::by(id))?
                {
                    out.push(listing_line(&listing));
                }
            }
            Ok(out.join("\n"))
        }

        Command::Book {
            id,
            checkin,
            checkout,
            guests,
        } => {
            let booking = service.execute(CreateBooking {
                listing_id: id,
                checkin,
                checkout,
                guests,
            })?;
            log::info!(id = %booking.id, "booking created");
            Ok(format!(
                "booked {} ({}): {} nights, total {}",
                booking.listing_title,
                booking.listing_location,
                booking.nights,
                booking.total_price,
            ))
        }

        Command::Bookings { all } => {
            let session = service.require_session()?;
            let selector = if all {
                _ = service.require_admin()?;
                read::booking::list::Selector {
                    limit: Some(RECENT_BOOKINGS_LIMIT),
                    ..read::booking::list::Selector::default()
                }
            } else {
                read::booking::list::Selector {
                    guest: Some(session.login),
                    ..read::booking::list::Selector::default()
                }
            };
            let bookings =
                service.execute(query::bookings::List::by(selector))?;
            if bookings.is_empty() {
                return Ok("no bookings yet".into());
            }
            Ok(bookings.iter().map(booking_line).collect::<Vec<_>>().join("\n"))
        }

        Command::AddListing(fields) => {
            let ListingFields {
                title,
                location,
                price,
                kind,
                bedrooms,
                bathrooms,
                max_guests,
                description,
                image,
                amenities,
                unavailable,
            } = fields;
            let listing = service.execute(CreateListing {
                title,
                location,
                price,
                kind,
                bedrooms,
                bathrooms,
                max_guests,
                description,
                image,
                amenities: amenities.into_iter().collect(),
                available: !unavailable,
            })?;
            log::info!(id = %listing.id, "listing created");
            Ok(listing_details(&listing))
        }

        Command::UpdateListing { id, fields } => {
            let ListingFields {
                title,
                location,
                price,
                kind,
                bedrooms,
                bathrooms,
                max_guests,
                description,
                image,
                amenities,
                unavailable,
            } = fields;
            let listing = service.execute(UpdateListing {
                id,
                title,
                location,
                price,
                kind,
                bedrooms,
                bathrooms,
                max_guests,
                description,
                image,
                amenities: amenities.into_iter().collect(),
                available: !unavailable,
            })?;
            log::info!(id = %listing.id, "listing updated");
            Ok(listing_details(&listing))
        }

        Command::DeleteListing { id } => {
            let deleted = service.execute(DeleteListing { id })?;
            log::info!(id = %deleted.id, "listing deleted");
            Ok(format!("deleted {} ({})", deleted.title, deleted.id))
        }

        Command::Stats => {
            _ = service.require_admin()?;
            let stats = service.execute(query::report::Stats::by(()))?;
            Ok(format!(
                "listings: {} ({} available)\n\
                 favorites: {}\n\
                 bookings: {} ({} currently occupying)\n\
                 revenue: {}",
                stats.total_listings,
                stats.available_listings,
                stats.total_favorites,
                stats.total_bookings,
                stats.occupied_now,
                stats.total_revenue,
            ))
        }

        Command::Report {
            text,
            availability,
            kind,
        } => {
            _ = service.require_admin()?;
            let rows = service.execute(query::report::Listings::by(
                read::listing::report::Selector {
                    text,
                    availability,
                    kind,
                },
            ))?;
            if rows.is_empty() {
                return Ok("no listings found".into());
            }
            Ok(rows
                .iter()
                .map(|row| {
                    format!(
                        "{}, {} bookings",
                        listing_line(&row.listing),
                        row.bookings,
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

/// Renders a one-line summary of the provided [`Listing`].
fn listing_line(listing: &Listing) -> String {
    let mut line = format!(
        "{}  {} ({}) [{}] {}/night",
        listing.id, listing.title, listing.location, listing.kind,
        listing.price,
    );
    if !listing.available {
        line.push_str(", unavailable");
    }
    if listing.featured {
        line.push_str(", featured");
    }
    line
}

/// Renders the detailed view of the provided [`Listing`].
fn listing_details(listing: &Listing) -> String {
    let mut out = format!(
        "{} ({})\n\
         id: {}\n\
         kind: {}\n\
         price: {}/night\n\
         bedrooms: {}, bathrooms: {}, up to {} guests",
        listing.title,
        listing.location,
        listing.id,
        listing.kind,
        listing.price,
        listing.bedrooms,
        listing.bathrooms,
        listing.max_guests,
    );
    if !listing.amenities.is_empty() {
        let amenities = listing
            .amenities
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        _ = write!(out, "\namenities: {amenities}");
    }
    if !listing.description.is_empty() {
        _ = write!(out, "\n{}", listing.description);
    }
    _ = write!(
        out,
        "\n{}{}",
        if listing.available { "available" } else { "unavailable" },
        if listing.featured { ", featured" } else { "" },
    );
    out
}

/// Renders a one-line summary of the provided [`Booking`].
fn booking_line(booking: &Booking) -> String {
    format!(
        "{}  {} ({}) {} to {}, {} guests, total {} [{}] by {}",
        booking.id,
        booking.listing_title,
        booking.listing_location,
        booking.checkin,
        booking.checkout,
        booking.guests,
        booking.total_price,
        booking.status,
        booking.guest_name,
    )
}
