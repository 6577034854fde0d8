//! Demo [`Listing`]s seeded into an empty store.

use common::{money::Currency, Money};
use rust_decimal::Decimal;

use crate::domain::{
    listing::{Amenity, Kind},
    Listing,
};

/// Returns the fixed demo set of [`Listing`]s.
///
/// Spans all known [`Kind`]s and a variety of [`Amenity`] combinations; one
/// of the six is unavailable.
pub(super) fn listings() -> Vec<Listing> {
    use Amenity::{
        Ac, Balcony, Gym, Heating, Kitchen, Parking, Pool, Tv, Washer, Wifi,
    };

    vec![
        listing(Seed {
            id: 1,
            title: "Luxury Apartment in Casablanca",
            location: "Casablanca",
            price: 1200,
            kind: Kind::Apartment,
            bedrooms: 2,
            bathrooms: 2,
            max_guests: 4,
            description: "A stunning modern apartment overlooking the Hassan \
                          II Mosque, perfect for business travelers. Features \
                          floor-to-ceiling windows, fully equipped kitchen, \
                          and high-speed WiFi.",
            amenities: &[Wifi, Parking, Ac, Kitchen, Tv],
            available: true,
            featured: true,
            image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        }),
        listing(Seed {
            id: 2,
            title: "Traditional Riad in Marrakech",
            location: "Marrakech",
            price: 2500,
            kind: Kind::House,
            bedrooms: 3,
            bathrooms: 2,
            max_guests: 6,
            description: "Authentic Moroccan riad in the Medina with a \
                          beautiful courtyard garden and traditional \
                          architecture. Experience true Moroccan hospitality \
                          in this restored 18th-century property.",
            amenities: &[Wifi, Kitchen, Ac, Balcony, Pool],
            available: true,
            featured: false,
            image: "https://images.unsplash.com/photo-1539650116574-75c0c6d0b7ef?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        }),
        listing(Seed {
            id: 3,
            title: "Beachfront Studio in Agadir",
            location: "Agadir",
            price: 1800,
            kind: Kind::Studio,
            bedrooms: 0,
            bathrooms: 1,
            max_guests: 2,
            description: "Charming studio apartment right by the beach with \
                          ocean views and modern amenities. Perfect for \
                          couples seeking a romantic getaway.",
            amenities: &[Wifi, Ac, Tv, Balcony],
            available: false,
            featured: true,
            image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        }),
        listing(Seed {
            id: 4,
            title: "Historic House in Fes",
            location: "Fes",
            price: 1500,
            kind: Kind::House,
            bedrooms: 4,
            bathrooms: 3,
            max_guests: 8,
            description: "Beautiful historic house in the Fes Medina, \
                          blending traditional Moroccan design with modern \
                          comfort. Spacious rooms with authentic tile work \
                          and modern facilities.",
            amenities: &[Wifi, Kitchen, Ac, Heating, Tv, Parking],
            available: true,
            featured: false,
            image: "https://images.unsplash.com/photo-1551632811-561732d1e306?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        }),
        listing(Seed {
            id: 5,
            title: "Modern Villa in Rabat",
            location: "Rabat",
            price: 3000,
            kind: Kind::Villa,
            bedrooms: 5,
            bathrooms: 4,
            max_guests: 10,
            description: "Spacious contemporary villa near the Royal Palace \
                          with stunning gardens and city views. Perfect for \
                          large families or groups. Features private pool and \
                          modern amenities.",
            amenities: &[Wifi, Parking, Pool, Kitchen, Ac, Tv, Washer, Gym,
                Balcony],
            available: true,
            featured: true,
            image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        }),
        listing(Seed {
            id: 6,
            title: "Coastal Apartment in Tangier",
            location: "Tangier",
            price: 2200,
            kind: Kind::Apartment,
            bedrooms: 2,
            bathrooms: 2,
            max_guests: 4,
            description: "Beautiful coastal apartment with stunning views of \
                          the Mediterranean Sea and the Strait of Gibraltar. \
                          Modern design with panoramic windows and beach \
                          access nearby.",
            amenities: &[Wifi, Parking, Ac, Kitchen, Tv, Balcony],
            available: true,
            featured: false,
            image: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        }),
    ]
}

/// Literal fields of a demo [`Listing`].
struct Seed {
    id: i64,
    title: &'static str,
    location: &'static str,
    price: u32,
    kind: Kind,
    bedrooms: u16,
    bathrooms: u16,
    max_guests: u16,
    description: &'static str,
    amenities: &'static [Amenity],
    available: bool,
    featured: bool,
    image: &'static str,
}

/// Builds a demo [`Listing`] out of its literal fields.
#[expect(unsafe_code, reason = "statically known-valid demo data")]
fn listing(seed: Seed) -> Listing {
    use crate::domain::listing::{
        Description, Id, ImageUrl, Location, Title,
    };

    // SAFETY: All the literals above are statically known to be valid.
    unsafe {
        Listing {
            id: Id::from(seed.id),
            title: Title::new_unchecked(seed.title),
            location: Location::new_unchecked(seed.location),
            price: Money {
                amount: Decimal::from(seed.price),
                currency: Currency::Mad,
            },
            kind: seed.kind,
            bedrooms: seed.bedrooms,
            bathrooms: Decimal::from(seed.bathrooms),
            max_guests: seed.max_guests,
            description: Description::new_unchecked(seed.description),
            image: ImageUrl::new_unchecked(seed.image),
            amenities: seed.amenities.iter().cloned().collect(),
            available: seed.available,
            featured: seed.featured,
        }
    }
}
