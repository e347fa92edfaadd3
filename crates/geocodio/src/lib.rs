//! Geocodio API client
//!
//! Converts between postal addresses and geographic coordinates via the
//! [Geocodio](https://www.geocod.io) web service, and parses raw address
//! strings into structured components.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern: [`Geocoder`] defines the
//! interface for the three operations (geocode, reverse-geocode, parse),
//! implemented by [`GeocodioClient`]. A single input goes out as one GET
//! with the query in the URL; two or more inputs go out as one batch
//! POST carrying the ordered inputs as a JSON array, answered with one
//! [`AddressSet`] per input in input order. Coordinate inputs in either
//! string or key/value form are folded into one canonical
//! `"latitude,longitude"` string by [`CoordinateInput::normalize`]
//! before use.
//!
//! # Example
//!
//! ```rust,ignore
//! use geocodio::{GeocodioClient, GeocodioConfig, Geocoder};
//!
//! let config = GeocodioConfig::with_api_key("YOUR_API_KEY");
//! let client = GeocodioClient::new(&config)?;
//!
//! let sets = client
//!     .geocode(&["54 West Colorado Boulevard Pasadena CA 91105"])
//!     .await?;
//! if let Some(best) = sets[0].best() {
//!     println!("{:?}, {:?}", best.latitude, best.longitude);
//! }
//! ```

mod client;
mod config;
mod coordinates;
mod error;
mod models;
mod response;

pub use client::{Geocoder, GeocodioClient};
pub use config::{API_KEY_ENV, GeocodioConfig};
pub use coordinates::{Coordinate, CoordinateInput};
pub use error::GeocodioError;
pub use models::{Address, AddressSet};
