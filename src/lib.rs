//! `Stayfinder` - conversational hotel search assistant
//!
//! This library turns a free-text travel request ("hotels in Mumbai for
//! March 28-30 under ₹5000") into a filtered list of hotel offers from the
//! Booking.com search provider, rendered as an HTML chat reply.

pub mod api;
pub mod config;
pub mod dates;
pub mod destinations;
pub mod error;
pub mod models;
pub mod prompt;
pub mod render;
pub mod search;
pub mod web;

// Re-export core types for public API
pub use config::StayfinderConfig;
pub use error::StayfinderError;
pub use models::{DateRange, HotelOffer, SearchCriteria};
pub use prompt::Interpretation;
pub use search::HotelSearchClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, StayfinderError>;
