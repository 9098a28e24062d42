//! Hotel search client for the Booking.com RapidAPI provider
//!
//! Issues a single GET per search with no retry; resilience policy is
//! limited to the transport timeout configured on the underlying client.
//! Any transport failure, non-success status, or unexpected response shape
//! becomes a typed error, never a panic.

use crate::config::ProviderConfig;
use crate::models::{HotelOffer, SearchCriteria};
use crate::{Result, StayfinderError, destinations};
use anyhow::Context;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Photo URL substituted when the provider returns none
const PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/300x150?text=No+Image";

/// Marker the provider embeds in `accessibilityLabel` for refundable rates
const FREE_CANCELLATION_MARKER: &str = "Free cancellation";

/// Client for the external hotel search provider
pub struct HotelSearchClient {
    client: Client,
    config: ProviderConfig,
}

impl HotelSearchClient {
    /// Create a new search client from provider configuration
    pub fn new(config: ProviderConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("stayfinder/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Search for hotels matching the criteria
    ///
    /// Resolves the destination against the registry, queries the provider
    /// for the date range, and returns the offers whose price per night is
    /// within the budget. An empty filtered result is an error carrying the
    /// attempted budget, so the endpoint can echo it back.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<HotelOffer>> {
        let city = destinations::resolve(&criteria.destination).ok_or_else(|| {
            StayfinderError::UnknownDestination {
                name: criteria.destination.clone(),
                suggestions: destinations::sample_names(5),
            }
        })?;

        let nights = criteria.dates.nights();
        if nights <= 0 {
            return Err(StayfinderError::InvalidDateExpression);
        }

        info!(
            "Searching hotels in {} ({} nights, budget ₹{}/night)",
            city.name, nights, criteria.nightly_budget
        );

        let payload = self.fetch(city.dest_id, criteria).await?;

        let hotels = payload
            .data
            .and_then(|data| data.hotels)
            .ok_or_else(|| StayfinderError::response("missing data.hotels in response"))?;

        let offers = offers_within_budget(&hotels, nights, criteria.nightly_budget);

        info!(
            "{} of {} hotels within ₹{}/night",
            offers.len(),
            hotels.len(),
            criteria.nightly_budget
        );

        if offers.is_empty() {
            return Err(StayfinderError::NoOffersUnderBudget {
                budget: criteria.nightly_budget,
            });
        }

        Ok(offers)
    }

    /// Issue the provider GET and decode the response body
    async fn fetch(
        &self,
        dest_id: &str,
        criteria: &SearchCriteria,
    ) -> Result<booking::SearchResponse> {
        let url = format!("{}/api/v1/hotels/searchHotels", self.config.base_url);
        let arrival = criteria.dates.check_in.to_string();
        let departure = criteria.dates.check_out.to_string();

        // Fixed occupancy and locale: 1 adult, 1 room, INR, en-us
        let params = [
            ("dest_id", dest_id),
            ("search_type", "CITY"),
            ("arrival_date", arrival.as_str()),
            ("departure_date", departure.as_str()),
            ("adults", "1"),
            ("children_age", "0,17"),
            ("room_qty", "1"),
            ("page_number", "1"),
            ("units", "metric"),
            ("temperature_unit", "c"),
            ("languagecode", "en-us"),
            ("currency_code", "INR"),
            ("location", "IN"),
        ];

        debug!(
            "Provider request: dest_id={} arrival={} departure={}",
            dest_id, arrival, departure
        );

        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-key", &self.config.api_key)
            .header("x-rapidapi-host", &self.config.api_host)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                warn!("Provider request failed: {}", e);
                StayfinderError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Provider returned HTTP {}", status);
            return Err(StayfinderError::transport(format!(
                "provider returned HTTP {status}"
            )));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to decode provider response: {}", e);
            StayfinderError::response(e.to_string())
        })
    }
}

/// Transform provider records into offers, keeping only those whose price
/// per night is within the budget
fn offers_within_budget(
    hotels: &[booking::HotelRecord],
    nights: i64,
    nightly_budget: u32,
) -> Vec<HotelOffer> {
    let mut offers = Vec::new();

    for record in hotels {
        let gross = record.property.price_breakdown.gross_price.value;
        // Filter on the unrounded value; round only for display
        let price_per_night = gross / nights as f64;
        if price_per_night <= f64::from(nightly_budget) {
            offers.push(offer_from_record(record, nights));
        }
    }

    offers
}

fn offer_from_record(record: &booking::HotelRecord, nights: i64) -> HotelOffer {
    let property = &record.property;
    let total = property.price_breakdown.gross_price.value;

    HotelOffer {
        name: property.name.clone(),
        stars: property.property_class,
        price_per_night: round2(total / nights as f64),
        total_price: total,
        taxes: property.price_breakdown.excluded_price.value,
        review_score: property.review_score,
        review_word: property.review_score_word.clone(),
        review_count: property.review_count,
        photo_url: property
            .photo_urls
            .first()
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_PHOTO.to_string()),
        free_cancellation: record
            .accessibility_label
            .contains(FREE_CANCELLATION_MARKER),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Booking.com search response structures
mod booking {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        pub data: Option<SearchData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct SearchData {
        pub hotels: Option<Vec<HotelRecord>>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct HotelRecord {
        pub property: Property,
        #[serde(default)]
        pub accessibility_label: String,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Property {
        pub name: String,
        #[serde(default)]
        pub property_class: u8,
        pub price_breakdown: PriceBreakdown,
        #[serde(default)]
        pub review_score: f64,
        #[serde(default)]
        pub review_score_word: String,
        #[serde(default)]
        pub review_count: u32,
        #[serde(default)]
        pub photo_urls: Vec<String>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PriceBreakdown {
        pub gross_price: Money,
        #[serde(default)]
        pub excluded_price: Money,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct Money {
        #[serde(default)]
        pub value: f64,
    }
}
