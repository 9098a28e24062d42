//! HTTP API: the chat endpoint
//!
//! `POST /chat` takes `{"message": ...}` and always answers 200 with
//! `{"response": ...}`; every failure in the pipeline is rendered to a
//! user-facing string inside the payload.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::SearchCriteria;
use crate::search::HotelSearchClient;
use crate::{Result, StayfinderError, dates, prompt, render};

/// Shared per-process state, injected into handlers
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<HotelSearchClient>,
    /// Budget assumed when the message names none, in INR
    pub default_budget: u32,
    /// Maximum offers rendered into one reply
    pub max_offers_shown: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .with_state(state)
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let message = request.message.trim();
    debug!("Chat message received: {:?}", message);

    let response = match answer(&state, message).await {
        Ok(reply) => reply,
        Err(error) => error.user_message(),
    };

    Json(ChatResponse { response })
}

/// Run the full pipeline: interpret, parse dates, search, render
async fn answer(state: &AppState, message: &str) -> Result<String> {
    if message.is_empty() {
        return Err(StayfinderError::EmptyMessage);
    }

    let interpretation = prompt::interpret(message, state.default_budget)?;
    let dates = dates::parse_date_phrase(&interpretation.date_phrase)?;

    let criteria = SearchCriteria {
        destination: interpretation.destination.clone(),
        dates,
        nightly_budget: interpretation.nightly_budget,
    };

    let offers = state.search.search(&criteria).await?;

    info!(
        "Replying with {} offer(s) for {}",
        offers.len().min(state.max_offers_shown),
        interpretation.destination
    );

    Ok(render::render_offers(
        &interpretation.destination,
        &interpretation.date_phrase,
        interpretation.nightly_budget,
        &offers,
        state.max_offers_shown,
    ))
}
