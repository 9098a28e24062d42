//! Error types and handling for the `Stayfinder` application

use thiserror::Error;

/// Main error type for the `Stayfinder` application
///
/// Every variant the chat flow can produce is converted to a user-facing
/// string by [`StayfinderError::user_message`] before it reaches the HTTP
/// layer; nothing here becomes an HTTP error status.
#[derive(Error, Debug)]
pub enum StayfinderError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The chat message was empty or whitespace-only
    #[error("Empty chat message")]
    EmptyMessage,

    /// The message did not name a destination city
    #[error("No destination found in message")]
    MissingDestination,

    /// The message did not contain a date phrase
    #[error("No date phrase found in message")]
    MissingDates,

    /// The destination is not in the registry
    #[error("Unknown destination: {name}")]
    UnknownDestination {
        name: String,
        suggestions: Vec<String>,
    },

    /// The date phrase could not be parsed
    #[error("Invalid date expression")]
    InvalidDateExpression,

    /// Network/HTTP-level failure calling the search provider
    #[error("Provider transport failure: {message}")]
    ProviderTransport { message: String },

    /// JSON decode failure or unexpected provider response shape
    #[error("Provider response malformed: {message}")]
    ProviderResponse { message: String },

    /// A valid search where no offer passed the budget filter
    #[error("No offers under budget of {budget}")]
    NoOffersUnderBudget { budget: u32 },
}

impl StayfinderError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new provider transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::ProviderTransport {
            message: message.into(),
        }
    }

    /// Create a new provider response error
    pub fn response<S: Into<String>>(message: S) -> Self {
        Self::ProviderResponse {
            message: message.into(),
        }
    }

    /// Render this error as the user-facing chat reply
    ///
    /// Kept separate from the variants so the error taxonomy stays
    /// testable independent of wording.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            StayfinderError::Config { .. } => {
                "Configuration error. Please check your config file and API credentials."
                    .to_string()
            }
            StayfinderError::EmptyMessage => "Please say something!".to_string(),
            StayfinderError::MissingDestination => {
                "Please tell me the city (e.g., Mumbai, Delhi).".to_string()
            }
            StayfinderError::MissingDates => {
                "Please include dates like 'March 28-30'.".to_string()
            }
            StayfinderError::UnknownDestination { name, suggestions } => {
                format!(
                    "Sorry, I don't recognize '{}'. Try cities like {}... (and more!)",
                    name,
                    suggestions.join(", ")
                )
            }
            StayfinderError::InvalidDateExpression => {
                "Invalid date format. Use 'Month Day-Day' (e.g., 'March 28-30')".to_string()
            }
            StayfinderError::ProviderTransport { message } => {
                format!("API request failed: {message}")
            }
            StayfinderError::ProviderResponse { message } => {
                format!("Failed to parse API response: {message}")
            }
            StayfinderError::NoOffersUnderBudget { budget } => {
                format!("No hotels found under ₹{budget}/night")
            }
        }
    }
}
