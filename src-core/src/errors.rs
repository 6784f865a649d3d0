//! Error types shared across the core crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Market data error: {0}")]
    Market(#[from] MarketDataError),

    #[error("AI provider error: {0}")]
    Ai(#[from] AiError),

    #[error("Email error: {0}")]
    Email(#[from] EmailError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Query failed: {0}")]
    QueryFailed(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("Provider request failed for '{symbol}': {reason}")]
    ProviderError { symbol: String, reason: String },

    #[error("No price data for '{0}'")]
    NoData(String),
}

#[derive(Debug, Error)]
pub enum AiError {
    #[error("{provider} request failed: {reason}")]
    RequestFailed { provider: &'static str, reason: String },

    #[error("{provider} returned HTTP {status}: {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} response could not be parsed: {reason}")]
    MalformedResponse {
        provider: &'static str,
        reason: String,
    },

    #[error("API key for {0} is not configured")]
    MissingApiKey(&'static str),
}

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("SMTP transport is not configured")]
    NotConfigured,

    #[error("SMTP transport error: {0}")]
    Transport(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}

impl From<diesel::result::Error> for Error {
    fn from(e: diesel::result::Error) -> Self {
        Error::Database(DatabaseError::QueryFailed(e))
    }
}

impl From<r2d2::Error> for Error {
    fn from(e: r2d2::Error) -> Self {
        Error::Database(DatabaseError::Pool(e))
    }
}
