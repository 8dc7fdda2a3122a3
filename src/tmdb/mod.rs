//! TMDB client - the external movie data source.
//!
//! Movies that end up in the favorites collection originate here. The core
//! never refreshes a favorited movie's metadata, so cached attributes may
//! drift from the live source; that is accepted. Page-level fetching and
//! pagination UI live in the application, not in this crate; this module
//! is only the typed boundary to the HTTP API.

mod client;
mod types;

use std::fmt;

pub use client::{
    backdrop_url, poster_url, profile_url, BackdropSize, PosterSize, ProfileSize, TmdbClient,
    IMAGE_BASE_URL,
};
pub use types::{CastMember, Credits, Genre, MovieDetails, Page, Video};

/// Error type for TMDB requests.
#[derive(Debug)]
pub enum TmdbError {
    /// No API key was provided.
    MissingApiKey,
    /// Transport-level failure (connect, timeout, body decode).
    Http(reqwest::Error),
    /// The API answered with a non-success status.
    Api {
        status: u16,
        message: String,
        endpoint: String,
    },
}

impl fmt::Display for TmdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TmdbError::MissingApiKey => write!(f, "TMDB API key is required"),
            TmdbError::Http(e) => write!(f, "TMDB request failed: {}", e),
            TmdbError::Api {
                status,
                message,
                endpoint,
            } => write!(f, "TMDB {} returned {}: {}", endpoint, status, message),
        }
    }
}

impl std::error::Error for TmdbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TmdbError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TmdbError {
    fn from(e: reqwest::Error) -> Self {
        TmdbError::Http(e)
    }
}
