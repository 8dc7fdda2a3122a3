//! TmdbClient - typed HTTP access to the TMDB v3 API.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::types::{Credits, Genre, GenreList, MovieDetails, Page, Video, VideoList};
use super::TmdbError;
use crate::movie::Movie;

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// Base URL for poster/backdrop image paths.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Poster sizes the image CDN serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PosterSize {
    W92,
    W154,
    W185,
    W342,
    W500,
    W780,
    Original,
}

impl PosterSize {
    fn as_str(self) -> &'static str {
        match self {
            PosterSize::W92 => "w92",
            PosterSize::W154 => "w154",
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

/// Backdrop sizes the image CDN serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackdropSize {
    W300,
    W780,
    W1280,
    Original,
}

impl BackdropSize {
    fn as_str(self) -> &'static str {
        match self {
            BackdropSize::W300 => "w300",
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

/// Cast profile sizes the image CDN serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileSize {
    W45,
    W185,
    H632,
    Original,
}

impl ProfileSize {
    fn as_str(self) -> &'static str {
        match self {
            ProfileSize::W45 => "w45",
            ProfileSize::W185 => "w185",
            ProfileSize::H632 => "h632",
            ProfileSize::Original => "original",
        }
    }
}

/// Full CDN URL for a poster path, or `None` when the record has none.
pub fn poster_url(path: Option<&str>, size: PosterSize) -> Option<String> {
    path.map(|p| format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), p))
}

/// Full CDN URL for a backdrop path, or `None` when the record has none.
pub fn backdrop_url(path: Option<&str>, size: BackdropSize) -> Option<String> {
    path.map(|p| format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), p))
}

/// Full CDN URL for a cast member's profile path, or `None` when the
/// record has none.
pub fn profile_url(path: Option<&str>, size: ProfileSize) -> Option<String> {
    path.map(|p| format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), p))
}

#[derive(Deserialize)]
struct ApiStatus {
    #[serde(default)]
    status_message: String,
}

/// Client for the movie listings, details, credits, videos, and genre
/// endpoints the dashboard renders from.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, TmdbError> {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Client against a non-default base URL (a local stub in tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, TmdbError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(TmdbError::MissingApiKey);
        }
        Ok(TmdbClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiStatus>()
                .await
                .map(|s| s.status_message)
                .unwrap_or_default();
            return Err(TmdbError::Api {
                status: status.as_u16(),
                message,
                endpoint: endpoint.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn popular(&self, page: u32) -> Result<Page<Movie>, TmdbError> {
        self.get("/movie/popular", &[("page", page.to_string())])
            .await
    }

    pub async fn top_rated(&self, page: u32) -> Result<Page<Movie>, TmdbError> {
        self.get("/movie/top_rated", &[("page", page.to_string())])
            .await
    }

    pub async fn now_playing(&self, page: u32) -> Result<Page<Movie>, TmdbError> {
        self.get("/movie/now_playing", &[("page", page.to_string())])
            .await
    }

    pub async fn upcoming(&self, page: u32) -> Result<Page<Movie>, TmdbError> {
        self.get("/movie/upcoming", &[("page", page.to_string())])
            .await
    }

    pub async fn search(&self, query: &str, page: u32) -> Result<Page<Movie>, TmdbError> {
        self.get(
            "/search/movie",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    pub async fn similar(&self, id: u64, page: u32) -> Result<Page<Movie>, TmdbError> {
        self.get(
            &format!("/movie/{}/similar", id),
            &[("page", page.to_string())],
        )
        .await
    }

    pub async fn movie_details(&self, id: u64) -> Result<MovieDetails, TmdbError> {
        self.get(&format!("/movie/{}", id), &[]).await
    }

    pub async fn movie_credits(&self, id: u64) -> Result<Credits, TmdbError> {
        self.get(&format!("/movie/{}/credits", id), &[]).await
    }

    pub async fn movie_videos(&self, id: u64) -> Result<Vec<Video>, TmdbError> {
        let list: VideoList = self.get(&format!("/movie/{}/videos", id), &[]).await?;
        Ok(list.results)
    }

    pub async fn genres(&self) -> Result<Vec<Genre>, TmdbError> {
        let list: GenreList = self.get("/genre/movie/list", &[]).await?;
        Ok(list.genres)
    }
}
