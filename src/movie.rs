use serde::{Deserialize, Serialize};

/// A movie record as delivered by the external metadata source.
///
/// The favorites core only ever inspects `id`; every other field is opaque
/// payload that is carried through storage unchanged. Payload fields default
/// when absent so partially-shaped records still deserialize, but a record
/// without an `id` is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Release date as `YYYY-MM-DD`; may be empty for unreleased titles.
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub popularity: f64,
}

impl Movie {
    /// Release year parsed from the leading `YYYY` of `release_date`.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.get(..4)?.parse().ok()
    }
}
