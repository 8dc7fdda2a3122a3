use crate::movie::Movie;

/// Aggregate figures the stats widget renders. A pure projection of the
/// current collection; it carries no state of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct FavoritesStats {
    pub count: usize,
    /// Mean of `vote_average`, rounded to one decimal. `None` when empty.
    pub average_rating: Option<f64>,
    /// Most recent release year among the favorites. Entries without a
    /// parseable release date are skipped.
    pub latest_year: Option<i32>,
}

impl FavoritesStats {
    pub fn project(movies: &[Movie]) -> Self {
        let count = movies.len();
        let average_rating = if count == 0 {
            None
        } else {
            let sum: f64 = movies.iter().map(|m| m.vote_average).sum();
            Some((sum / count as f64 * 10.0).round() / 10.0)
        };
        let latest_year = movies.iter().filter_map(Movie::release_year).max();
        FavoritesStats {
            count,
            average_rating,
            latest_year,
        }
    }
}
