use std::sync::Arc;

use cinemarks::{
    CounterBadge, FavoritesStats, FavoritesStore, InMemoryStorage, Movie, Toggled,
};

fn movie(id: u64, title: &str) -> Movie {
    serde_json::from_str(&format!(r#"{{"id": {}, "title": "{}"}}"#, id, title)).unwrap()
}

fn loaded_store() -> FavoritesStore {
    let store = FavoritesStore::new(Box::new(InMemoryStorage::new()));
    store.initialize();
    store
}

fn ids(store: &FavoritesStore) -> Vec<u64> {
    store.favorites().iter().map(|m| m.id).collect()
}

// --- Uniqueness ---

#[test]
fn no_sequence_of_mutations_produces_a_duplicate_id() {
    let store = loaded_store();

    store.add(movie(1, "A"));
    store.add(movie(1, "A"));
    store.toggle(movie(2, "B"));
    store.add(movie(2, "B"));
    store.remove(3);
    store.toggle(movie(1, "A"));
    store.toggle(movie(1, "A"));

    let mut seen = ids(&store);
    let len = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), len);
}

// --- Idempotence ---

#[test]
fn double_add_equals_single_add() {
    let once = loaded_store();
    once.add(movie(1, "A"));

    let twice = loaded_store();
    twice.add(movie(1, "A"));
    twice.add(movie(1, "A"));

    assert_eq!(once.favorites(), twice.favorites());
}

#[test]
fn double_remove_equals_single_remove_even_when_never_present() {
    let store = loaded_store();
    store.add(movie(1, "A"));

    store.remove(2);
    store.remove(2);
    assert_eq!(ids(&store), vec![1]);

    store.remove(1);
    store.remove(1);
    assert_eq!(ids(&store), Vec::<u64>::new());
}

// --- Toggle ---

#[test]
fn toggle_twice_is_an_involution() {
    let store = loaded_store();
    store.add(movie(1, "A"));
    store.add(movie(2, "B"));
    let before = store.favorites();

    assert_eq!(store.toggle(movie(2, "B")), Toggled::Removed);
    assert_eq!(store.toggle(movie(2, "B")), Toggled::Added);
    assert_eq!(store.favorites(), before);

    assert_eq!(store.toggle(movie(3, "C")), Toggled::Added);
    assert_eq!(store.toggle(movie(3, "C")), Toggled::Removed);
    assert_eq!(store.favorites(), before);
}

// --- Order preservation ---

#[test]
fn readded_movie_moves_to_the_end() {
    let store = loaded_store();
    store.add(movie(1, "A"));
    store.add(movie(2, "B"));
    store.remove(1);
    store.add(movie(1, "A"));

    assert_eq!(ids(&store), vec![2, 1]);
}

#[test]
fn insertion_order_is_preserved_for_display() {
    let store = loaded_store();
    for id in [5, 3, 9, 1] {
        store.add(movie(id, "m"));
    }
    assert_eq!(ids(&store), vec![5, 3, 9, 1]);
}

// --- Count accuracy ---

#[test]
fn badge_count_matches_collection_after_every_mutation() {
    let store = Arc::new(FavoritesStore::new(Box::new(InMemoryStorage::new())));
    let badge = CounterBadge::mount(&store);
    store.initialize();

    store.add(movie(1, "A"));
    assert_eq!(badge.count(), store.count());

    store.toggle(movie(2, "B"));
    assert_eq!(badge.count(), 2);

    store.remove(1);
    assert_eq!(badge.count(), 1);

    store.clear();
    assert_eq!(badge.count(), 0);
    assert_eq!(badge.count(), store.count());
}

// --- Stats projection ---

#[test]
fn stats_are_a_pure_projection_of_the_snapshot() {
    let store = loaded_store();
    store.add(serde_json::from_str(r#"{"id": 1, "vote_average": 8.0, "release_date": "1999-10-15"}"#).unwrap());
    store.add(serde_json::from_str(r#"{"id": 2, "vote_average": 7.0, "release_date": "2014-11-05"}"#).unwrap());

    let stats = FavoritesStats::project(&store.favorites());
    assert_eq!(stats.count, 2);
    assert_eq!(stats.average_rating, Some(7.5));
    assert_eq!(stats.latest_year, Some(2014));
}

// --- Concrete scenario ---

#[test]
fn add_add_toggle_leaves_only_the_second_movie() {
    let store = loaded_store();
    store.add(movie(1, "A"));
    store.add(movie(2, "B"));
    store.toggle(movie(1, "A"));

    let remaining = store.favorites();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);
    assert_eq!(remaining[0].title, "B");
    assert_eq!(store.count(), 1);
}
