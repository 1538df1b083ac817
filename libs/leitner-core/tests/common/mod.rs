//! Shared fixtures for integration tests.

use leitner_core::{BucketMap, CardId, CardSet, Deck, Flashcard};

/// A deck of `n` distinct cards and their handles.
pub fn deck(n: usize) -> (Deck, Vec<CardId>) {
    let mut deck = Deck::new();
    let ids = (0..n)
        .map(|i| deck.add(Flashcard::new(format!("Question {i}"), format!("Answer {i}"))))
        .collect();
    (deck, ids)
}

pub fn set(ids: &[CardId]) -> CardSet {
    ids.iter().copied().collect()
}

/// Build a bucket map from `(bucket, cards)` pairs.
pub fn map(entries: &[(usize, &[CardId])]) -> BucketMap {
    entries.iter().map(|(bucket, ids)| (*bucket, set(ids))).collect()
}
