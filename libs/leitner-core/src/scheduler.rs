//! Modified-Leitner scheduling.
//!
//! Bucket `i` is reviewed on every day divisible by `i + 1`: bucket 0
//! daily, bucket 1 every other day, and so on. A review moves the card
//! one bucket up (easy), one down (hard), or leaves it in place (wrong).

use crate::buckets::{BucketMap, BucketNumber, CardSet};
use crate::error::{Result, SchedulerError};
use crate::hint::hint_with_prefix;
use crate::types::{AnswerDifficulty, CardId, Flashcard, SchedulerSettings};

/// Cards due for review on `day`, counted from 0 on the learner's first day.
pub fn practice(buckets: &[CardSet], day: i64) -> Result<CardSet> {
    if day < 0 {
        return Err(SchedulerError::InvalidDay { day });
    }
    let day = day.unsigned_abs();

    let due: CardSet = buckets
        .iter()
        .enumerate()
        .filter(|(bucket, _)| is_due(*bucket, day))
        .flat_map(|(_, cards)| cards.iter().copied())
        .collect();

    tracing::debug!(day, due = due.len(), "selected cards for practice");
    Ok(due)
}

fn is_due(bucket: BucketNumber, day: u64) -> bool {
    day % (bucket as u64 + 1) == 0
}

/// Move `card` according to `difficulty`, returning the new bucket map.
///
/// The target bucket is clamped to `0..=key_count - 1`, where the key count
/// is taken from `buckets` as passed in. Keys holding no cards count too, so
/// adding or dropping empty keys changes how far a card can be promoted.
pub fn update(buckets: &BucketMap, card: CardId, difficulty: AnswerDifficulty) -> Result<BucketMap> {
    let Some(current) = buckets.bucket_of(card) else {
        tracing::warn!(%card, "update for card missing from every bucket");
        return Err(SchedulerError::CardNotFound { card });
    };

    let ceiling = buckets.key_count() as i64 - 1;
    let target = (current as i64 + difficulty.bucket_offset()).clamp(0, ceiling) as BucketNumber;

    let mut next = buckets.clone();
    next.relocate(card, current, target);

    tracing::debug!(
        %card,
        difficulty = difficulty.as_str(),
        from = current,
        to = target,
        "moved card"
    );
    Ok(next)
}

/// Scheduler bound to a set of [`SchedulerSettings`].
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    settings: SchedulerSettings,
}

impl Scheduler {
    pub fn new(settings: SchedulerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SchedulerSettings {
        &self.settings
    }

    /// Place a card that has not been scheduled yet into the starting bucket.
    pub fn enroll_new(&self, buckets: &BucketMap, card: CardId) -> Result<BucketMap> {
        buckets.enroll(card, self.settings.starting_bucket)
    }

    pub fn practice(&self, buckets: &[CardSet], day: i64) -> Result<CardSet> {
        practice(buckets, day)
    }

    pub fn update(
        &self,
        buckets: &BucketMap,
        card: CardId,
        difficulty: AnswerDifficulty,
    ) -> Result<BucketMap> {
        update(buckets, card, difficulty)
    }

    pub fn hint(&self, card: &Flashcard) -> String {
        hint_with_prefix(card, &self.settings.hint_prefix)
    }
}
