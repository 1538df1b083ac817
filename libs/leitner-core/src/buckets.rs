//! Bucket representations.
//!
//! A [`BucketMap`] is the sparse, caller-held state: bucket number to the
//! set of cards at that proficiency level. [`to_bucket_sets`] derives the
//! dense array form used for day-based selection.

use crate::error::{Result, SchedulerError};
use crate::types::CardId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Bucket index. Larger numbers are reviewed less often.
pub type BucketNumber = usize;

/// Cards sharing one bucket.
pub type CardSet = BTreeSet<CardId>;

/// Sparse mapping from bucket number to cards.
///
/// Every card appears in at most one bucket. Bucket keys may have gaps and
/// a key may map to an empty set; empty keys still count towards
/// [`BucketMap::key_count`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketMap(BTreeMap<BucketNumber, CardSet>);

impl BucketMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, bucket: BucketNumber) -> Option<&CardSet> {
        self.0.get(&bucket)
    }

    /// Number of bucket keys present, including keys holding no cards.
    pub fn key_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BucketNumber, &CardSet)> {
        self.0.iter().map(|(bucket, cards)| (*bucket, cards))
    }

    /// Find the bucket holding `card` by scanning every entry.
    pub fn bucket_of(&self, card: CardId) -> Option<BucketNumber> {
        self.0
            .iter()
            .find(|(_, cards)| cards.contains(&card))
            .map(|(bucket, _)| *bucket)
    }

    /// Return a new map with `card` added to `bucket`.
    ///
    /// Fails if the card already sits in some bucket.
    pub fn enroll(&self, card: CardId, bucket: BucketNumber) -> Result<Self> {
        if let Some(existing) = self.bucket_of(card) {
            return Err(SchedulerError::DuplicateCard {
                card,
                bucket: existing,
            });
        }
        let mut next = self.clone();
        next.0.entry(bucket).or_default().insert(card);
        Ok(next)
    }

    /// Move `card` between buckets in place. Callers guarantee `card` is in `from`.
    pub(crate) fn relocate(&mut self, card: CardId, from: BucketNumber, to: BucketNumber) {
        if let Some(cards) = self.0.get_mut(&from) {
            cards.remove(&card);
        }
        self.0.entry(to).or_default().insert(card);
    }
}

impl From<BTreeMap<BucketNumber, CardSet>> for BucketMap {
    fn from(map: BTreeMap<BucketNumber, CardSet>) -> Self {
        Self(map)
    }
}

impl FromIterator<(BucketNumber, CardSet)> for BucketMap {
    fn from_iter<I: IntoIterator<Item = (BucketNumber, CardSet)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Lowest and highest buckets holding at least one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRange {
    pub min_bucket: BucketNumber,
    pub max_bucket: BucketNumber,
}

/// Expand a sparse bucket map into a dense array indexed by bucket number.
///
/// The result has `max key + 1` entries, with empty sets filling gaps, or
/// no entries at all for an empty map.
pub fn to_bucket_sets(buckets: &BucketMap) -> Vec<CardSet> {
    let Some((&max, _)) = buckets.0.last_key_value() else {
        return Vec::new();
    };

    let mut sets = vec![CardSet::new(); max + 1];
    for (bucket, cards) in buckets.iter() {
        sets[bucket] = cards.clone();
    }
    sets
}

/// Range of occupied buckets, or `None` when every bucket is empty.
pub fn get_bucket_range(buckets: &[CardSet]) -> Option<BucketRange> {
    let min_bucket = buckets.iter().position(|cards| !cards.is_empty())?;
    let max_bucket = buckets.iter().rposition(|cards| !cards.is_empty())?;
    Some(BucketRange {
        min_bucket,
        max_bucket,
    })
}
