//! Scheduling core for a Modified-Leitner flashcard learner.
//!
//! Provides:
//! - Sparse and dense bucket representations with range queries
//! - Day-based practice selection and post-review bucket updates
//! - Hint derivation for cards
//! - Shared types (Flashcard, Deck, AnswerDifficulty, etc.)
//!
//! Every operation takes a caller-owned snapshot and returns a derived
//! view or a new snapshot. Nothing here is persisted or mutated in place.

pub mod buckets;
pub mod error;
pub mod hint;
pub mod scheduler;
pub mod types;

pub use buckets::{get_bucket_range, to_bucket_sets, BucketMap, BucketNumber, BucketRange, CardSet};
pub use error::{Result, SchedulerError};
pub use hint::{get_hint, hint_with_prefix};
pub use scheduler::{practice, update, Scheduler};
pub use types::{
    AnswerDifficulty, CardId, Deck, Flashcard, ReviewRecord, SchedulerSettings, DEFAULT_HINT_PREFIX,
};
