//! Error types for leitner-core.

use crate::buckets::BucketNumber;
use crate::types::CardId;
use thiserror::Error;

/// Result type alias using SchedulerError.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors that can occur while scheduling cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("day must be non-negative, got {day}")]
    InvalidDay { day: i64 },

    #[error("Card not found")]
    CardNotFound { card: CardId },

    #[error("card {card} is already in bucket {bucket}")]
    DuplicateCard { card: CardId, bucket: BucketNumber },
}
