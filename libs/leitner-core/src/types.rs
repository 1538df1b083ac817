//! Core types for the Leitner scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Handle identifying a single flashcard within a [`Deck`].
///
/// Cards are compared by handle, never by their text, so two cards with
/// identical fields are still distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(usize);

impl CardId {
    /// Position of the card inside its deck.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A flashcard as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub hint: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Flashcard {
    /// Create a card with no hint and no tags.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            hint: String::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Append-only arena owning the caller's flashcards.
///
/// Buckets hold [`CardId`] handles into a deck rather than the cards
/// themselves. Cards are never removed or reordered, so a handle stays
/// valid for as long as the deck lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Flashcard>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card and return its handle.
    pub fn add(&mut self, card: Flashcard) -> CardId {
        let id = CardId(self.cards.len());
        self.cards.push(card);
        id
    }

    pub fn get(&self, id: CardId) -> Option<&Flashcard> {
        self.cards.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Flashcard)> {
        self.cards.iter().enumerate().map(|(i, card)| (CardId(i), card))
    }
}

/// Outcome the learner reports after reviewing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerDifficulty {
    Easy,
    Hard,
    Wrong,
}

impl AnswerDifficulty {
    /// Number of buckets the card moves by, before clamping.
    /// Easy -> +1, Hard -> -1, Wrong -> 0
    pub fn bucket_offset(self) -> i64 {
        match self {
            Self::Easy => 1,
            Self::Hard => -1,
            Self::Wrong => 0,
        }
    }

    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
            Self::Wrong => "wrong",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "hard" => Some(Self::Hard),
            "wrong" => Some(Self::Wrong),
            _ => None,
        }
    }
}

/// A single review trial, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub card: CardId,
    pub difficulty: AnswerDifficulty,
    pub timestamp: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn new(card: CardId, difficulty: AnswerDifficulty, timestamp: DateTime<Utc>) -> Self {
        Self {
            card,
            difficulty,
            timestamp,
        }
    }
}

/// Default prefix for generated hints.
pub const DEFAULT_HINT_PREFIX: &str = "Think about the key concepts related to ";

/// Scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Bucket that newly enrolled cards start in.
    pub starting_bucket: usize,
    /// Text prepended to a card's front when it has no usable hint.
    pub hint_prefix: String,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            starting_bucket: 0,
            hint_prefix: DEFAULT_HINT_PREFIX.to_string(),
        }
    }
}
