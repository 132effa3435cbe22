//! Performance ratings.
//!
//! The rating for a won round is a lookup in a [`RatingTable`]: a list of
//! inclusive guess-count ranges with a label each, plus a fallback label.
//! Swapping tables never touches the session logic.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::instrument;

/// One row of a rating table: `min..=max` guesses earn `label`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RatingTier {
    /// Fewest guesses in this tier.
    min: u32,
    /// Most guesses in this tier.
    max: u32,
    /// Rating awarded.
    label: String,
}

impl RatingTier {
    /// Creates a tier covering `min..=max` guesses.
    pub fn new(min: u32, max: u32, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            label: label.into(),
        }
    }

    /// Returns true if `guess_count` falls in this tier.
    pub fn covers(&self, guess_count: u32) -> bool {
        (self.min..=self.max).contains(&guess_count)
    }
}

/// Why a rating table was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RatingTableError {
    /// A tier or the fallback had a blank label.
    #[display("Rating labels cannot be blank")]
    BlankLabel,

    /// A tier had `min > max`.
    #[display("Rating tier {}..={} is inverted", _0, _1)]
    InvertedTier(u32, u32),

    /// Two tiers cover the same guess count.
    #[display("Rating tiers overlap at {} guesses", _0)]
    Overlap(u32),
}

impl std::error::Error for RatingTableError {}

/// Maps a final guess count to a qualitative label.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawRatingTable")]
pub struct RatingTable {
    /// Tiers sorted by `min`, never overlapping.
    tiers: Vec<RatingTier>,
    /// Label for counts no tier covers.
    fallback: String,
}

#[derive(Deserialize)]
struct RawRatingTable {
    tiers: Vec<RatingTier>,
    fallback: String,
}

impl TryFrom<RawRatingTable> for RatingTable {
    type Error = RatingTableError;

    fn try_from(raw: RawRatingTable) -> Result<Self, Self::Error> {
        Self::new(raw.tiers, raw.fallback)
    }
}

static REFERENCE: LazyLock<RatingTable> = LazyLock::new(|| RatingTable {
    tiers: vec![
        RatingTier::new(1, 3, "Outstanding!"),
        RatingTier::new(4, 5, "Excellent!"),
        RatingTier::new(6, 7, "Good!"),
        RatingTier::new(8, 10, "Average!"),
        RatingTier::new(11, 15, "Okay!"),
    ],
    fallback: "Bad!".to_string(),
});

impl RatingTable {
    /// Builds a validated table. Tiers are kept sorted by `min`.
    #[instrument(skip(tiers, fallback))]
    pub fn new(
        mut tiers: Vec<RatingTier>,
        fallback: impl Into<String>,
    ) -> Result<Self, RatingTableError> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() || tiers.iter().any(|t| t.label.trim().is_empty()) {
            return Err(RatingTableError::BlankLabel);
        }
        if let Some(t) = tiers.iter().find(|t| t.min > t.max) {
            return Err(RatingTableError::InvertedTier(t.min, t.max));
        }

        tiers.sort_by_key(|t| t.min);
        if let Some(pair) = tiers.windows(2).find(|pair| pair[1].min <= pair[0].max) {
            return Err(RatingTableError::Overlap(pair[1].min));
        }

        Ok(Self { tiers, fallback })
    }

    /// The reference table:
    ///
    /// | Guesses | Rating |
    /// |---|---|
    /// | 1–3 | Outstanding! |
    /// | 4–5 | Excellent! |
    /// | 6–7 | Good! |
    /// | 8–10 | Average! |
    /// | 11–15 | Okay! |
    /// | otherwise | Bad! |
    pub fn reference() -> &'static RatingTable {
        &REFERENCE
    }

    /// Looks up the label for a final guess count.
    pub fn rate(&self, guess_count: u32) -> &str {
        self.tiers
            .iter()
            .find(|t| t.covers(guess_count))
            .map_or(self.fallback.as_str(), |t| t.label.as_str())
    }
}

impl Default for RatingTable {
    fn default() -> Self {
        Self::reference().clone()
    }
}

/// Rates a guess count against the reference table.
pub fn performance_rating(guess_count: u32) -> &'static str {
    RatingTable::reference().rate(guess_count)
}
