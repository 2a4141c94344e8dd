use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StarRatingError {
    #[error("star rating must be between 0 and 3: {value}")]
    OutOfRange { value: u8 },
}

/// Accuracy summary of a finished exercise, from 0 to 3 stars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

/// Minimum percentage per star count, checked from the top. First row reached wins.
const THRESHOLDS: [(usize, u8); 3] = [(90, 3), (70, 2), (50, 1)];

impl StarRating {
    pub const MAX: u8 = 3;
    pub const ZERO: Self = Self(0);

    /// # Errors
    ///
    /// Returns `StarRatingError::OutOfRange` if `value` exceeds [`StarRating::MAX`].
    pub fn new(value: u8) -> Result<Self, StarRatingError> {
        if value > Self::MAX {
            return Err(StarRatingError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Stars earned for `correct` right answers out of `total` questions.
    ///
    /// A lesson without questions rates zero stars.
    #[must_use]
    pub fn from_score(correct: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        // Integer form of `correct / total * 100 >= min`.
        let scaled = correct.saturating_mul(100);
        THRESHOLDS
            .iter()
            .find(|(min, _)| scaled >= min.saturating_mul(total))
            .map_or(Self::ZERO, |(_, stars)| Self(*stars))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

/// `correct / total * 100`, or `None` when there is nothing to divide by.
#[must_use]
pub fn score_percent(correct: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = correct as f64 / total as f64 * 100.0;
    Some(pct)
}

impl TryFrom<u8> for StarRating {
    type Error = StarRatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
