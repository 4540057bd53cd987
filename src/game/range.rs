use serde::Serialize;
use thiserror::Error;

/// Lowest number a default game will pick.
pub const DEFAULT_MIN: i64 = 1;
/// Highest number a default game will pick.
pub const DEFAULT_MAX: i64 = 5;

/// Inclusive bounds the target is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameRange {
    pub min: i64,
    pub max: i64,
}

/// Failure modes when building a range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("empty range: min {min} is greater than max {max}")]
    Empty { min: i64, max: i64 },
}

impl GameRange {
    pub fn new(min: i64, max: i64) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Empty { min, max });
        }
        Ok(GameRange { min, max })
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of distinct values in the range. Wide enough for all of `i64`.
    pub fn len(&self) -> u128 {
        u128::from(self.max.abs_diff(self.min)) + 1
    }

    /// Force a value into the range.
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

impl Default for GameRange {
    fn default() -> Self {
        GameRange {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}
