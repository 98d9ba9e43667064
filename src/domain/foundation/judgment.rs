//! Judgment value object for the 1-9 pairwise comparison scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AhpError;

/// Smallest judgment: both sides are equally preferred.
pub const MIN_JUDGMENT: i32 = 1;

/// Largest judgment: extreme preference for the first side.
pub const MAX_JUDGMENT: i32 = 9;

/// How strongly the first label of a pair is preferred over the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Judgment(u8);

impl Judgment {
    /// Equal importance.
    pub const EQUAL: Judgment = Judgment(1);

    /// Creates a judgment, rejecting anything outside `1..=9`.
    pub fn try_new(value: i32) -> Result<Self, AhpError> {
        if (MIN_JUDGMENT..=MAX_JUDGMENT).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(AhpError::JudgmentOutOfRange { value })
        }
    }

    /// Returns the integer value.
    pub fn value(&self) -> i32 {
        self.0 as i32
    }

    /// Returns the matrix entry for this direction of the pair.
    pub fn ratio(&self) -> f64 {
        f64::from(self.0)
    }

    /// Returns the matrix entry for the opposite direction of the pair.
    pub fn reciprocal(&self) -> f64 {
        1.0 / f64::from(self.0)
    }
}

impl TryFrom<i32> for Judgment {
    type Error = AhpError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Judgment> for i32 {
    fn from(judgment: Judgment) -> Self {
        judgment.value()
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judgment_accepts_whole_scale() {
        for value in 1..=9 {
            assert_eq!(Judgment::try_new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn judgment_rejects_values_off_scale() {
        for value in [-9, -1, 0, 10, 100] {
            assert_eq!(
                Judgment::try_new(value),
                Err(AhpError::JudgmentOutOfRange { value })
            );
        }
    }

    #[test]
    fn judgment_reciprocal_inverts_ratio() {
        let judgment = Judgment::try_new(4).unwrap();
        assert_eq!(judgment.ratio(), 4.0);
        assert_eq!(judgment.reciprocal(), 0.25);
        assert_eq!(Judgment::EQUAL.reciprocal(), 1.0);
    }

    #[test]
    fn judgment_deserialization_validates() {
        let ok: Judgment = serde_json::from_str("7").unwrap();
        assert_eq!(ok.value(), 7);
        assert!(serde_json::from_str::<Judgment>("12").is_err());
    }
}
