//! Preference value object for the 5-point ordinal UI scale (-2 to +2)
//! and its mapping onto signed 1-9 judgments.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::judgment::{MAX_JUDGMENT, MIN_JUDGMENT};
use super::ValidationError;

/// Ordinal answer to "how does the first label compare to the second?".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Preference {
    MuchWorse = -2,
    Worse = -1,
    #[default]
    Same = 0,
    Better = 1,
    MuchBetter = 2,
}

impl Preference {
    /// Creates a Preference from an integer, returning error if out of range.
    pub fn try_from_i8(value: i8) -> Result<Self, ValidationError> {
        match value {
            -2 => Ok(Preference::MuchWorse),
            -1 => Ok(Preference::Worse),
            0 => Ok(Preference::Same),
            1 => Ok(Preference::Better),
            2 => Ok(Preference::MuchBetter),
            _ => Err(ValidationError::out_of_range(
                "preference",
                -2,
                2,
                value as i32,
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Preference::MuchWorse => "Much Worse",
            Preference::Worse => "Worse",
            Preference::Same => "Same",
            Preference::Better => "Better",
            Preference::MuchBetter => "Much Better",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value() > 0 { "+" } else { "" };
        write!(f, "{}{}", sign, self.value())
    }
}

/// Maps an ordinal preference onto a signed judgment.
///
/// The absolute value of the result is the judgment; the sign selects which
/// label of the pair is preferred (positive favors the first).
pub trait JudgmentScale {
    fn to_signed(&self, preference: Preference) -> i32;
}

/// Symmetric five-point scale: `0 -> 1`, `±1 -> ±moderate`, `±2 -> ±strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinalScale {
    moderate: i32,
    strong: i32,
}

impl OrdinalScale {
    /// Creates a scale, validating both steps against the 1-9 scale.
    pub fn new(moderate: i32, strong: i32) -> Result<Self, ValidationError> {
        for (field, value) in [("moderate", moderate), ("strong", strong)] {
            if !(MIN_JUDGMENT..=MAX_JUDGMENT).contains(&value) {
                return Err(ValidationError::out_of_range(
                    field,
                    MIN_JUDGMENT,
                    MAX_JUDGMENT,
                    value,
                ));
            }
        }
        if moderate > strong {
            return Err(ValidationError::invalid_format(
                "moderate",
                format!("must not exceed strong ({} > {})", moderate, strong),
            ));
        }
        Ok(Self { moderate, strong })
    }

    pub fn moderate(&self) -> i32 {
        self.moderate
    }

    pub fn strong(&self) -> i32 {
        self.strong
    }
}

impl Default for OrdinalScale {
    fn default() -> Self {
        Self {
            moderate: 3,
            strong: 9,
        }
    }
}

impl JudgmentScale for OrdinalScale {
    fn to_signed(&self, preference: Preference) -> i32 {
        match preference {
            Preference::MuchWorse => -self.strong,
            Preference::Worse => -self.moderate,
            Preference::Same => 1,
            Preference::Better => self.moderate,
            Preference::MuchBetter => self.strong,
        }
    }
}

impl<F> JudgmentScale for F
where
    F: Fn(Preference) -> i32,
{
    fn to_signed(&self, preference: Preference) -> i32 {
        self(preference)
    }
}
