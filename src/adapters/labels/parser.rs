//! Plain-text label listings.
//!
//! Alternatives: one label per line.
//!
//! Criteria: one criterion per line; lines that start with whitespace are
//! sub-criteria of the nearest criterion above them.
//!
//! ```text
//! Price
//! Quality
//!     Durability
//!     Finish
//! Delivery
//! ```

use crate::domain::ahp::{DecisionHierarchy, HierarchyBuilder};
use crate::ports::LabelSourceError;

/// Parses an alternatives listing. Blank lines are skipped.
pub fn parse_alternatives(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a criteria listing into a builder preloaded with criteria and
/// sub-criteria.
///
/// # Errors
/// `OrphanSubCriterion` when an indented line comes before any criterion.
/// Line numbers are 1-based.
pub fn parse_criteria(text: &str) -> Result<HierarchyBuilder, LabelSourceError> {
    let mut builder = DecisionHierarchy::builder();
    let mut current: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let label = raw.trim();
        if label.is_empty() {
            continue;
        }

        if raw.starts_with(char::is_whitespace) {
            let parent = current
                .as_deref()
                .ok_or(LabelSourceError::OrphanSubCriterion { line: index + 1 })?;
            builder = builder.add_sub_criterion(parent, label);
        } else {
            builder = builder.add_criterion(label);
            current = Some(label.to_string());
        }
    }

    Ok(builder)
}

/// Parses both listings and validates the resulting hierarchy.
pub fn parse_hierarchy(alternatives: &str, criteria: &str) -> Result<DecisionHierarchy, LabelSourceError> {
    let hierarchy = parse_criteria(criteria)?
        .alternatives(parse_alternatives(alternatives))
        .build()?;
    Ok(hierarchy)
}
