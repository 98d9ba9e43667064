//! Decision hierarchy - the label sets a comparison session works over.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain::foundation::AhpError;

/// Alternatives, top-level criteria, and one optional level of sub-criteria.
///
/// Criteria without sub-criteria are leaf criteria and are compared against
/// the alternatives directly. Parent criteria are compared against the
/// alternatives through their sub-criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionHierarchy {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    sub_criteria: HashMap<String, Vec<String>>,
}

impl DecisionHierarchy {
    /// Creates a builder for constructing a hierarchy.
    pub fn builder() -> HierarchyBuilder {
        HierarchyBuilder::new()
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Sub-criteria declared under `parent`, if any.
    pub fn sub_criteria_of(&self, parent: &str) -> Option<&[String]> {
        self.sub_criteria.get(parent).map(Vec::as_slice)
    }

    /// True if `criterion` is a top-level criterion that declared sub-criteria.
    pub fn has_sub_criteria(&self, criterion: &str) -> bool {
        self.sub_criteria.contains_key(criterion)
    }

    /// Criteria that declared sub-criteria, in criteria order.
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.criteria
            .iter()
            .filter(|c| self.sub_criteria.contains_key(c.as_str()))
            .map(String::as_str)
    }

    /// Number of criteria that declared sub-criteria.
    pub fn parent_count(&self) -> usize {
        self.sub_criteria.len()
    }

    /// Leaf criteria and sub-criteria in evaluation order.
    ///
    /// Each parent criterion is replaced in place by its sub-criteria.
    pub fn comparable_criteria(&self) -> Vec<&str> {
        self.criteria
            .iter()
            .flat_map(|criterion| match self.sub_criteria.get(criterion) {
                Some(subs) => subs.iter().map(String::as_str).collect::<Vec<_>>(),
                None => vec![criterion.as_str()],
            })
            .collect()
    }

    /// Number of alternatives-comparison matrices a complete model holds.
    pub fn comparable_count(&self) -> usize {
        self.criteria
            .iter()
            .map(|c| self.sub_criteria.get(c).map_or(1, Vec::len))
            .sum()
    }

    /// True if `label` is a top-level criterion without sub-criteria.
    pub fn is_leaf(&self, label: &str) -> bool {
        self.criteria.iter().any(|c| c == label) && !self.has_sub_criteria(label)
    }

    /// True if alternatives are compared directly under `label`.
    pub fn is_comparable(&self, label: &str) -> bool {
        self.is_leaf(label) || self.parent_of(label).is_some()
    }

    /// Parent criterion of a sub-criterion.
    pub fn parent_of(&self, sub_criterion: &str) -> Option<&str> {
        self.criteria
            .iter()
            .find(|c| {
                self.sub_criteria
                    .get(c.as_str())
                    .is_some_and(|subs| subs.iter().any(|s| s == sub_criterion))
            })
            .map(String::as_str)
    }
}

/// Builder for constructing DecisionHierarchy instances.
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    sub_criteria: Vec<(String, String)>,
}

impl HierarchyBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_alternative(mut self, label: impl Into<String>) -> Self {
        self.alternatives.push(label.into());
        self
    }

    pub fn add_criterion(mut self, label: impl Into<String>) -> Self {
        self.criteria.push(label.into());
        self
    }

    /// Declares `label` as a sub-criterion of `parent`.
    pub fn add_sub_criterion(mut self, parent: impl Into<String>, label: impl Into<String>) -> Self {
        self.sub_criteria.push((parent.into(), label.into()));
        self
    }

    /// Sets the alternatives.
    pub fn alternatives(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.alternatives = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the top-level criteria.
    pub fn criteria(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.criteria = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the hierarchy.
    ///
    /// # Errors
    ///
    /// `StructuralPrecondition` when there are no criteria or no
    /// alternatives, when labels repeat within their namespace, when a
    /// sub-criterion names an unknown parent, or when a sub-criterion label
    /// collides with a top-level criterion.
    pub fn build(self) -> Result<DecisionHierarchy, AhpError> {
        if self.criteria.is_empty() {
            return Err(AhpError::structural("at least one criterion is required"));
        }
        if self.alternatives.is_empty() {
            return Err(AhpError::structural("at least one alternative is required"));
        }
        ensure_unique("alternative", &self.alternatives)?;
        ensure_unique("criterion", &self.criteria)?;

        let mut sub_criteria: HashMap<String, Vec<String>> = HashMap::new();
        for (parent, label) in self.sub_criteria {
            if !self.criteria.contains(&parent) {
                return Err(AhpError::structural(format!(
                    "sub-criterion '{}' refers to unknown criterion '{}'",
                    label, parent
                )));
            }
            if self.criteria.contains(&label) {
                return Err(AhpError::structural(format!(
                    "sub-criterion '{}' collides with a top-level criterion",
                    label
                )));
            }
            sub_criteria.entry(parent).or_default().push(label);
        }
        let all_subs: Vec<String> = sub_criteria.values().flatten().cloned().collect();
        ensure_unique("sub-criterion", &all_subs)?;

        Ok(DecisionHierarchy {
            alternatives: self.alternatives,
            criteria: self.criteria,
            sub_criteria,
        })
    }
}

fn ensure_unique(kind: &str, labels: &[String]) -> Result<(), AhpError> {
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if label.trim().is_empty() {
            return Err(AhpError::structural(format!("{} labels cannot be blank", kind)));
        }
        if !seen.insert(label.as_str()) {
            return Err(AhpError::structural(format!("duplicate {} '{}'", kind, label)));
        }
    }
    Ok(())
}

/// Which matrix of the hierarchy a builder fills.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatrixTarget {
    /// Alternatives compared under one leaf criterion or sub-criterion.
    Alternatives { criterion: String },
    /// The top-level criteria compared with each other.
    Criteria,
    /// The sub-criteria of one parent compared with each other.
    SubCriteria { parent: String },
}

impl MatrixTarget {
    pub fn alternatives(criterion: impl Into<String>) -> Self {
        MatrixTarget::Alternatives {
            criterion: criterion.into(),
        }
    }

    pub fn sub_criteria(parent: impl Into<String>) -> Self {
        MatrixTarget::SubCriteria {
            parent: parent.into(),
        }
    }
}

impl fmt::Display for MatrixTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixTarget::Alternatives { criterion } => {
                write!(f, "alternatives under '{}'", criterion)
            }
            MatrixTarget::Criteria => write!(f, "criteria"),
            MatrixTarget::SubCriteria { parent } => write!(f, "sub-criteria of '{}'", parent),
        }
    }
}
