//! AHP Engine - Analytic Hierarchy Process decision support
//!
//! This crate collects pairwise judgments over a hierarchy of criteria,
//! derives priority weights from the resulting reciprocal matrices, checks
//! their consistency, and aggregates everything into a ranking of
//! alternatives.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
