//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `labels` - Plain-text label listings (`LabelSource`)

pub mod labels;

pub use labels::FileLabelSource;
