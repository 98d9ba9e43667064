//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LabelSource` - Where alternatives and criteria come from

mod label_source;

pub use label_source::{LabelSource, LabelSourceError};
