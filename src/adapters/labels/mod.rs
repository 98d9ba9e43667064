//! Label adapters - text listings of alternatives and criteria.

mod file;
mod parser;

pub use file::FileLabelSource;
pub use parser::{parse_alternatives, parse_criteria, parse_hierarchy};
