//! Domain Services
//!
//! Pure resolution logic over definition trees. No file system access.

pub mod aggregator;
pub mod base_expander;
pub mod merge;
pub mod normalizer;
pub mod order;
pub mod scope_merger;

pub use aggregator::{cross_link, resolve_definitions, resolve_objects};
pub use base_expander::BaseExpander;
pub use merge::{deep_merge, merge_definitions};
pub use normalizer::normalize_properties;
pub use order::sort_by_order;
pub use scope_merger::resolve_scope;
