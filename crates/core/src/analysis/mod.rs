//! Derived analytics over measurement series

pub mod batch;

pub use batch::{lifting_levels, HeightSummary};
