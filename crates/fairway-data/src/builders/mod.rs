//! High-level builders that wire the generators into a full dataset.

mod dataset;

pub use dataset::{Dataset, DatasetBuilder};
