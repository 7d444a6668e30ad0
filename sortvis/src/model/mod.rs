pub mod dataset;
pub mod element;

pub use dataset::{ValueRange, from_values, generate};
pub use element::{Element, ElementId, Sequence, is_sorted, values};
