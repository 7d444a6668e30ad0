//! Fresh datasets for a run: randomized values, fresh identities,
//! positions equal to index and zero offsets.

use rand::Rng;

use super::element::{Element, Sequence};
use crate::core::util::ordered;

pub const DEFAULT_MIN_VALUE: u32 = 3;
pub const DEFAULT_MAX_VALUE: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl ValueRange {
    pub fn new(min: u32, max: u32) -> Self {
        let (min, max) = ordered(min, max);
        Self { min, max }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE)
    }
}

pub fn generate(
    count: usize,
    range: ValueRange,
    rng: &mut impl Rng,
) -> Sequence {
    (0..count)
        .map(|position| {
            Element::new(rng.random_range(range.min..=range.max), position)
        })
        .collect()
}

pub fn from_values(values: &[u32]) -> Sequence {
    values
        .iter()
        .enumerate()
        .map(|(position, value)| Element::new(*value, position))
        .collect()
}
