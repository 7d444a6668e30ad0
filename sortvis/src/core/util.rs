use ahash::RandomState;
use std::collections::HashMap as StdHashMap;
use std::sync::atomic::{AtomicU32, Ordering};

pub type HashMap<K, V> = StdHashMap<K, V, RandomState>;

#[derive(Debug)]
pub struct AtomicF32 {
    inner: AtomicU32,
}

impl AtomicF32 {
    pub const fn new(value: f32) -> Self {
        Self {
            inner: AtomicU32::new(value.to_bits()),
        }
    }

    pub fn load(&self, order: Ordering) -> f32 {
        f32::from_bits(self.inner.load(order))
    }

    pub fn store(&self, value: f32, order: Ordering) {
        self.inner.store(value.to_bits(), order)
    }
}

/// Returns `(min, max)` in ascending order regardless of argument order
pub fn ordered(a: u32, b: u32) -> (u32, u32) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_f32_round_trips_bits() {
        let value = AtomicF32::new(0.25);
        assert_eq!(value.load(Ordering::Relaxed), 0.25);

        value.store(150.0, Ordering::Relaxed);
        assert_eq!(value.load(Ordering::Relaxed), 150.0);
    }

    #[test]
    fn ordered_swaps_reversed_bounds() {
        assert_eq!(ordered(50, 3), (3, 50));
        assert_eq!(ordered(3, 50), (3, 50));
        assert_eq!(ordered(7, 7), (7, 7));
    }
}
