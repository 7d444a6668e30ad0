use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-unique identity of one bar. Never reused and never
/// derived from position.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ElementId(u64);

impl ElementId {
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One bar of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub value: u32,
    /// Current logical index within the working sequence
    pub position: usize,
    /// Physical displacement accumulated by swap animations
    pub offset: f32,
}

impl Element {
    pub fn new(value: u32, position: usize) -> Self {
        Self {
            id: ElementId::next(),
            value,
            position,
            offset: 0.0,
        }
    }
}

pub type Sequence = Vec<Element>;

pub fn values(sequence: &[Element]) -> Vec<u32> {
    sequence.iter().map(|e| e.value).collect()
}

pub fn is_sorted(sequence: &[Element]) -> bool {
    sequence.windows(2).all(|w| w[0].value <= w[1].value)
}
