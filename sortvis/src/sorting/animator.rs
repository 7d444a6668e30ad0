use std::cell::{Cell, RefCell};
use std::ops::RangeInclusive;
use std::rc::Rc;

use rand::Rng;
use rand::rngs::StdRng;

use crate::model::Element;
use crate::motion::{AnimationClock, STEP_UNITS};
use crate::render::{Effects, Lane, Marker, VisualState};

/// Counters for one run. Shells show them next to the chart.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub writes: u64,
    pub suspensions: u64,
}

/// Everything a driver needs besides its working copy: the clock to pace
/// itself, the effect layer to draw with, randomness, and run counters.
#[derive(Clone)]
pub struct Animator {
    clock: AnimationClock,
    effects: Effects,
    rng: Rc<RefCell<StdRng>>,
    stats: Rc<Cell<RunStats>>,
}

impl Animator {
    pub fn new(
        clock: AnimationClock,
        effects: Effects,
        rng: Rc<RefCell<StdRng>>,
        stats: Rc<Cell<RunStats>>,
    ) -> Self {
        Self {
            clock,
            effects,
            rng,
            stats,
        }
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn stats(&self) -> RunStats {
        self.stats.get()
    }

    /// One standard animation step
    pub async fn pause(&self) {
        self.record(|stats| stats.suspensions += 1);
        self.clock.suspend(STEP_UNITS).await;
    }

    /// Hands control back to the host for a single tick, e.g. so it can
    /// mount handles for freshly published lanes.
    pub async fn yield_now(&self) {
        self.record(|stats| stats.suspensions += 1);
        self.clock.suspend(0.0).await;
    }

    pub fn compared(&self) {
        self.record(|stats| stats.comparisons += 1);
    }

    /// Counts one comparison, pauses, then hands back its outcome
    pub async fn check(&self, outcome: bool) -> bool {
        self.compared();
        self.pause().await;
        outcome
    }

    pub fn paint<'a>(
        &self,
        elements: impl IntoIterator<Item = &'a Element>,
        state: VisualState,
    ) {
        self.effects.apply_state(Lane::Main, elements, state);
    }

    pub fn paint_lane(
        &self,
        lane: Lane,
        element: &Element,
        state: VisualState,
    ) {
        self.effects.apply_state(lane, [element], state);
    }

    pub fn finish(&self, element: &Element) {
        self.paint([element], VisualState::Finished);
    }

    pub fn finish_all(&self, elements: &[Element]) {
        self.paint(elements, VisualState::Finished);
    }

    pub fn mark_special(&self, element: &Element, marker: Marker) {
        self.paint([element], marker.state());
        self.effects
            .apply_special_marker(Lane::Main, element, Some(marker));
    }

    pub fn remove_special(&self, element: &Element) {
        self.paint([element], VisualState::Neutral);
        self.effects.apply_special_marker(Lane::Main, element, None);
    }

    /// Slides both bars into each other's slot, pauses, then commits the
    /// swap to the working copy.
    pub async fn swap(&self, bars: &mut [Element], i: usize, j: usize) {
        self.paint([&bars[i], &bars[j]], VisualState::Swap);

        if i != j {
            let delta = self.effects.distance(&bars[i], &bars[j]);
            self.effects.apply_move(&mut bars[i], delta);
            self.effects.apply_move(&mut bars[j], -delta);
            self.record(|stats| stats.swaps += 1);
        }

        self.pause().await;

        bars.swap(i, j);
        bars[i].position = i;
        bars[j].position = j;
        self.paint([&bars[i], &bars[j]], VisualState::Neutral);
    }

    /// Overwrites a value in place, as merge sort does
    pub fn write(&self, bars: &mut [Element], index: usize, value: u32) {
        bars[index].value = value;
        self.effects.apply_value(Lane::Main, &bars[index]);
        self.record(|stats| stats.writes += 1);
    }

    pub fn random_index(&self, range: RangeInclusive<usize>) -> usize {
        self.rng.borrow_mut().random_range(range)
    }

    fn record(&self, f: impl FnOnce(&mut RunStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}
