//! The Visual Effect Layer.
//!
//! Drivers describe what a bar should look like; [`Effects`] finds the bar's
//! handle through the lane's [`ElementRegistry`] and forwards the
//! instruction. Instructions for identities without a mounted handle are
//! dropped silently.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::registry::{BarHandle, ElementRegistry};
use super::state::{Marker, VisualState};
use crate::core::logging::trace;
use crate::model::{Element, ElementId, Sequence};

pub const DEFAULT_PITCH: f32 = 1.0;

/// Where a bar is displayed. Merge sort shows the two halves it is merging
/// in the `Left` and `Right` comparison lanes beneath the main chart.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Lane {
    Main,
    Left,
    Right,
}

/// Everything the rendering layer and the running driver share: one
/// registry per lane, the contents of the comparison lanes, and the
/// distance between adjacent bar slots.
pub struct Stage {
    main: ElementRegistry,
    left: ElementRegistry,
    right: ElementRegistry,
    lanes: RefCell<(Sequence, Sequence)>,
    lane_revision: Cell<u64>,
    pitch: f32,
}

impl Stage {
    pub fn new(pitch: f32) -> Self {
        let pitch = if pitch.is_finite() && pitch > 0.0 {
            pitch
        } else {
            DEFAULT_PITCH
        };

        Self {
            main: ElementRegistry::new(),
            left: ElementRegistry::new(),
            right: ElementRegistry::new(),
            lanes: RefCell::new((Vec::new(), Vec::new())),
            lane_revision: Cell::new(0),
            pitch,
        }
    }

    pub fn registry(&self, lane: Lane) -> &ElementRegistry {
        match lane {
            Lane::Main => &self.main,
            Lane::Left => &self.left,
            Lane::Right => &self.right,
        }
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Replaces both comparison lanes. Shells watch [`Stage::lane_revision`]
    /// to know when to remount lane handles.
    pub fn publish_lanes(&self, left: Sequence, right: Sequence) {
        *self.lanes.borrow_mut() = (left, right);
        self.lane_revision.set(self.lane_revision.get() + 1);
    }

    pub fn clear_lanes(&self) {
        let lanes = self.lanes.borrow();
        if lanes.0.is_empty() && lanes.1.is_empty() {
            return;
        }
        drop(lanes);
        self.publish_lanes(Vec::new(), Vec::new());
    }

    pub fn lane_contents(&self, lane: Lane) -> Sequence {
        let lanes = self.lanes.borrow();
        match lane {
            Lane::Main => Vec::new(),
            Lane::Left => lanes.0.clone(),
            Lane::Right => lanes.1.clone(),
        }
    }

    pub fn lane_revision(&self) -> u64 {
        self.lane_revision.get()
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(DEFAULT_PITCH)
    }
}

#[derive(Clone)]
pub struct Effects {
    stage: Rc<Stage>,
}

impl Effects {
    pub fn new(stage: Rc<Stage>) -> Self {
        Self { stage }
    }

    pub fn stage(&self) -> &Rc<Stage> {
        &self.stage
    }

    pub fn apply_state<'a>(
        &self,
        lane: Lane,
        elements: impl IntoIterator<Item = &'a Element>,
        state: VisualState,
    ) {
        for element in elements {
            self.with_handle(lane, element.id, |handle| handle.paint(state));
        }
    }

    /// Accumulates `delta` into the element's offset and moves its main-lane
    /// bar there. The logical offset is kept even when no bar is mounted.
    pub fn apply_move(&self, element: &mut Element, delta: f32) {
        element.offset += delta;
        let offset = element.offset;
        self.with_handle(Lane::Main, element.id, |handle| {
            handle.translate(offset)
        });
    }

    pub fn apply_special_marker(
        &self,
        lane: Lane,
        element: &Element,
        marker: Option<Marker>,
    ) {
        self.with_handle(lane, element.id, |handle| handle.annotate(marker));
    }

    pub fn apply_value(&self, lane: Lane, element: &Element) {
        let value = element.value;
        self.with_handle(lane, element.id, |handle| handle.resize(value));
    }

    /// Physical distance `from` must travel to land on `to`'s slot
    pub fn distance(&self, from: &Element, to: &Element) -> f32 {
        (to.position as f32 - from.position as f32) * self.stage.pitch
    }

    fn with_handle(
        &self,
        lane: Lane,
        id: ElementId,
        f: impl FnOnce(&dyn BarHandle),
    ) {
        match self.stage.registry(lane).get(id) {
            Some(handle) => f(handle.as_ref()),
            None => trace!("no {:?} handle for {}", lane, id),
        }
    }
}
