//! Identity-keyed lookup of visual handles.
//!
//! The rendering layer owns handle lifetimes: it registers a handle when it
//! mounts a bar and unregisters it on unmount. Drivers only ever ask whether
//! an identity currently has a handle and treat "absent" as a no-op.

use std::cell::RefCell;
use std::rc::Rc;

use super::state::{Marker, VisualState};
use crate::core::util::HashMap;
use crate::model::ElementId;

/// A renderer-side bar. Implementations use interior mutability because
/// handles are shared between the rendering layer and the registry.
pub trait BarHandle {
    fn paint(&self, state: VisualState);

    /// Render at this cumulative horizontal offset from the bar's slot
    fn translate(&self, offset: f32);

    fn resize(&self, value: u32);

    fn annotate(&self, marker: Option<Marker>);
}

pub type Handle = Rc<dyn BarHandle>;

#[derive(Default)]
pub struct ElementRegistry {
    handles: RefCell<HashMap<ElementId, Handle>>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, id: ElementId, handle: Handle) {
        self.handles.borrow_mut().insert(id, handle);
    }

    pub fn unregister(&self, id: ElementId) {
        self.handles.borrow_mut().remove(&id);
    }

    pub fn get(&self, id: ElementId) -> Option<Handle> {
        self.handles.borrow().get(&id).cloned()
    }

    pub fn clear(&self) {
        self.handles.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.handles.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.borrow().is_empty()
    }
}

/// Plain in-memory handle: the visible state of one bar as last instructed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarView {
    pub value: u32,
    pub state: VisualState,
    pub offset: f32,
    pub marker: Option<Marker>,
}

impl BarView {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }
}

impl BarHandle for RefCell<BarView> {
    fn paint(&self, state: VisualState) {
        self.borrow_mut().state = state;
    }

    fn translate(&self, offset: f32) {
        self.borrow_mut().offset = offset;
    }

    fn resize(&self, value: u32) {
        self.borrow_mut().value = value;
    }

    fn annotate(&self, marker: Option<Marker>) {
        self.borrow_mut().marker = marker;
    }
}
