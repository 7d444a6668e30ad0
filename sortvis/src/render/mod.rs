pub mod board;
pub mod effects;
pub mod registry;
pub mod state;

pub use board::{Board, MountedBar};
pub use effects::{DEFAULT_PITCH, Effects, Lane, Stage};
pub use registry::{BarHandle, BarView, ElementRegistry, Handle};
pub use state::{Marker, VisualState};
