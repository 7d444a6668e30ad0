pub mod core;
pub mod model;
pub mod motion;
pub mod prelude;
pub mod render;
pub mod runtime;
pub mod sorting;

pub use crate::core::logging::init_logger;
pub use crate::runtime::controller::{RunController, RunStatus};
pub use crate::sorting::default_registry;
