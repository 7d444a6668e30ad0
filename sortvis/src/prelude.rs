pub use crate::core::logging::init_logger;
pub use crate::core::logging::{debug, error, info, trace, warn};
pub use crate::core::util::{AtomicF32, HashMap};
pub use crate::model::{
    Element, ElementId, Sequence, ValueRange, from_values, generate,
    is_sorted, values,
};
pub use crate::motion::{
    AnimationClock, FrameClock, FrameTick, MIN_SPEED, STEP_UNITS, SpeedFactor,
};
pub use crate::register_drivers;
pub use crate::render::{
    BarHandle, BarView, Board, Effects, ElementRegistry, Handle, Lane, Marker,
    MountedBar, Stage, VisualState,
};
pub use crate::runtime::storage;
pub use crate::runtime::{
    BAR_COUNTS, DriverCategory, DriverEntry, DriverRegistry, RunCommand,
    RunCommandReceiver, RunCommandSender, RunController, RunStatus, SPEEDS,
    Settings, command_channel,
};
pub use crate::sorting::{
    Animator, DriverConfig, DriverFn, DriverFuture, RunStats, default_registry,
};
