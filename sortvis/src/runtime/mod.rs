pub mod controller;
pub mod events;
pub mod registry;
pub mod settings;
pub mod storage;

pub use controller::{RunController, RunStatus};
pub use events::{
    RunCommand, RunCommandReceiver, RunCommandSender, command_channel,
};
pub use registry::{DriverCategory, DriverEntry, DriverRegistry};
pub use settings::{BAR_COUNTS, SPEEDS, Settings};
