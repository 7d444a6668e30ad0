pub mod clock;
pub mod frame_clock;

pub use clock::{AnimationClock, Delay, MIN_SPEED, STEP_UNITS, SpeedFactor};
pub use frame_clock::{FrameClock, FrameTick};
