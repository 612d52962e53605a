//! The per-frame animation loop.

pub use self::clock::{FixedStepClock, FrameClock, WallClock};
pub use self::frame_driver::{rotation_angle, FrameDriver, FramePresenter, SPEED_STEP};

mod clock;
mod frame_driver;
