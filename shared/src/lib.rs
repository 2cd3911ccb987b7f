pub mod animation;
pub mod config;
pub mod confetti;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod render;
pub mod selector;
pub mod shared_wheel_game;
pub mod slices;

pub use animation::{Clock, Frame, ManualClock, SpinAnimation, SpinPhase};
pub use config::WheelConfig;
pub use error::{WheelError, WheelResult};
pub use shared_wheel_game::{SpinObserver, SpinResult, SpinTicket, WheelGame, WheelState};
pub use slices::{Slice, DEFAULT_SLICES};
