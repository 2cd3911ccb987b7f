use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WheelError {
    /// Every slice has weight 0, so there is nothing to draw.
    #[error("no valid slot: total weight is zero")]
    NoValidSlot,

    /// A spin was requested while another one is still running.
    #[error("a spin is already in progress")]
    ReentrantSpin,

    #[error("invalid wheel config: {0}")]
    InvalidConfig(String),

    /// The animation may only run forward to a finite angle.
    #[error("cannot animate from {start} to {target}")]
    InvalidTarget { start: f64, target: f64 },
}

impl From<ValidationErrors> for WheelError {
    fn from(err: ValidationErrors) -> Self {
        WheelError::InvalidConfig(err.to_string())
    }
}

pub type WheelResult<T> = Result<T, WheelError>;
