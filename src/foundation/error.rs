/// Convenience result type used across the engine.
pub type MotionResult<T> = Result<T, MotionError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Authored timeline violates ordering, overlap or interval invariants.
    #[error("malformed timeline: {0}")]
    MalformedTimeline(String),

    /// Bad control-point arrays handed to the interpolator.
    #[error("invalid interpolation spec: {0}")]
    InvalidInterpolationSpec(String),

    /// Invalid render configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while evaluating a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when deserializing timeline or configuration input.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::MalformedTimeline`] value.
    pub fn malformed_timeline(msg: impl Into<String>) -> Self {
        Self::MalformedTimeline(msg.into())
    }

    /// Build a [`MotionError::InvalidInterpolationSpec`] value.
    pub fn invalid_interpolation(msg: impl Into<String>) -> Self {
        Self::InvalidInterpolationSpec(msg.into())
    }

    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
