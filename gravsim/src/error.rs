//! Error type shared by the simulation and viewport modules
//!
//! Every variant is a programming or configuration error caught at
//! construction/mutation time. Nothing here is transient or retryable

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Body mass must be positive and finite
    #[error("body mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    /// Camera zoom must be positive and finite
    #[error("camera zoom must be positive and finite, got {0}")]
    InvalidZoom(f64),

    #[error("zoom factor must be positive and finite, got {0}")]
    InvalidZoomFactor(f64),

    /// Step duration passed to `advance` must be positive and finite
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("viewport bounds must have min < max on both axes")]
    InvalidBounds,

    #[error("invalid scenario configuration: {0}")]
    InvalidConfig(String),
}
