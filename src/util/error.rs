//! Error taxonomy for the simulation core.
//!
//! Everything that can go wrong is local to a single operation (one spawn,
//! one tick, one config load). Nothing is retried.

use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// The particle budget is exhausted. `spawned` counts the particles that
    /// were created by the failing operation before it hit the limit.
    #[error("particle limit of {limit} reached ({spawned} spawned before stopping)")]
    ParticleLimit { limit: usize, spawned: usize },

    /// The requested grid does not fit in the index space or in memory.
    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge { width: u32, height: u32 },

    #[error("unknown material id {0}")]
    UnknownMaterial(u8),

    #[error("unknown material key `{0}`")]
    UnknownMaterialKey(String),

    #[error("material bundle has no entry for `{0}`")]
    MissingMaterial(&'static str),

    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f32),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = SimError::ParticleLimit { limit: 10, spawned: 3 };
        assert_eq!(err.to_string(), "particle limit of 10 reached (3 spawned before stopping)");
        assert_eq!(SimError::UnknownMaterial(42).to_string(), "unknown material id 42");
    }

    #[test]
    fn json_errors_convert() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SimError = bad.into();
        assert!(matches!(err, SimError::Json(_)));
    }
}
