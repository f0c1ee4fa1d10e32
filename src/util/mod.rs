//! Shared plumbing: errors, randomness and logging.

pub mod error;
pub mod logging;
pub mod random;

pub use error::{SimError, SimResult};
pub use random::RandomSource;
