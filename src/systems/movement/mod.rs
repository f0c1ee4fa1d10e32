//! Movement - cell-by-cell displacement of a single particle
//!
//! Every mobile phase moves through `trace`; the profile decides what it may
//! push aside and how far one trace may go.

mod types;
mod trace;

pub use trace::trace;
pub use types::{TraceOutcome, TraceProfile};
