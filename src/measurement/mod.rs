//! Timing primitives, calibration, and measurement collection.
//!
//! Everything in this module runs strictly sequentially on the calling
//! thread: concurrent execution during timing would corrupt elapsed-time
//! measurements.

mod calibrate;
mod collector;
mod stopwatch;

pub use std::hint::black_box;

pub use calibrate::warm_up;
pub use collector::{base_iters, collect, total_iters};
pub use stopwatch::{Routine, Stopwatch};

pub(crate) use stopwatch::{ExplicitRoutine, ImplicitRoutine};
