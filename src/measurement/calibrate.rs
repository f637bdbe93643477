//! Iteration-count calibration ("warm-up").
//!
//! Timing a handful of iterations of a fast routine is dominated by clock
//! resolution. Calibration finds an iteration count large enough to
//! produce measurable run times, while spending no more than the
//! configured budget doing so. Caches and branch predictors get warmed as
//! a side effect.

use std::time::Duration;

use crate::clock::Clock;
use crate::types::ItersForDuration;

use super::stopwatch::{time_routine, Routine};

/// Double the iteration count until `budget` wall time has been spent
/// since calibration began, then report the count reached and the elapsed
/// time of the final run.
///
/// Always performs at least one full timed run, so the result covers at
/// least one iteration even for a zero budget.
pub fn warm_up<C, R>(routine: &mut R, budget: Duration) -> ItersForDuration
where
    C: Clock,
    R: Routine<C> + ?Sized,
{
    let mut iters: u64 = 1;
    let start = C::now();

    loop {
        let elapsed = time_routine(routine, iters);

        if C::now() - start > budget {
            tracing::debug!(iters, ?elapsed, "warm-up settled");
            return ItersForDuration { iters, elapsed };
        }

        iters *= 2;
    }
}
