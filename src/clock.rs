//! Clock capability: a monotonic reading plus a steadiness flag.
//!
//! The timing primitives are generic over this trait at compile time, so a
//! benchmark binary pays no dynamic-dispatch cost per clock read and tests
//! can substitute a deterministic clock.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// A source of monotonic timestamps.
///
/// `now` returns the time elapsed since an arbitrary fixed epoch; only
/// differences between two readings are meaningful. Both readings of a
/// timed region always come from the same `Clock` implementation.
pub trait Clock {
    /// Whether the clock is guaranteed never to run backwards or be
    /// adjusted while the process runs.
    const IS_STEADY: bool;

    /// Current monotonic reading.
    fn now() -> Duration;

    /// Human-readable clock name, reported at suite start.
    fn name() -> &'static str;
}

/// The platform's highest-resolution monotonic clock.
pub struct MonotonicClock;

static EPOCH: OnceLock<Instant> = OnceLock::new();

impl Clock for MonotonicClock {
    const IS_STEADY: bool = true;

    fn now() -> Duration {
        EPOCH.get_or_init(Instant::now).elapsed()
    }

    fn name() -> &'static str {
        "monotonic"
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Deterministic clock for tests, advanced manually in nanosecond ticks.

    use std::cell::Cell;
    use std::time::Duration;

    use super::Clock;

    thread_local! {
        static NOW_NS: Cell<u64> = Cell::new(0);
    }

    pub(crate) struct FakeClock;

    impl FakeClock {
        pub(crate) fn reset() {
            NOW_NS.with(|c| c.set(0));
        }

        pub(crate) fn advance(ns: u64) {
            NOW_NS.with(|c| c.set(c.get() + ns));
        }
    }

    impl Clock for FakeClock {
        const IS_STEADY: bool = true;

        fn now() -> Duration {
            Duration::from_nanos(NOW_NS.with(Cell::get))
        }

        fn name() -> &'static str {
            "fake"
        }
    }
}
