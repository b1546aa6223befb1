//! Timer-driven animation phase advancement
//!
//! The driver owns the single shared timer resource of the session: a
//! background ticker thread that advances the cyclic phase counter once
//! per tick period. Critical ordering requirements:
//! - The ticker only touches the phase counter, never other session state
//! - Stop is join-based: once `stop` returns, no further tick can land
//! - The shutdown flag is re-checked after every sleep, before the
//!   increment, so a tick already in flight when pause is requested
//!   cannot advance the phase
//! - Start and stop are idempotent; "is a ticker running" is tracked as
//!   an explicit handle, not inferred from side state

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::domain::animation::advance_phase;

/// Running ticker thread plus its shutdown signal
struct Ticker {
    shutdown: Arc<AtomicBool>,
    thread: JoinHandle<()>,
}

/// Periodic advancer of the animation phase
///
/// The phase starts at 0, wraps modulo 100 and is frozen (never reset)
/// while the driver is stopped; restarting resumes from the frozen
/// value. The driver is constructed stopped and only the session facade
/// flips it, after re-deriving the pause predicate from current state.
pub struct AnimationDriver {
    phase: Arc<AtomicU8>,
    tick_period: Duration,
    ticker: Option<Ticker>,
}

impl AnimationDriver {
    /// Creates a stopped driver at phase 0
    pub fn new(tick_period: Duration) -> Self {
        Self {
            phase: Arc::new(AtomicU8::new(0)),
            tick_period,
            ticker: None,
        }
    }

    /// Current animation phase, in `[0, 100)`
    pub fn phase(&self) -> u8 {
        self.phase.load(Ordering::Relaxed)
    }

    /// Whether a ticker thread is currently running
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Starts the ticker if it is not already running
    ///
    /// The phase resumes from its current value; there is no jump back
    /// to 0.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }

        let phase = Arc::clone(&self.phase);
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        let period = self.tick_period;

        let thread = thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                thread::park_timeout(period);
                // A stop requested during the sleep must win over the
                // tick that was already scheduled
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                let _ = phase.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |p| {
                    Some(advance_phase(p))
                });
            }
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "animation ticker started");
        self.ticker = Some(Ticker { shutdown, thread });
    }

    /// Stops the ticker if one is running, joining its thread
    ///
    /// When this returns, the phase can no longer change until the next
    /// `start`; its value is frozen, not reset.
    pub fn stop(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };

        ticker.shutdown.store(true, Ordering::Relaxed);
        ticker.thread.thread().unpark();
        if ticker.thread.join().is_err() {
            tracing::warn!("animation ticker thread panicked");
        }
        tracing::debug!(phase = self.phase(), "animation ticker stopped");
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
