//! Simulated-latency plumbing.
//!
//! Every "network" operation in the wizard is a local simulation with a
//! fixed delay: uploads, mobile verification, submission. Once scheduled a
//! delay always completes; there is no cancellation and no timeout. The
//! [`Debounce`] guard keeps a second conflicting operation (a duplicate
//! upload, a duplicate submission) from starting while one is pending —
//! advisory UX debouncing, not mutual exclusion.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const VERIFY_DELAY: Duration = Duration::from_millis(2000);
pub const UPLOAD_DELAY: Duration = Duration::from_millis(1500);
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
pub const TRANSITION_DELAY: Duration = Duration::from_millis(500);

/// Models one simulated round-trip.
pub async fn simulated_delay(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Single-flight guard for one logical operation.
#[derive(Clone, Default)]
pub struct Debounce {
    busy: Arc<AtomicBool>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the operation. Returns `false` when it is already pending.
    pub fn begin(&self) -> bool {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn finish(&self) {
        self.busy.store(false, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debounce_rejects_a_second_begin_until_finished() {
        let debounce = Debounce::new();

        assert!(debounce.begin());
        assert!(!debounce.begin());
        assert!(debounce.is_pending());

        debounce.finish();
        assert!(debounce.begin());
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_delay_elapses() {
        let start = tokio::time::Instant::now();
        simulated_delay(UPLOAD_DELAY).await;
        assert_eq!(start.elapsed(), UPLOAD_DELAY);
    }
}
