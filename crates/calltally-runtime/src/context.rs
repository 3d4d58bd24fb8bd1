//! Per-run mutable state threaded through the pagination walk.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use calltally_core::DayHistogram;

use crate::audit::EventAuditLog;

/// Cooperative early-exit flag, inspected once per call record.
///
/// Cloneable so a signal handler can trigger it from outside the walk;
/// once triggered it stays triggered for the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    stopped: Arc<AtomicBool>,
}

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the walk to fall out at the next record boundary.
    pub fn trigger(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// State owned by one run: the shared histogram, the append-only audit
/// log, and the stop flag. Passed by exclusive reference into the walk;
/// nothing here is process-global.
#[derive(Debug, Default)]
pub struct RunContext {
    pub histogram: DayHistogram,
    pub audit: EventAuditLog,
    pub stop: StopFlag,
}

impl RunContext {
    pub fn new(stop: StopFlag) -> Self {
        Self {
            histogram: DayHistogram::new(),
            audit: EventAuditLog::new(),
            stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_flag_clones_share_state() {
        let flag = StopFlag::new();
        let clone = flag.clone();
        assert!(!clone.is_stopped());
        flag.trigger();
        assert!(clone.is_stopped());
    }
}
