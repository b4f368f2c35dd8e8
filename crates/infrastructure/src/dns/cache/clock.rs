use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock source in unix seconds. Cached answers outlive the process, so
/// ttl bookkeeping uses wall time rather than a monotonic clock.
pub trait Clock: Send + Sync {
    fn now_secs(&self) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
