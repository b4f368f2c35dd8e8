#![allow(dead_code)]
use ferrous_recursor_infrastructure::dns::cache::Clock;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn at(now: u64) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
