#![allow(dead_code)]
use ferrous_recursor_domain::DomainError;
use ferrous_recursor_infrastructure::dns::cache::{CacheSnapshot, CacheStore};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Cache store kept in memory, counting writes.
#[derive(Default)]
pub struct MemoryCacheStore {
    snapshot: Mutex<Option<CacheSnapshot>>,
    saves: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: CacheSnapshot) -> Self {
        let store = Self::default();
        *store.snapshot.lock().unwrap() = Some(snapshot);
        store
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn persisted(&self) -> Option<CacheSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }
}

impl CacheStore for MemoryCacheStore {
    fn load(&self) -> Result<Option<CacheSnapshot>, DomainError> {
        Ok(self.snapshot.lock().unwrap().clone())
    }

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::CacheStoreWrite("disk full".to_string()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.snapshot.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }
}
