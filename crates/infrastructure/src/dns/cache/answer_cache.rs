use super::clock::{Clock, SystemClock};
use super::store::{CacheSnapshot, CacheStore};
use ferrous_recursor_application::ports::AnswerCachePort;
use ferrous_recursor_domain::{CachedAnswer, DomainError, LiveAnswer};
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Name → addresses cache with write-through persistence.
///
/// A single mutex covers both the map and the store write, so the persisted
/// file always matches some state the map has actually been in.
pub struct AnswerCache {
    entries: Mutex<CacheSnapshot>,
    store: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
}

impl AnswerCache {
    /// Reads the store. An absent or empty store yields an empty cache and is
    /// initialized with an empty map; an unreadable one is an error.
    pub fn load(store: Arc<dyn CacheStore>, clock: Arc<dyn Clock>) -> Result<Self, DomainError> {
        let entries = match store.load()? {
            Some(snapshot) => {
                info!(names = snapshot.len(), "Answer cache loaded from store");
                snapshot
            }
            None => {
                let empty = CacheSnapshot::new();
                store.save(&empty)?;
                info!("Answer cache store initialized empty");
                empty
            }
        };

        Ok(Self {
            entries: Mutex::new(entries),
            store,
            clock,
        })
    }

    pub fn load_with_system_clock(store: Arc<dyn CacheStore>) -> Result<Self, DomainError> {
        Self::load(store, Arc::new(SystemClock))
    }

    fn lock(&self) -> MutexGuard<'_, CacheSnapshot> {
        // Every mutation is a single insert or remove, so a poisoned map is
        // still consistent.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AnswerCachePort for AnswerCache {
    fn lookup(&self, name: &str) -> Option<Vec<LiveAnswer>> {
        let now = self.clock.now_secs();
        let mut entries = self.lock();
        let records = entries.get(name)?;

        if records.iter().any(|record| !record.is_live(now)) {
            debug!(domain = %name, "Cached record expired, evicting name");
            entries.remove(name);
            return None;
        }

        let live = records
            .iter()
            .map(|record| LiveAnswer {
                address: record.address,
                remaining_ttl: u32::try_from(record.remaining_ttl(now)).unwrap_or(u32::MAX),
            })
            .collect();

        Some(live)
    }

    fn store(&self, name: &str, records: &[(Ipv4Addr, u32)]) -> Result<(), DomainError> {
        if records.is_empty() {
            return Ok(());
        }

        let now = self.clock.now_secs();
        let answers = records
            .iter()
            .map(|(address, ttl)| CachedAnswer::new(*address, *ttl, now))
            .collect();

        let mut entries = self.lock();
        entries.insert(name.to_string(), answers);

        if let Err(e) = self.store.save(&entries) {
            warn!(error = %e, domain = %name, "Answer cache write-through failed");
            return Err(e);
        }

        debug!(domain = %name, records = records.len(), "Answer cached");
        Ok(())
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
