pub mod answer_cache;
pub mod clock;
pub mod store;

pub use answer_cache::AnswerCache;
pub use clock::{Clock, SystemClock};
pub use store::{CacheSnapshot, CacheStore, JsonFileStore};
