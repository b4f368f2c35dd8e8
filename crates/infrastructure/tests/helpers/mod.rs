#![allow(dead_code)]
pub mod dns_server_mock;
pub mod manual_clock;
pub mod memory_store;
pub mod scripted_transport;
pub mod zone;

pub use dns_server_mock::MockDnsServer;
pub use manual_clock::ManualClock;
pub use memory_store::MemoryCacheStore;
pub use scripted_transport::{ScriptedTransport, SentQuery};
pub use zone::{build_reply, client_query, Reply};
