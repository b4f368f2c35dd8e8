pub mod cache;
pub mod forwarding;
pub mod interceptor;
pub mod resolver;
pub mod server;
pub mod transport;
pub mod wire_response;

pub use cache::{AnswerCache, CacheStore, Clock, JsonFileStore, SystemClock};
pub use interceptor::MultiplyInterceptor;
pub use resolver::{IterativeResolver, ROOT_HINTS};
pub use server::DnsServerHandler;
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
