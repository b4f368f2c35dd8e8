pub mod mock_ports;

pub use mock_ports::{
    upstream_answer, InMemoryAnswerCache, MockRecursiveResolver, SuffixInterceptor,
};
