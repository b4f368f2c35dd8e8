mod cache;
mod config;
mod logging;

pub use cache::init_answer_cache;
pub use config::load_config;
pub use logging::init_logging;
