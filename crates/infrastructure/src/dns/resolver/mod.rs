pub mod core;
pub mod root_hints;
pub mod walk;

pub use core::IterativeResolver;
pub use root_hints::ROOT_HINTS;
pub use walk::{NameserverLookups, WalkContext};
