pub mod cli;
pub mod context;
pub mod error;
pub mod metrics;
pub mod probe;
pub mod sampler;

pub use error::{BuildwatchError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
