mod logging;
mod node;
mod types;

pub use logging::LoggingConfig;
pub use node::NodeConfig;
pub use types::{LogLevel, NetworkMode};
