#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod meter;
pub mod node;
pub mod query;

pub use config::{LogLevel, LoggingConfig, NetworkMode, NodeConfig};
pub use meter::{BandwidthMeter, BandwidthReporter};
pub use node::Node;
pub use query::{
    stream, CancelHandle, CancellationToken, PollConfig, SampleStream, Scope, ScopeRequest,
};
