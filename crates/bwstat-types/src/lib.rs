#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod bandwidth;
pub mod error;

pub use bandwidth::BandwidthSnapshot;
pub use error::{BwstatError, BwstatResult};
