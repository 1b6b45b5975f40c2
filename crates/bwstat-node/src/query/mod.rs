mod cancel;
mod scope;
mod stream;

pub use cancel::{CancelHandle, CancellationToken};
pub use scope::{Scope, ScopeRequest};
pub use stream::{stream, PollConfig, SampleStream};
