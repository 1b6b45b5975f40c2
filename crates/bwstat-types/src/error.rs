use thiserror::Error;

#[derive(Error, Debug)]
pub enum BwstatError {
    #[error("Malformed peer id: {0}")]
    MalformedPeerId(String),

    #[error("Malformed protocol id: {0}")]
    MalformedProtocolId(String),

    #[error("Please specify a peer OR a protocol, not both")]
    ConflictingScope,

    #[error("Invalid poll interval: {0}")]
    InvalidInterval(String),

    #[error("Node is not online, bandwidth metering is unavailable")]
    NotOperational,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BwstatError {
    /// Failures caused by the caller's input or the node's current mode,
    /// as opposed to internal faults. The CLI maps these to exit code 2.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BwstatError::MalformedPeerId(_)
                | BwstatError::MalformedProtocolId(_)
                | BwstatError::ConflictingScope
                | BwstatError::InvalidInterval(_)
                | BwstatError::NotOperational
        )
    }
}

pub type BwstatResult<T> = Result<T, BwstatError>;
