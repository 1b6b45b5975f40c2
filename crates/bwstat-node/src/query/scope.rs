use crate::meter::BandwidthReporter;
use bwstat_types::{BandwidthSnapshot, BwstatError, BwstatResult};
use libp2p::PeerId;
use std::str::FromStr;

/// Raw scope filters as they arrive from the caller, before validation.
/// Both absent means whole-node totals.
#[derive(Clone, Debug, Default)]
pub struct ScopeRequest {
    pub peer: Option<String>,
    pub protocol: Option<String>,
}

impl ScopeRequest {
    pub fn totals() -> Self {
        Self::default()
    }

    pub fn peer(id: impl Into<String>) -> Self {
        Self {
            peer: Some(id.into()),
            protocol: None,
        }
    }

    pub fn protocol(id: impl Into<String>) -> Self {
        Self {
            peer: None,
            protocol: Some(id.into()),
        }
    }

    /// Collapses the two optional filters into exactly one query target.
    ///
    /// Peer and protocol are mutually exclusive: the meter is keyed by one
    /// dimension at a time. Peer ids must decode with the canonical base58
    /// text encoding; protocol ids are opaque but must be non-empty.
    pub fn resolve(&self) -> BwstatResult<Scope> {
        match (&self.peer, &self.protocol) {
            (Some(_), Some(_)) => Err(BwstatError::ConflictingScope),
            (Some(peer), None) => {
                let id = PeerId::from_str(peer)
                    .map_err(|e| BwstatError::MalformedPeerId(format!("{}: {}", peer, e)))?;
                Ok(Scope::Peer(id))
            }
            (None, Some(protocol)) => {
                if protocol.is_empty() {
                    return Err(BwstatError::MalformedProtocolId(
                        "protocol id must be non-empty".to_string(),
                    ));
                }
                Ok(Scope::Protocol(protocol.clone()))
            }
            (None, None) => Ok(Scope::Totals),
        }
    }
}

/// A validated query target. The invalid "both filters set" state is not
/// representable here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    Totals,
    Peer(PeerId),
    Protocol(String),
}

impl Scope {
    pub(crate) fn sample(&self, reporter: &dyn BandwidthReporter) -> BandwidthSnapshot {
        match self {
            Scope::Totals => reporter.totals(),
            Scope::Peer(id) => reporter.for_peer(id),
            Scope::Protocol(protocol) => reporter.for_protocol(protocol),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Totals => write!(f, "totals"),
            Scope::Peer(id) => write!(f, "peer {}", id),
            Scope::Protocol(protocol) => write!(f, "protocol {}", protocol),
        }
    }
}
