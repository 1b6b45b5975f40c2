use crate::config::NodeConfig;
use crate::meter::BandwidthMeter;
use crate::query::{self, CancellationToken, PollConfig, SampleStream, ScopeRequest};
use bwstat_types::BwstatResult;
use std::sync::Arc;
use tracing::debug;

/// Handle to the stats-facing state of a node: its configuration and the
/// shared traffic meter.
pub struct Node {
    config: NodeConfig,
    meter: Arc<BandwidthMeter>,
}

impl Node {
    pub fn new(config: NodeConfig) -> Self {
        debug!("node handle created in {} mode", config.mode);
        let meter = Arc::new(BandwidthMeter::new(config.is_online()));
        Self { config, meter }
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn meter(&self) -> Arc<BandwidthMeter> {
        Arc::clone(&self.meter)
    }

    /// Resolves the request and starts the sampling loop against this
    /// node's meter. Fails up front on a contradictory or malformed scope
    /// and on a non-operational meter; a successfully returned stream
    /// cannot fail afterwards.
    pub fn stream_bandwidth(
        &self,
        request: &ScopeRequest,
        poll: PollConfig,
        cancel: CancellationToken,
    ) -> BwstatResult<SampleStream> {
        let scope = request.resolve()?;
        query::stream(self.meter(), scope, poll, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkMode;
    use bwstat_types::BwstatError;

    #[tokio::test]
    async fn offline_node_cannot_stream() {
        let config = NodeConfig {
            mode: NetworkMode::Offline,
            ..Default::default()
        };
        let node = Node::new(config);
        let (_handle, token) = CancellationToken::pair();

        let result = node.stream_bandwidth(&ScopeRequest::totals(), PollConfig::single_shot(), token);
        assert!(matches!(result, Err(BwstatError::NotOperational)));
    }

    #[tokio::test]
    async fn online_node_streams_totals() {
        let node = Node::new(NodeConfig::default());
        let (_handle, token) = CancellationToken::pair();

        let mut samples = node
            .stream_bandwidth(&ScopeRequest::totals(), PollConfig::single_shot(), token)
            .unwrap();
        assert!(samples.next().await.is_some());
        assert!(samples.next().await.is_none());
    }

    #[tokio::test]
    async fn conflicting_request_fails_before_sampling() {
        let node = Node::new(NodeConfig::default());
        let (_handle, token) = CancellationToken::pair();

        let request = ScopeRequest {
            peer: Some("QmYyQSo1c1Ym7orWxLYvCrM2EmxFTANf8wXmmE7DWjhx5N".to_string()),
            protocol: Some("/ipfs/bitswap".to_string()),
        };
        let result = node.stream_bandwidth(&request, PollConfig::single_shot(), token);
        assert!(matches!(result, Err(BwstatError::ConflictingScope)));
    }
}
