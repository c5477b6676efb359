//! Read-only ledger API

use crate::models::{Block, BlockchainStats, BlocksResponse, UiResult};
use crate::services::api_client::ApiClient;
use crate::services::config::endpoints;

#[derive(Clone, PartialEq)]
pub struct BlockchainApi {
    client: ApiClient,
}

impl BlockchainApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> UiResult<BlockchainStats> {
        self.client.get_public_json(endpoints::BLOCKCHAIN_STATS).await
    }

    /// Blocks newest first
    pub async fn blocks(&self) -> UiResult<Vec<Block>> {
        let response: BlocksResponse = self
            .client
            .get_public_json(endpoints::BLOCKCHAIN_BLOCKS)
            .await?;
        let mut blocks = response.blocks;
        blocks.sort_by(|a, b| b.index.cmp(&a.index));
        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::testing::admin_client;

    #[tokio::test]
    async fn test_blocks_sorted_newest_first() {
        let (client, transport) = admin_client();
        let block = |index: u64| {
            serde_json::json!({
                "index": index,
                "timestamp": "2025-01-01T00:00:00Z",
                "data": {},
                "previous_hash": "0",
                "hash": format!("h{}", index),
                "nonce": 0
            })
        };
        transport.respond(200, serde_json::json!({ "blocks": [block(0), block(2), block(1)] }));

        let blocks = BlockchainApi::new(client).blocks().await.unwrap();
        let order: Vec<u64> = blocks.iter().map(|b| b.index).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[tokio::test]
    async fn test_stats_error_surfaces() {
        let (client, transport) = admin_client();
        transport.respond(503, serde_json::json!({ "error": "fabric offline" }));

        let err = BlockchainApi::new(client).stats().await.unwrap_err();
        assert_eq!(err.user_message(), "Server error: fabric offline");
    }
}
