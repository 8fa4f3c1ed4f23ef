use async_trait::async_trait;
use eyre::Result;

use common::types::BlockTag;

use crate::types::RpcBlock;

pub mod http_rpc;
pub mod mock_rpc;

#[async_trait]
pub trait ExecutionRpc: Send + Clone + Sync + 'static {
    fn new(rpc: &str) -> Result<Self>
    where
        Self: Sized;

    /// Fetches a block together with its full transaction objects.
    async fn get_block_by_number(&self, block: BlockTag) -> Result<RpcBlock>;
}
