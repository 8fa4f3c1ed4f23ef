use std::{fs::read_to_string, path::PathBuf};

use async_trait::async_trait;
use eyre::Result;

use common::types::BlockTag;

use super::ExecutionRpc;
use crate::types::RpcBlock;

/// Serves blocks from `block_<number>.json` files, falling back to `block.json`.
#[derive(Clone)]
pub struct MockRpc {
    path: PathBuf,
}

#[async_trait]
impl ExecutionRpc for MockRpc {
    fn new(rpc: &str) -> Result<Self> {
        let path = PathBuf::from(rpc);
        Ok(MockRpc { path })
    }

    async fn get_block_by_number(&self, block: BlockTag) -> Result<RpcBlock> {
        let numbered = match block {
            BlockTag::Number(num) => Some(self.path.join(format!("block_{num}.json"))),
            _ => None,
        };

        let file = numbered
            .filter(|path| path.exists())
            .unwrap_or_else(|| self.path.join("block.json"));

        let block = read_to_string(file)?;
        Ok(serde_json::from_str(&block)?)
    }
}
