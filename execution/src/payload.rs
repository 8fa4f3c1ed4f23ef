use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use tracing::info;

use common::types::BlockTag;

use crate::errors::ExecutionError;
use crate::rpc::ExecutionRpc;
use crate::transaction::canonicalize;
use crate::types::{RpcBlock, RpcBlockHeader, RpcTransaction};

/// Block document handed to the engine API test harness. Header fields are carried over from
/// the provider block untouched; transactions are canonical hex strings in block order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPayload {
    pub base_fee_per_gas: String,
    pub block_hash: String,
    pub block_number: String,
    pub extra_data: String,
    pub fee_recipient: String,
    pub gas_limit: String,
    pub gas_used: String,
    pub logs_bloom: String,
    pub parent_hash: String,
    pub prev_randao: String,
    pub receipts_root: String,
    pub state_root: String,
    pub timestamp: String,
    pub transactions: Vec<String>,
}

impl ExecutionPayload {
    pub fn assemble(
        header: &RpcBlockHeader,
        transactions: &[RpcTransaction],
    ) -> Result<Self, ExecutionError> {
        let transactions = transactions
            .iter()
            .enumerate()
            .map(|(index, tx)| {
                canonicalize(tx)
                    .map(|encoded| encoded.to_hex())
                    .map_err(|source| ExecutionError::InvalidTransaction {
                        block: header.number.clone(),
                        index,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            target: "gnosis_tools::execution",
            block = %header.number,
            transactions = transactions.len(),
            "assembled payload"
        );

        Ok(Self {
            base_fee_per_gas: header.base_fee_per_gas.clone(),
            block_hash: header.hash.clone(),
            block_number: header.number.clone(),
            extra_data: header.extra_data.clone(),
            fee_recipient: header.miner.clone(),
            gas_limit: header.gas_limit.clone(),
            gas_used: header.gas_used.clone(),
            logs_bloom: header.logs_bloom.clone(),
            parent_hash: header.parent_hash.clone(),
            prev_randao: header.mix_hash.clone(),
            receipts_root: header.receipts_root.clone(),
            state_root: header.state_root.clone(),
            timestamp: header.timestamp.clone(),
            transactions,
        })
    }
}

impl TryFrom<&RpcBlock> for ExecutionPayload {
    type Error = ExecutionError;

    fn try_from(block: &RpcBlock) -> Result<Self, Self::Error> {
        Self::assemble(&block.header, &block.transactions)
    }
}

/// Fetches a single block from the provider and converts it into a payload. Nothing is retried;
/// a provider or encoding failure fails the whole block.
pub async fn fetch_payload<R: ExecutionRpc>(
    rpc: &R,
    block: BlockTag,
) -> eyre::Result<ExecutionPayload> {
    let rpc_block = rpc
        .get_block_by_number(block)
        .await
        .wrap_err_with(|| format!("could not fetch block {block}"))?;

    Ok(ExecutionPayload::try_from(&rpc_block)?)
}
