use serde::{Deserialize, Serialize};

/// A transaction as returned by `eth_getBlockByNumber` with full transaction objects. Every
/// numeric and byte field stays a hex string until it is canonicalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    #[serde(rename = "type")]
    pub tx_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    pub nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,
    #[serde(rename = "gas")]
    pub gas_limit: Option<String>,
    pub to: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "input")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_list: Option<Vec<RpcAccessListItem>>,
    pub v: Option<String>,
    pub r: Option<String>,
    pub s: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RpcAccessListItem {
    pub address: String,
    pub storage_keys: Vec<String>,
}

/// Header fields of a provider block. They are copied into the payload without being parsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlockHeader {
    pub hash: String,
    pub number: String,
    pub parent_hash: String,
    pub miner: String,
    pub mix_hash: String,
    pub state_root: String,
    pub receipts_root: String,
    pub logs_bloom: String,
    pub gas_limit: String,
    pub gas_used: String,
    pub timestamp: String,
    pub extra_data: String,
    pub base_fee_per_gas: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RpcBlock {
    #[serde(flatten)]
    pub header: RpcBlockHeader,
    pub transactions: Vec<RpcTransaction>,
}
