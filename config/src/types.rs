use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Static part of a genesis document. The `alloc` section is produced separately from a state
/// dump and appended by the genesis crate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenesisSpec {
    pub config: ChainSpec,
    pub base_fee_per_gas: String,
    pub difficulty: String,
    pub gas_limit: String,
    pub seal: Seal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChainSpec {
    pub chain_id: u64,
    pub consensus: String,
    pub homestead_block: u64,
    pub eip150_block: u64,
    pub eip155_block: u64,
    pub byzantium_block: u64,
    pub constantinople_block: u64,
    pub petersburg_block: u64,
    pub istanbul_block: u64,
    pub berlin_block: u64,
    pub london_block: u64,
    pub burnt_contract: BTreeMap<u64, String>,
    pub terminal_total_difficulty: u64,
    pub terminal_total_difficulty_passed: bool,
    pub shanghai_time: u64,
    pub cancun_time: u64,
    pub min_blob_gas_price: u64,
    pub max_blob_gas_per_block: u64,
    pub target_blob_gas_per_block: u64,
    pub blob_gas_price_update_fraction: u64,
    pub aura: AuraSpec,
    #[serde(rename = "eip1559collector")]
    pub eip1559_collector: String,
}

/// Authority round engine parameters. Maps keyed by block number hold transitions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuraSpec {
    pub step_duration: u64,
    pub block_reward: u64,
    pub maximum_uncle_count_transition: u64,
    pub maximum_uncle_count: u64,
    pub validators: ValidatorSet,
    pub block_reward_contract_address: String,
    pub block_reward_contract_transition: u64,
    pub randomness_contract_address: BTreeMap<u64, String>,
    pub withdrawal_contract_address: String,
    pub two_thirds_majority_transition: u64,
    pub posdao_transition: u64,
    pub block_gas_limit_contract_transitions: BTreeMap<u64, String>,
    pub registrar: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidatorSet {
    pub multi: BTreeMap<u64, ValidatorList>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidatorList {
    pub list: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Seal {
    pub authority_round: AuthorityRoundSeal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthorityRoundSeal {
    pub step: String,
    pub signature: String,
}
