use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use eyre::{eyre, Result};

use crate::base::BaseConfig;
use crate::types::{
    AuraSpec, AuthorityRoundSeal, ChainSpec, GenesisSpec, Seal, ValidatorList, ValidatorSet,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    Gnosis,
    Chiado,
}

impl Network {
    pub fn to_base_config(&self) -> BaseConfig {
        match self {
            Self::Gnosis => gnosis(),
            Self::Chiado => chiado(),
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gnosis => f.write_str("gnosis"),
            Self::Chiado => f.write_str("chiado"),
        }
    }
}

impl FromStr for Network {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gnosis" => Ok(Self::Gnosis),
            "chiado" => Ok(Self::Chiado),
            _ => Err(eyre!("network not recognized: {s}")),
        }
    }
}

pub fn gnosis() -> BaseConfig {
    BaseConfig {
        execution_rpc: Some("https://1rpc.io/gnosis".to_string()),
        ..Default::default()
    }
}

pub fn chiado() -> BaseConfig {
    BaseConfig {
        execution_rpc: Some("https://rpc.chiadochain.net".to_string()),
        ..Default::default()
    }
}

const CHIADO_BOOT_VALIDATOR: &str = "0x14747a698Ec1227e6753026C08B29b4d5D3bC484";

/// Genesis parameters for Chiado, the Gnosis testnet.
pub fn chiado_genesis_spec() -> GenesisSpec {
    let validators = ValidatorSet {
        multi: BTreeMap::from([
            (
                0,
                ValidatorList {
                    list: vec![CHIADO_BOOT_VALIDATOR.to_string()],
                },
            ),
            (
                67334,
                ValidatorList {
                    list: [
                        CHIADO_BOOT_VALIDATOR,
                        "0x56D421c0AC39976E89fa400d34ca6579417B84cA",
                        "0x5CD99ac2F0F8C25a1e670F6BaB19D52Aad69D875",
                        "0x60F1CF46B42Df059b98Acf67C1dD7771b100e124",
                        "0x655e97bA0f63A56c2b56EB3e84f7bf42b20Bae14",
                        "0x755B6259938D140626301c0B6026c1C00C9eD5d9",
                        "0xa8010da9Cb0AC018C86A06301963853CC371a18c",
                    ]
                    .map(String::from)
                    .to_vec(),
                },
            ),
        ]),
    };

    GenesisSpec {
        config: ChainSpec {
            chain_id: 10200,
            consensus: "aura".to_string(),
            homestead_block: 0,
            eip150_block: 0,
            eip155_block: 0,
            byzantium_block: 0,
            constantinople_block: 0,
            petersburg_block: 0,
            istanbul_block: 0,
            berlin_block: 0,
            london_block: 0,
            burnt_contract: BTreeMap::from([(
                0,
                "0x1559000000000000000000000000000000000000".to_string(),
            )]),
            terminal_total_difficulty: 0,
            terminal_total_difficulty_passed: true,
            shanghai_time: 1704401480,
            cancun_time: 1704403000,
            min_blob_gas_price: 1000000000,
            max_blob_gas_per_block: 262144,
            target_blob_gas_per_block: 131072,
            blob_gas_price_update_fraction: 1112826,
            aura: AuraSpec {
                step_duration: 5,
                block_reward: 0,
                maximum_uncle_count_transition: 0,
                maximum_uncle_count: 0,
                validators,
                block_reward_contract_address: "0x2000000000000000000000000000000000000001"
                    .to_string(),
                block_reward_contract_transition: 0,
                randomness_contract_address: BTreeMap::from([(
                    0,
                    "0x3000000000000000000000000000000000000001".to_string(),
                )]),
                withdrawal_contract_address: "0xbabe2bed00000000000000000000000000000003"
                    .to_string(),
                two_thirds_majority_transition: 0,
                posdao_transition: 0,
                block_gas_limit_contract_transitions: BTreeMap::from([(
                    0,
                    "0x4000000000000000000000000000000000000001".to_string(),
                )]),
                registrar: "0x6000000000000000000000000000000000000000".to_string(),
            },
            eip1559_collector: "0x1559000000000000000000000000000000000000".to_string(),
        },
        base_fee_per_gas: "0x3b9aca00".to_string(),
        difficulty: "0x01".to_string(),
        gas_limit: "0x989680".to_string(),
        seal: Seal {
            authority_round: AuthorityRoundSeal {
                step: "0x0".to_string(),
                signature: format!("0x{}", "0".repeat(130)),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_names() {
        for network in [Network::Gnosis, Network::Chiado] {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
        assert!("mainnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_chiado_genesis_spec_layout() {
        let spec = serde_json::to_value(chiado_genesis_spec()).unwrap();

        assert_eq!(spec["config"]["chainId"], 10200);
        assert_eq!(spec["config"]["eip150Block"], 0);
        assert_eq!(spec["config"]["terminalTotalDifficultyPassed"], true);
        assert_eq!(
            spec["config"]["eip1559collector"],
            "0x1559000000000000000000000000000000000000"
        );
        assert_eq!(
            spec["config"]["burntContract"]["0"],
            "0x1559000000000000000000000000000000000000"
        );
        assert_eq!(
            spec["config"]["aura"]["validators"]["multi"]["67334"]["list"]
                .as_array()
                .unwrap()
                .len(),
            7
        );
        assert_eq!(spec["baseFeePerGas"], "0x3b9aca00");
        assert_eq!(
            spec["seal"]["authorityRound"]["signature"]
                .as_str()
                .unwrap()
                .len(),
            132
        );
    }
}
