use std::{fmt::Display, str::FromStr};

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use alloy_rlp::RlpEncodable;
use tracing::debug;

use common::utils::{hex_str_to_address, hex_str_to_bytes, hex_str_to_u256};

use crate::errors::TransactionError;
use crate::types::{RpcAccessListItem, RpcTransaction};

/// EIP-2718 type discriminants this crate knows how to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TxType {
    Legacy = 0,
    Eip1559 = 2,
}

impl TryFrom<u8> for TxType {
    type Error = TransactionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TxType::Legacy),
            2 => Ok(TxType::Eip1559),
            other => Err(TransactionError::UnsupportedTransactionType(format!(
                "0x{other:x}"
            ))),
        }
    }
}

impl FromStr for TxType {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || TransactionError::UnsupportedTransactionType(s.to_string());
        let digits = s.strip_prefix("0x").ok_or_else(unsupported)?;
        let value = u8::from_str_radix(digits, 16).map_err(|_| unsupported())?;

        TxType::try_from(value).map_err(|_| unsupported())
    }
}

impl Display for TxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:x}", *self as u8)
    }
}

// The field order of the structs below is the order of the encoded list. Do not reorder.

#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable)]
pub struct LegacyTransaction {
    pub nonce: U256,
    pub gas_price: U256,
    pub gas_limit: U256,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    pub v: U256,
    pub r: Bytes,
    pub s: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable)]
pub struct AccessListItem {
    pub address: Address,
    pub storage_keys: Vec<B256>,
}

#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable)]
pub struct FeeMarketTransaction {
    pub chain_id: U256,
    pub nonce: U256,
    pub max_priority_fee_per_gas: U256,
    pub max_fee_per_gas: U256,
    pub gas_limit: U256,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    pub access_list: Vec<AccessListItem>,
    pub v: U256,
    pub r: Bytes,
    pub s: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedTransaction {
    Legacy(LegacyTransaction),
    Eip1559(FeeMarketTransaction),
}

/// Canonical bytes of a transaction together with its hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTransaction {
    pub tx_type: TxType,
    /// The list encoding, preceded by the type byte for typed transactions.
    pub raw: Bytes,
    pub hash: B256,
}

impl EncodedTransaction {
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.raw))
    }
}

impl TypedTransaction {
    pub fn tx_type(&self) -> TxType {
        match self {
            Self::Legacy(_) => TxType::Legacy,
            Self::Eip1559(_) => TxType::Eip1559,
        }
    }

    pub fn encode(&self) -> EncodedTransaction {
        let tx_type = self.tx_type();
        let payload = match self {
            Self::Legacy(tx) => alloy_rlp::encode(tx),
            Self::Eip1559(tx) => alloy_rlp::encode(tx),
        };

        // The hash covers the list encoding only, never the type byte.
        let hash = keccak256(&payload);
        let raw = match tx_type {
            TxType::Legacy => payload,
            _ => [vec![tx_type as u8], payload].concat(),
        };

        debug!(
            target: "gnosis_tools::execution",
            tx_type = %tx_type,
            hash = %hash,
            "encoded transaction"
        );

        EncodedTransaction {
            tx_type,
            raw: Bytes::from(raw),
            hash,
        }
    }
}

impl TryFrom<&RpcTransaction> for TypedTransaction {
    type Error = TransactionError;

    fn try_from(tx: &RpcTransaction) -> Result<Self, Self::Error> {
        let tx_type = tx.tx_type.parse::<TxType>()?;

        let to = match &tx.to {
            Some(to) => address("to", to)?,
            None => return Err(TransactionError::ContractCreation),
        };

        let tx = match tx_type {
            TxType::Legacy => Self::Legacy(LegacyTransaction {
                nonce: quantity("nonce", &tx.nonce)?,
                gas_price: quantity("gasPrice", &tx.gas_price)?,
                gas_limit: quantity("gas", &tx.gas_limit)?,
                to,
                value: quantity("value", &tx.value)?,
                data: bytes("input", &tx.data)?,
                v: quantity("v", &tx.v)?,
                r: bytes("r", &tx.r)?,
                s: bytes("s", &tx.s)?,
            }),
            TxType::Eip1559 => Self::Eip1559(FeeMarketTransaction {
                chain_id: quantity("chainId", &tx.chain_id)?,
                nonce: quantity("nonce", &tx.nonce)?,
                max_priority_fee_per_gas: quantity(
                    "maxPriorityFeePerGas",
                    &tx.max_priority_fee_per_gas,
                )?,
                max_fee_per_gas: quantity("maxFeePerGas", &tx.max_fee_per_gas)?,
                gas_limit: quantity("gas", &tx.gas_limit)?,
                to,
                value: quantity("value", &tx.value)?,
                data: bytes("input", &tx.data)?,
                access_list: access_list(&tx.access_list)?,
                v: quantity("v", &tx.v)?,
                r: bytes("r", &tx.r)?,
                s: bytes("s", &tx.s)?,
            }),
        };

        Ok(tx)
    }
}

/// Parses a provider transaction into its typed form and encodes it.
pub fn canonicalize(tx: &RpcTransaction) -> Result<EncodedTransaction, TransactionError> {
    Ok(TypedTransaction::try_from(tx)?.encode())
}

fn required<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, TransactionError> {
    value.as_deref().ok_or(TransactionError::MissingField(field))
}

fn quantity(field: &'static str, value: &Option<String>) -> Result<U256, TransactionError> {
    let value = required(field, value)?;
    hex_str_to_u256(value).map_err(|_| TransactionError::InvalidQuantity {
        field,
        value: value.to_string(),
    })
}

fn bytes(field: &'static str, value: &Option<String>) -> Result<Bytes, TransactionError> {
    let value = required(field, value)?;
    hex_str_to_bytes(value)
        .map(Bytes::from)
        .map_err(|_| TransactionError::InvalidBytes {
            field,
            value: value.to_string(),
        })
}

fn address(field: &'static str, value: &str) -> Result<Address, TransactionError> {
    hex_str_to_address(value).map_err(|_| TransactionError::InvalidAddress {
        field,
        value: value.to_string(),
    })
}

fn storage_key(value: &str) -> Result<B256, TransactionError> {
    let invalid = || TransactionError::InvalidBytes {
        field: "storageKeys",
        value: value.to_string(),
    };

    let bytes = hex_str_to_bytes(value).map_err(|_| invalid())?;
    if bytes.len() != 32 {
        return Err(invalid());
    }

    Ok(B256::from_slice(&bytes))
}

fn access_list(
    list: &Option<Vec<RpcAccessListItem>>,
) -> Result<Vec<AccessListItem>, TransactionError> {
    let list = list
        .as_ref()
        .ok_or(TransactionError::MissingField("accessList"))?;

    list.iter()
        .map(|item| {
            Ok(AccessListItem {
                address: address("accessList", &item.address)?,
                storage_keys: item
                    .storage_keys
                    .iter()
                    .map(|key| storage_key(key))
                    .collect::<Result<_, _>>()?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloy::primitives::b256;

    use super::*;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    // Signed example transaction from EIP-155.
    fn eip155_transaction() -> RpcTransaction {
        RpcTransaction {
            tx_type: "0x0".to_string(),
            nonce: s("0x9"),
            gas_price: s("0x4a817c800"),
            gas_limit: s("0x5208"),
            to: s("0x3535353535353535353535353535353535353535"),
            value: s("0xde0b6b3a7640000"),
            data: s("0x"),
            v: s("0x25"),
            r: s("0x28ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276"),
            s: s("0x67cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83"),
            ..Default::default()
        }
    }

    // ERC-20 transfer on goerli, block explorer hash 0x2dac1b27... (over type byte and list)
    fn fee_market_transaction() -> RpcTransaction {
        RpcTransaction {
            tx_type: "0x2".to_string(),
            chain_id: s("0x5"),
            nonce: s("0x623355"),
            max_priority_fee_per_gas: s("0x9502f900"),
            max_fee_per_gas: s("0x9502f910"),
            gas_limit: s("0xea60"),
            to: s("0x326c977e6efc84e512bb9c30f76e30c160ed06fb"),
            value: s("0x0"),
            data: s("0xa9059cbb0000000000000000000000007daccf9b3c1ae2fa5c55f1c978aeef700bc83be0000000000000000000000000000000000000000000000001158e460913d00000"),
            access_list: Some(vec![]),
            v: s("0x0"),
            r: s("0xe1445466b058b6f883c0222f1b1f3e2ad9bee7b5f688813d86e3fa8f93aa868c"),
            s: s("0x786d6e7f3aefa8fe73857c65c32e4884d8ba38d0ecfb947fbffb82e8ee80c167"),
            ..Default::default()
        }
    }

    #[test]
    fn test_encode_legacy_reference() {
        let encoded = canonicalize(&eip155_transaction()).unwrap();

        assert_eq!(encoded.tx_type, TxType::Legacy);
        assert_eq!(
            encoded.to_hex(),
            "0xf86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83"
        );
        assert_eq!(
            encoded.hash,
            b256!("33469b22e9f636356c4160a87eb19df52b7412e8eac32a4a55ffe88ea8350788")
        );
    }

    #[test]
    fn test_encode_fee_market_reference() {
        let encoded = canonicalize(&fee_market_transaction()).unwrap();

        assert_eq!(encoded.tx_type, TxType::Eip1559);
        assert_eq!(
            encoded.to_hex(),
            "0x02f8b20583623355849502f900849502f91082ea6094326c977e6efc84e512bb9c30f76e30c160ed06fb80b844a9059cbb0000000000000000000000007daccf9b3c1ae2fa5c55f1c978aeef700bc83be0000000000000000000000000000000000000000000000001158e460913d00000c080a0e1445466b058b6f883c0222f1b1f3e2ad9bee7b5f688813d86e3fa8f93aa868ca0786d6e7f3aefa8fe73857c65c32e4884d8ba38d0ecfb947fbffb82e8ee80c167"
        );
        assert_eq!(
            encoded.hash,
            b256!("0dc5e93981b13f3ea1877c496352860a7d8d674f474e6cd07d087a37aa394a79")
        );
    }

    #[test]
    fn test_type_byte_prefix() {
        let encoded = canonicalize(&fee_market_transaction()).unwrap();
        let hex = encoded.to_hex();

        assert_eq!(&hex[0..2], "0x");
        assert_eq!(&hex[2..4], "02");
        assert_eq!(encoded.raw[0], TxType::Eip1559 as u8);
    }

    #[test]
    fn test_typed_hash_excludes_type_byte() {
        let encoded = canonicalize(&fee_market_transaction()).unwrap();

        assert_eq!(encoded.hash, keccak256(&encoded.raw[1..]));
        assert_ne!(encoded.hash, keccak256(&encoded.raw));

        let legacy = canonicalize(&eip155_transaction()).unwrap();
        assert_eq!(legacy.hash, keccak256(&legacy.raw));
    }

    #[test]
    fn test_encode_access_list() {
        let mut tx = fee_market_transaction();
        tx.access_list = Some(vec![RpcAccessListItem {
            address: "0x326c977e6efc84e512bb9c30f76e30c160ed06fb".to_string(),
            storage_keys: vec![
                "0x0000000000000000000000000000000000000000000000000000000000000001".to_string(),
            ],
        }]);

        let encoded = canonicalize(&tx).unwrap();
        assert!(encoded
            .to_hex()
            .contains("f838f794326c977e6efc84e512bb9c30f76e30c160ed06fbe1a00000000000000000000000000000000000000000000000000000000000000001"));
        assert_eq!(
            encoded.hash,
            b256!("47edd693e6103aca04464957abdfab1e54718f4b4598dfa3292ef67720e6539f")
        );
    }

    #[test]
    fn test_unsupported_types() {
        for tx_type in ["0x1", "0x3", "0x7e", "2", "0xzz"] {
            let mut tx = fee_market_transaction();
            tx.tx_type = tx_type.to_string();

            assert_eq!(
                canonicalize(&tx).unwrap_err(),
                TransactionError::UnsupportedTransactionType(tx_type.to_string())
            );
        }

        assert!(matches!(
            TxType::try_from(1u8),
            Err(TransactionError::UnsupportedTransactionType(_))
        ));
    }

    #[test]
    fn test_missing_field() {
        let mut tx = fee_market_transaction();
        tx.max_fee_per_gas = None;
        assert_eq!(
            canonicalize(&tx).unwrap_err(),
            TransactionError::MissingField("maxFeePerGas")
        );

        // a legacy shaped transaction declared as type 2
        let mut tx = eip155_transaction();
        tx.tx_type = "0x2".to_string();
        assert_eq!(
            canonicalize(&tx).unwrap_err(),
            TransactionError::MissingField("chainId")
        );
    }

    #[test]
    fn test_contract_creation_rejected() {
        let mut tx = eip155_transaction();
        tx.to = None;
        assert_eq!(
            canonicalize(&tx).unwrap_err(),
            TransactionError::ContractCreation
        );
    }

    #[test]
    fn test_invalid_values() {
        let mut tx = eip155_transaction();
        tx.nonce = s("0x");
        assert!(matches!(
            canonicalize(&tx),
            Err(TransactionError::InvalidQuantity { field: "nonce", .. })
        ));

        let mut tx = eip155_transaction();
        tx.to = s("0x3535");
        assert!(matches!(
            canonicalize(&tx),
            Err(TransactionError::InvalidAddress { field: "to", .. })
        ));
    }

    #[test]
    fn test_signature_bytes_kept_verbatim() {
        let mut tx = eip155_transaction();
        tx.r = s("0x0abc");

        let TypedTransaction::Legacy(legacy) = TypedTransaction::try_from(&tx).unwrap() else {
            panic!("expected a legacy transaction");
        };
        assert_eq!(legacy.r, Bytes::from(vec![0x0a, 0xbc]));

        tx.r = s("0xabc");
        let TypedTransaction::Legacy(odd) = TypedTransaction::try_from(&tx).unwrap() else {
            panic!("expected a legacy transaction");
        };
        assert_eq!(odd.r, legacy.r);
    }
}
