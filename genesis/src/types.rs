use std::{collections::BTreeMap, ops::Deref};

use alloy::primitives::Address;
use serde::{ser::SerializeMap, Serialize, Serializer};

use common::utils::address_to_hex_string;
use config::GenesisSpec;

/// One `alloc` entry. Values are copied from the dump as written; a field is absent when the
/// section that defines it never mentioned the address.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenesisAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<BTreeMap<String, String>>,
}

/// Genesis allocation keyed by address. Serialized keys are `0x`-prefixed lowercase hex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alloc(BTreeMap<Address, GenesisAccount>);

impl Alloc {
    pub fn new(accounts: BTreeMap<Address, GenesisAccount>) -> Self {
        Self(accounts)
    }

    pub fn into_inner(self) -> BTreeMap<Address, GenesisAccount> {
        self.0
    }
}

impl Deref for Alloc {
    type Target = BTreeMap<Address, GenesisAccount>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Serialize for Alloc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (address, account) in &self.0 {
            map.serialize_entry(&address_to_hex_string(address), account)?;
        }
        map.end()
    }
}

/// A complete genesis document: the static network spec followed by the allocation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Genesis {
    #[serde(flatten)]
    pub spec: GenesisSpec,
    pub alloc: Alloc,
}
