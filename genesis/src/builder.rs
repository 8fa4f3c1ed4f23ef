use std::collections::BTreeMap;

use alloy::primitives::Address;

use crate::types::{Alloc, GenesisAccount};

/// Properties read from one line of the accounts section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProperties {
    pub nonce: String,
    pub balance: String,
    pub code: String,
}

/// Accumulates partial account records from both dump sections. The two sections write disjoint
/// fields, so the order in which they are applied does not change the result.
#[derive(Debug, Default)]
pub struct AllocBuilder {
    accounts: BTreeMap<Address, GenesisAccount>,
}

impl AllocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets nonce, balance and code. Returns `true` when an earlier accounts line already set
    /// them for this address; the new values replace the old ones.
    pub fn account(&mut self, address: Address, properties: AccountProperties) -> bool {
        let entry = self.accounts.entry(address).or_default();
        let replaced = entry.nonce.is_some();

        entry.nonce = Some(properties.nonce);
        entry.balance = Some(properties.balance);
        entry.code = Some(properties.code);

        replaced
    }

    /// Attaches a storage mapping, replacing one set by an earlier block for the same address.
    pub fn storage(&mut self, address: Address, storage: BTreeMap<String, String>) -> bool {
        let entry = self.accounts.entry(address).or_default();
        entry.storage.replace(storage).is_some()
    }

    pub fn build(self) -> Alloc {
        Alloc::new(self.accounts)
    }
}
