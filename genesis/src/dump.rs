//! Parser for plain text state dumps.
//!
//! A dump holds two sections. Storage comes first, as blocks separated by blank lines, each
//! block being an address followed by `<slot> : <value>` lines. Accounts come second, one
//! `addr=<hex>, nonce=<n>, balance=<n>, code=<hex>` line per account:
//!
//! ```text
//! ===== storage slots =====
//! 0x14747a698Ec1227e6753026C08B29b4d5D3bC484
//! 0x01 : 0x02
//!
//! ===== accounts + code =====
//! addr=14747a698ec1227e6753026c08b29b4d5d3bc484, nonce=0x0, balance=0x0, code=0x
//! ```

use std::collections::{BTreeMap, HashMap};

use alloy::primitives::Address;
use tracing::{info, warn};

use common::utils::{address_to_hex_string, hex_str_to_address};
use config::GenesisSpec;

use crate::builder::{AccountProperties, AllocBuilder};
use crate::errors::ParseError;
use crate::types::{Alloc, Genesis};

pub const ACCOUNTS_MARKER: &str = "===== accounts";
const SECTION_HEADER: &str = "=====";
const REQUIRED_KEYS: [&str; 4] = ["addr", "nonce", "balance", "code"];

/// Line number (1-based, relative to the whole dump) and content.
type NumberedLine<'a> = (usize, &'a str);
type Sections<'a> = (Vec<NumberedLine<'a>>, Vec<NumberedLine<'a>>);

/// Builds the genesis allocation from a state dump.
pub fn parse_dump(text: &str) -> Result<Alloc, ParseError> {
    let (storage, accounts) = split_sections(text)?;
    let mut builder = AllocBuilder::new();

    for (line, content) in accounts.into_iter().filter(|(_, l)| !l.trim().is_empty()) {
        let (address, properties) = parse_account_line(line, content)?;
        if builder.account(address, properties) {
            warn!(
                target: "gnosis_tools::genesis",
                line,
                address = %address_to_hex_string(&address),
                "account listed twice, keeping the later line"
            );
        }
    }

    for (header, slot_lines) in storage_blocks(&storage) {
        let (address, slots) = parse_storage_block(header, slot_lines)?;
        if builder.storage(address, slots) {
            warn!(
                target: "gnosis_tools::genesis",
                address = %address_to_hex_string(&address),
                "storage listed twice, keeping the later block"
            );
        }
    }

    let alloc = builder.build();
    info!(target: "gnosis_tools::genesis", accounts = alloc.len(), "parsed state dump");

    Ok(alloc)
}

/// Combines a network genesis spec with the allocation parsed from `dump`.
pub fn build_genesis(spec: GenesisSpec, dump: &str) -> Result<Genesis, ParseError> {
    Ok(Genesis {
        spec,
        alloc: parse_dump(dump)?,
    })
}

fn split_sections(text: &str) -> Result<Sections<'_>, ParseError> {
    let parts = text.split(ACCOUNTS_MARKER).collect::<Vec<_>>();
    let (storage, accounts) = match parts.as_slice() {
        [storage, accounts] => (*storage, *accounts),
        _ => return Err(ParseError::SectionCount(parts.len())),
    };

    let mut storage_lines = numbered(storage, 1);
    if let Some(first) = storage_lines.iter().position(|(_, l)| !l.trim().is_empty()) {
        if storage_lines[first].1.trim_start().starts_with(SECTION_HEADER) {
            storage_lines.remove(first);
        }
    }

    // The accounts part starts with the rest of the marker line.
    let marker_line = storage.matches('\n').count() + 1;
    let accounts_lines = numbered(accounts, marker_line).into_iter().skip(1).collect();

    Ok((storage_lines, accounts_lines))
}

fn numbered(text: &str, first_line: usize) -> Vec<NumberedLine<'_>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (first_line + i, line))
        .collect()
}

/// Yields the address line and slot lines of every storage block.
fn storage_blocks<'a, 'b>(
    lines: &'b [NumberedLine<'a>],
) -> impl Iterator<Item = (&'b NumberedLine<'a>, &'b [NumberedLine<'a>])> {
    lines
        .split(|(_, line)| line.trim().is_empty())
        .filter_map(|block| block.split_first())
}

fn parse_address(line: usize, value: &str) -> Result<Address, ParseError> {
    hex_str_to_address(value).map_err(|_| ParseError::InvalidAddress {
        line,
        value: value.to_string(),
    })
}

fn parse_account_line(
    line: usize,
    content: &str,
) -> Result<(Address, AccountProperties), ParseError> {
    let malformed = |reason: String| ParseError::MalformedAccountLine { line, reason };

    let mut props = HashMap::new();
    for token in content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| malformed(format!("expected key=value, found `{token}`")))?;
        props.insert(key, value);
    }

    if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !props.contains_key(*key)) {
        return Err(malformed(format!("missing required key `{missing}`")));
    }

    let address = parse_address(line, props["addr"])?;
    let properties = AccountProperties {
        nonce: props["nonce"].to_string(),
        balance: props["balance"].to_string(),
        code: props["code"].to_string(),
    };

    Ok((address, properties))
}

fn parse_storage_block(
    (line, address): &NumberedLine<'_>,
    slot_lines: &[NumberedLine<'_>],
) -> Result<(Address, BTreeMap<String, String>), ParseError> {
    let address = parse_address(*line, address.trim())?;

    let slots = slot_lines
        .iter()
        .map(|(line, content)| {
            content
                .split_once(" : ")
                .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
                .ok_or_else(|| ParseError::MalformedStorageLine {
                    line: *line,
                    content: content.to_string(),
                })
        })
        .collect::<Result<_, _>>()?;

    Ok((address, slots))
}
