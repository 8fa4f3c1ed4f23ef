#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! # Gnosis execution layer fixture tooling.
//!
//! gnosis-tools prepares the two inputs an execution client test harness needs for Gnosis and
//! Chiado: a genesis document built from a state dump, and engine API payloads built from
//! blocks downloaded over JSON-RPC.
//!
//! ## Quickstart: `prelude`
//!
//! ```no_run
//! # #[allow(unused)]
//! use gnosis_tools::prelude::*;
//! ```
//!
//! ## Breakdown of exported modules
//!
//! ### `execution`
//!
//! Transaction canonicalization (`canonicalize`), payload assembly (`ExecutionPayload`) and the
//! `ExecutionRpc` block providers `HttpRpc` and `MockRpc`.
//!
//! ### `genesis`
//!
//! The state dump parser (`parse_dump`) and the genesis document builder (`build_genesis`).
//!
//! ### `config`
//!
//! Layered configuration and the static network parameters, including the Chiado chain spec.
//!
//! ### `types`
//!
//! Generic types used across gnosis-tools.
//!
//! ### `errors`
//!
//! Errors used across gnosis-tools.

pub mod config {
    pub use config::{chiado_genesis_spec, networks, CliConfig, Config, Network};
}

pub mod execution {
    pub use execution::rpc::{http_rpc::HttpRpc, mock_rpc::MockRpc, ExecutionRpc};
    pub use execution::{canonicalize, fetch_payload, EncodedTransaction, ExecutionPayload};
}

pub mod genesis {
    pub use genesis::{build_genesis, parse_dump, Alloc, Genesis, GenesisAccount};
}

pub mod types {
    pub use common::types::BlockTag;
    pub use config::types::*;
    pub use execution::types::*;
    pub use execution::{TxType, TypedTransaction};
}

pub mod prelude {
    pub use crate::config::*;
    pub use crate::errors::*;
    pub use crate::execution::*;
    pub use crate::genesis::*;
    pub use crate::types::*;
}

pub mod errors {
    pub use common::errors::*;
    pub use execution::errors::*;
    pub use genesis::errors::*;
}
