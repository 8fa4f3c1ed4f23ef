use std::path::PathBuf;

use serde::Serialize;

/// The base configuration for a network.
#[derive(Serialize, Debug, Clone)]
pub struct BaseConfig {
    pub execution_rpc: Option<String>,
    pub blocks_dir: PathBuf,
    pub block_count: u64,
    pub dump_path: PathBuf,
    pub genesis_path: PathBuf,
}

impl Default for BaseConfig {
    fn default() -> Self {
        BaseConfig {
            execution_rpc: None,
            blocks_dir: PathBuf::from("blocks"),
            block_count: 5,
            dump_path: PathBuf::from("chiado_allocs_gballet.txt"),
            genesis_path: PathBuf::from("chiado_genesis_alloc.json"),
        }
    }
}
