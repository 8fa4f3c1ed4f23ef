use std::{collections::HashMap, path::PathBuf};

use figment::{providers::Serialized, value::Value};
use serde::{Deserialize, Serialize};

/// Cli Config
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CliConfig {
    pub execution_rpc: Option<String>,
    pub blocks_dir: Option<PathBuf>,
    pub block_count: Option<u64>,
    pub dump_path: Option<PathBuf>,
    pub genesis_path: Option<PathBuf>,
}

impl CliConfig {
    pub fn as_provider(&self, network: &str) -> Serialized<HashMap<&str, Value>> {
        let mut user_dict = HashMap::new();

        if let Some(rpc) = &self.execution_rpc {
            user_dict.insert("execution_rpc", Value::from(rpc.clone()));
        }

        if let Some(dir) = &self.blocks_dir {
            user_dict.insert("blocks_dir", Value::from(dir.to_string_lossy().to_string()));
        }

        if let Some(count) = self.block_count {
            user_dict.insert("block_count", Value::from(count));
        }

        if let Some(path) = &self.dump_path {
            user_dict.insert("dump_path", Value::from(path.to_string_lossy().to_string()));
        }

        if let Some(path) = &self.genesis_path {
            user_dict.insert(
                "genesis_path",
                Value::from(path.to_string_lossy().to_string()),
            );
        }

        Serialized::from(user_dict, network)
    }
}
