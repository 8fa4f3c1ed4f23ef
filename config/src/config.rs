use std::path::{Path, PathBuf};

use eyre::{eyre, Result};
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::CliConfig;
use crate::networks::Network;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub execution_rpc: String,
    pub blocks_dir: PathBuf,
    pub block_count: u64,
    pub dump_path: PathBuf,
    pub genesis_path: PathBuf,
}

impl Config {
    /// Layers the network defaults, the `[<network>]` table of the TOML file at `config_path`
    /// and the command line overrides, in that order.
    pub fn from_file(
        config_path: &Path,
        network: Network,
        cli_config: &CliConfig,
    ) -> Result<Self> {
        let profile = network.to_string();

        let base_provider = Serialized::from(network.to_base_config(), profile.as_str());
        let toml_provider = Toml::file(config_path).nested();
        let cli_provider = cli_config.as_provider(profile.as_str());

        let config_res = Figment::new()
            .merge(base_provider)
            .merge(toml_provider)
            .merge(cli_provider)
            .select(profile.as_str())
            .extract();

        config_res.map_err(|err| match &err.kind {
            figment::error::Kind::MissingField(field) => {
                let field = field.replace('_', "-");
                eyre!(
                    "missing configuration field: {field}. try supplying the proper command line \
                     argument --{field}, or add it to the [{profile}] table of the config file"
                )
            }
            figment::error::Kind::InvalidType(_, _) => {
                let field = err.path.join(".").replace('_', "-");
                eyre!("invalid configuration field: {field}")
            }
            _ => eyre!("cannot parse configuration: {err}"),
        })
    }

    pub fn block_path(&self, number: u64) -> PathBuf {
        self.blocks_dir.join(format!("block_{number}.json"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_network_defaults() {
        let file = write_toml("");
        let config =
            Config::from_file(file.path(), Network::Gnosis, &CliConfig::default()).unwrap();

        assert_eq!(config.execution_rpc, "https://1rpc.io/gnosis");
        assert_eq!(config.block_count, 5);
        assert_eq!(
            config.block_path(26478701),
            PathBuf::from("blocks/block_26478701.json")
        );
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let file = write_toml(
            r#"
            [chiado]
            execution_rpc = "http://localhost:8545"
            dump_path = "allocs.txt"

            [gnosis]
            block_count = 12
            "#,
        );

        let config =
            Config::from_file(file.path(), Network::Chiado, &CliConfig::default()).unwrap();
        assert_eq!(config.execution_rpc, "http://localhost:8545");
        assert_eq!(config.dump_path, PathBuf::from("allocs.txt"));
        assert_eq!(config.block_count, 5);
    }

    #[test]
    fn test_cli_overrides_toml() {
        let file = write_toml(
            r#"
            [gnosis]
            execution_rpc = "http://localhost:8545"
            block_count = 12
            "#,
        );

        let cli_config = CliConfig {
            execution_rpc: Some("http://localhost:9545".to_string()),
            blocks_dir: Some(PathBuf::from("out")),
            ..Default::default()
        };

        let config = Config::from_file(file.path(), Network::Gnosis, &cli_config).unwrap();
        assert_eq!(config.execution_rpc, "http://localhost:9545");
        assert_eq!(config.blocks_dir, PathBuf::from("out"));
        assert_eq!(config.block_count, 12);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let path = Path::new("/nonexistent/gnosis-tools.toml");
        let config = Config::from_file(path, Network::Chiado, &CliConfig::default()).unwrap();

        assert_eq!(config.execution_rpc, "https://rpc.chiadochain.net");
        assert_eq!(config.genesis_path, PathBuf::from("chiado_genesis_alloc.json"));
    }
}
