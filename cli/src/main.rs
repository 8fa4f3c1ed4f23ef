use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Args, Parser, Subcommand};
use eyre::{eyre, Result, WrapErr};
use tracing::{error, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

use common::types::BlockTag;
use config::{chiado_genesis_spec, CliConfig, Config, Network};
use execution::fetch_payload;
use execution::rpc::http_rpc::HttpRpc;
use execution::rpc::ExecutionRpc;
use genesis::build_genesis;

#[tokio::main]
async fn main() {
    enable_tracer();

    let cli = Cli::parse();
    let res = match cli.command {
        Command::Genesis(genesis) => genesis.run(),
        Command::Blocks(blocks) => blocks.run().await,
    };

    if let Err(err) = res {
        error!(target: "gnosis_tools::runner", error = ?err);
        exit(1);
    }
}

fn enable_tracer() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()
        .expect("invalid env filter");

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("subscriber set failed");
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).wrap_err_with(|| format!("could not write {}", path.display()))
}

fn block_range(start: u64, count: u64) -> Result<Range<u64>> {
    let end = start
        .checked_add(count)
        .ok_or_else(|| eyre!("block range starting at {start} with {count} blocks overflows"))?;

    Ok(start..end)
}

#[derive(Parser)]
#[clap(version, about)]
/// Tooling for Gnosis and Chiado execution layer test fixtures
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a genesis document from a state dump
    #[clap(name = "genesis")]
    Genesis(GenesisArgs),
    /// Download blocks as engine API execution payloads
    #[clap(name = "blocks")]
    Blocks(BlocksArgs),
}

#[derive(Args)]
struct GenesisArgs {
    #[clap(short, long, default_value = "chiado")]
    network: String,
    #[clap(short, long, env = "DUMP_PATH")]
    input: Option<PathBuf>,
    #[clap(short, long, env = "GENESIS_PATH")]
    output: Option<PathBuf>,
    #[clap(short, long, env, default_value = "gnosis-tools.toml")]
    config: PathBuf,
}

impl GenesisArgs {
    fn run(&self) -> Result<()> {
        let cli_config = CliConfig {
            dump_path: self.input.clone(),
            genesis_path: self.output.clone(),
            ..Default::default()
        };
        let network = self.network.parse::<Network>()?;
        if network != Network::Chiado {
            return Err(eyre!("no genesis parameters for network {network}"));
        }
        let config = Config::from_file(&self.config, network, &cli_config)?;

        let dump = fs::read_to_string(&config.dump_path)
            .wrap_err_with(|| format!("could not read {}", config.dump_path.display()))?;
        let genesis = build_genesis(chiado_genesis_spec(), &dump)
            .wrap_err_with(|| format!("could not parse {}", config.dump_path.display()))?;

        write_json(&config.genesis_path, &genesis)?;
        info!(
            target: "gnosis_tools::runner",
            path = %config.genesis_path.display(),
            accounts = genesis.alloc.len(),
            "wrote genesis"
        );

        Ok(())
    }
}

#[derive(Args)]
struct BlocksArgs {
    #[clap(short, long, default_value = "gnosis")]
    network: String,
    #[clap(short, long, env)]
    execution_rpc: Option<String>,
    #[clap(short, long)]
    start: u64,
    #[clap(short = 'k', long, env = "BLOCK_COUNT")]
    count: Option<u64>,
    #[clap(short, long, env = "BLOCKS_DIR")]
    out_dir: Option<PathBuf>,
    #[clap(short, long, env, default_value = "gnosis-tools.toml")]
    config: PathBuf,
}

impl BlocksArgs {
    async fn run(&self) -> Result<()> {
        let cli_config = CliConfig {
            execution_rpc: self.execution_rpc.clone(),
            block_count: self.count,
            blocks_dir: self.out_dir.clone(),
            ..Default::default()
        };
        let network = self.network.parse::<Network>()?;
        let config = Config::from_file(&self.config, network, &cli_config)?;

        let rpc = HttpRpc::new(&config.execution_rpc)?;
        fs::create_dir_all(&config.blocks_dir)
            .wrap_err_with(|| format!("could not create {}", config.blocks_dir.display()))?;

        for number in block_range(self.start, config.block_count)? {
            let payload = fetch_payload(&rpc, BlockTag::Number(number)).await?;
            let path = config.block_path(number);
            write_json(&path, &payload)?;

            info!(
                target: "gnosis_tools::runner",
                block = number,
                path = %path.display(),
                "wrote payload"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_range() {
        assert_eq!(block_range(26478701, 5).unwrap(), 26478701..26478706);
        assert!(block_range(7, 0).unwrap().is_empty());
    }

    #[test]
    fn test_block_range_overflow() {
        assert!(block_range(u64::MAX, 1).is_err());
        assert_eq!(block_range(u64::MAX, 0).unwrap(), u64::MAX..u64::MAX);
    }
}
