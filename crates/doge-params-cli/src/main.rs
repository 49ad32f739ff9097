//! Print the chain parameters a node would run with
//!
//! Performs the node's startup selection (`-testnet` / `-regtest`, in any of
//! the node's spellings and anywhere on the command line), then dumps the
//! active parameter set, optionally with the fork state at a given block
//! height.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use doge_params::{select_params_from_command_line, Base58Type, ChainParams, NetworkFlags};
use tracing::info;

#[derive(Parser)]
#[command(name = "doge-params")]
#[command(about = "Show Dogecoin chain parameters", long_about = None)]
#[command(after_help = "Network: -testnet or -regtest (also --name, -name=N, -noname); main by default")]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also report which fork rules apply at this height
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Network options follow the node's own rules, so keep them away from clap
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "doge-params".to_string());
    let (_, rest) = NetworkFlags::split_args(args);
    let cli = Cli::parse_from(std::iter::once(program).chain(rest));

    let params = selection_context(select_params_from_command_line())?;
    info!("Using {} network", params.network_id());

    match cli.format {
        Format::Json => {
            let mut value = serde_json::to_value(params.summary())?;
            if let Some(height) = cli.height {
                value["at_height"] = fork_state_json(params, height);
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Format::Text => {
            print_text(params);
            if let Some(height) = cli.height {
                print_fork_state(params, height);
            }
        }
    }

    Ok(())
}

// anyhow already prints "Error: " in front of what main returns
fn selection_context<T>(result: doge_params::Result<T>) -> anyhow::Result<T> {
    result.context("invalid network selection")
}

fn print_text(params: &ChainParams) {
    println!("network:            {}", params.network_id());
    println!("data dir:           {:?}", params.data_dir());
    println!("message start:      {}", params.message_start());
    println!("p2p / rpc port:     {} / {}", params.default_port(), params.rpc_port());
    println!("genesis:            {}", params.hash_genesis_block());
    println!("genesis time:       {}", params.genesis_block().header.time());
    println!("pow limit:          {}", params.proof_of_work_limit());
    println!(
        "retarget:           {}s / {}s = {} blocks",
        params.target_timespan(),
        params.target_spacing(),
        params.interval()
    );
    println!(
        "digishield:         from {} ({}s = {} blocks)",
        params.digishield_fork_block(),
        params.digishield_target_timespan(),
        params.digishield_interval()
    );
    println!("auxpow:             from {}", params.auxpow_start_block());
    println!("min difficulty:     {}", params.allow_min_difficulty_blocks());
    println!("require standard:   {}", params.require_standard());
    for kind in Base58Type::ALL {
        println!("{:<20}{}", format!("{kind:?}:"), hex::encode(params.base58_prefix(kind)));
    }
    for seed in params.dns_seeds() {
        println!("dns seed:           {} ({})", seed.host, seed.name);
    }
}

fn print_fork_state(params: &ChainParams, height: u32) {
    let consensus = params.consensus();
    println!("at height {height}:");
    println!("  digishield:       {}", consensus.is_digishield_active(height));
    println!("  retarget every:   {} blocks", consensus.interval_at(height));
    println!("  auxpow:           {}", consensus.is_auxpow_active(height));
    println!("  min difficulty:   {}", consensus.allows_min_difficulty_at(height));
}

fn fork_state_json(params: &ChainParams, height: u32) -> serde_json::Value {
    let consensus = params.consensus();
    serde_json::json!({
        "height": height,
        "digishield": consensus.is_digishield_active(height),
        "target_timespan": consensus.target_timespan_at(height),
        "interval": consensus.interval_at(height),
        "auxpow": consensus.is_auxpow_active(height),
        "min_difficulty": consensus.allows_min_difficulty_at(height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_error_message() {
        let both = NetworkFlags::from_args(["-testnet", "-regtest"]);
        let err = selection_context(both.network()).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "invalid network selection: Invalid combination of -regtest and -testnet"
        );
    }

    #[test]
    fn test_network_options_bypass_clap() {
        let (flags, rest) = NetworkFlags::split_args(["-testnet", "--format", "json", "--height", "10"]);
        assert!(flags.testnet);
        let cli = Cli::parse_from(std::iter::once("doge-params".to_string()).chain(rest));
        assert!(matches!(cli.format, Format::Json));
        assert_eq!(cli.height, Some(10));
    }
}
