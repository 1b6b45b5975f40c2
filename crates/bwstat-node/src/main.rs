mod cli;

use bwstat_node::NodeConfig;
use bwstat_types::BwstatResult;
use clap::Parser;
use cli::{init_logging, run_bw, show_version, Cli, Commands};
use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(cli: Cli) -> BwstatResult<()> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| {
        dirs::home_dir()
            .map(|h| h.join(".bwstat"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/bwstat"))
    });
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| NodeConfig::default_path(&data_dir));

    match cli.command {
        Commands::Bw {
            ref peer,
            ref proto,
            poll,
            ref interval,
        } => {
            let config = NodeConfig::load(&config_path)?;
            init_logging(&cli, &config.logging);
            run_bw(config, peer.clone(), proto.clone(), poll, interval, &cli.format).await
        }
        Commands::Version => {
            show_version();
            Ok(())
        }
    }
}
