use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "bwstat")]
#[command(version = BUILD_VERSION)]
#[command(about = "Bandwidth statistics for a running node")]
#[command(long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[arg(short, long, global = true, value_name = "FILE", help = "Path to config file")]
    pub config: Option<PathBuf>,

    #[arg(short = 'd', long, global = true, value_name = "DIR", env = "BWSTAT_DATA_DIR", help = "Data directory path")]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[arg(long, global = true, value_name = "FILE", help = "Write logs to file")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, default_value = "text", help = "Output format")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print bandwidth information")]
    #[command(long_about = "Print bandwidth usage for the node: TotalIn, TotalOut, RateIn, RateOut.\n\nBy default overall totals are shown. Use --peer to limit the query to one remote peer, or --proto to limit it to one wire protocol (for example /ipfs/bitswap). The two filters cannot be combined.")]
    Bw {
        #[arg(short, long, value_name = "PEER-ID", help = "Print bandwidth for a single peer")]
        peer: Option<String>,

        #[arg(short = 't', long, value_name = "PROTOCOL", help = "Print bandwidth for a single protocol")]
        proto: Option<String>,

        #[arg(long, help = "Keep printing bandwidth at a fixed interval until interrupted")]
        poll: bool,

        #[arg(short, long, default_value = "1s", value_name = "DURATION", help = "Time to wait between updates when polling (e.g. \"500ms\", \"10s\", \"5m\")")]
        interval: String,
    },

    #[command(about = "Show version information")]
    Version,
}
