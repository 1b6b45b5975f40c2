mod bw;
mod commands;
mod utils;

pub use bw::run_bw;
pub use commands::{Cli, Commands, OutputFormat};
pub use utils::{init_logging, show_version};
