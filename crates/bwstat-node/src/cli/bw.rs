use super::commands::OutputFormat;
use super::utils::format_bytes;
use bwstat_node::{CancellationToken, Node, NodeConfig, PollConfig, ScopeRequest};
use bwstat_types::{BandwidthSnapshot, BwstatResult};
use std::io::Write;

pub async fn run_bw(
    config: NodeConfig,
    peer: Option<String>,
    proto: Option<String>,
    poll: bool,
    interval: &str,
    format: &OutputFormat,
) -> BwstatResult<()> {
    let node = Node::new(config);

    let request = ScopeRequest {
        peer,
        protocol: proto,
    };
    let poll_config = PollConfig::from_args(poll, interval)?;

    let (handle, token) = CancellationToken::pair();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });

    let mut samples = node.stream_bandwidth(&request, poll_config, token)?;

    let mut first = true;
    while let Some(sample) = samples.next().await {
        match format {
            OutputFormat::Json => match serde_json::to_string(&sample) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("Error: serialize sample: {}", e),
            },
            OutputFormat::Text => {
                if poll_config.enabled() {
                    print_poll_line(&sample, first);
                    first = false;
                } else {
                    print_sample(&sample);
                }
            }
        }
    }

    if poll_config.enabled() && matches!(format, OutputFormat::Text) && !first {
        println!();
    }
    Ok(())
}

fn print_sample(sample: &BandwidthSnapshot) {
    println!("Bandwidth");
    println!("TotalIn: {}", format_bytes(sample.total_in));
    println!("TotalOut: {}", format_bytes(sample.total_out));
    println!("RateIn: {}/s", format_bytes(sample.rate_in as u64));
    println!("RateOut: {}/s", format_bytes(sample.rate_out as u64));
}

fn print_poll_line(sample: &BandwidthSnapshot, first: bool) {
    if first {
        println!("Total Up\t Total Down\t Rate Up\t Rate Down");
    }
    print!(
        "\r{} \t\t {} \t\t {}/s   \t {}/s     ",
        format_bytes(sample.total_out),
        format_bytes(sample.total_in),
        format_bytes(sample.rate_out as u64),
        format_bytes(sample.rate_in as u64),
    );
    let _ = std::io::stdout().flush();
}
