use clap::Parser;
use iterdns_domain::{CliOverrides, Config, DomainError, DomainName};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "iterdns")]
#[command(version)]
#[command(about = "Iterative DNS resolver: walks the delegation tree from a root nameserver to an A record")]
struct Cli {
    /// Domain name to resolve (the trailing dot is optional)
    #[arg(short = 't', long)]
    target: String,

    /// Nameserver to start from instead of the root (IPv4)
    #[arg(short = 'n', long)]
    nameserver: Option<String>,

    /// Queries allowed per lookup
    #[arg(long)]
    max_iterations: Option<u32>,

    /// Nested nameserver lookups allowed
    #[arg(long)]
    max_depth: Option<u32>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Destination port for queries
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Set the RD flag on outgoing queries
    #[arg(long, overrides_with = "no_recursion_desired")]
    recursion_desired: bool,

    /// Clear the RD flag even if the configuration file sets it
    #[arg(long, overrides_with = "recursion_desired")]
    no_recursion_desired: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    /// `None` leaves the configured RD flag alone.
    fn recursion_desired_override(&self) -> Option<bool> {
        if self.recursion_desired {
            Some(true)
        } else if self.no_recursion_desired {
            Some(false)
        } else {
            None
        }
    }
}

fn parse_target(raw: &str) -> Result<DomainName, DomainError> {
    DomainName::parse(raw).inspect_err(|e| {
        if raw.trim().is_empty() {
            error!(error = %e, "Target is required");
        } else {
            error!(target_name = %raw, error = %e, "Invalid target");
        }
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        nameserver: cli.nameserver.clone(),
        max_iterations: cli.max_iterations,
        max_depth: cli.max_depth,
        query_timeout: cli.timeout,
        port: cli.port,
        recursion_desired: cli.recursion_desired_override(),
        log_level: cli.log_level.clone(),
        log_format: cli.log_format.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);
    debug!(
        path = ?cli.config.clone().or_else(Config::get_config_path),
        "Configuration loaded"
    );

    let target = parse_target(&cli.target)?;

    let services = di::DnsServices::new(&config)?;

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping after the current query");
            on_signal.cancel();
        }
    });

    match services
        .resolve_name
        .execute_with_cancel(&target, &cancel)
        .await
    {
        Ok(ip) => {
            info!(domain = %target, ip = %ip, "Got result");
            println!("{}", ip);
            Ok(())
        }
        Err(e) => {
            error!(domain = %target, error = %e, "Error in resolving");
            Err(e.into())
        }
    }
}
