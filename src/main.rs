//! pi_status - Local Raspberry Pi Status Server Binary
//!
//! Serves the dashboard and the `/api/pi-status` endpoint on 127.0.0.1:8788.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use pi_status::{
    start_default_server, StatusCollector, StatusSnapshot, DEFAULT_BASE_DIR, DEFAULT_HOST,
    DEFAULT_PORT, STATUS_ENDPOINT,
};
use tracing::{info, Level};
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "pi_status")]
#[command(about = "🥧 pi_status - Local Raspberry Pi status server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    long_about = "Serves a static dashboard and a JSON host status endpoint on a fixed loopback address"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server (default)
    Serve,

    /// Collect a single status snapshot and exit
    Snapshot(SnapshotArgs),
}

#[derive(Args)]
struct SnapshotArgs {
    /// Output format: json or pretty
    #[arg(short, long, default_value = "pretty")]
    format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    match &cli.command {
        Some(Commands::Snapshot(args)) => snapshot_command(args).await,
        Some(Commands::Serve) | None => serve_command().await,
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    // RUST_LOG directives win over the flag-derived default
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;

    Ok(())
}

async fn serve_command() -> anyhow::Result<()> {
    println!(
        "pi_status server listening on http://{}:{}",
        DEFAULT_HOST, DEFAULT_PORT
    );
    info!("Static directory: {}", DEFAULT_BASE_DIR);
    info!("Status endpoint: {}", STATUS_ENDPOINT);

    start_default_server().await?;
    Ok(())
}

async fn snapshot_command(args: &SnapshotArgs) -> anyhow::Result<()> {
    let snapshot = tokio::task::spawn_blocking(|| StatusCollector::new().collect())
        .await
        .context("Snapshot collection failed")?;

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&snapshot)?;
            println!("{}", json);
        }
        "pretty" => print_pretty_snapshot(&snapshot),
        other => bail!("Unsupported format: {}. Use 'json' or 'pretty'", other),
    }

    Ok(())
}

fn print_pretty_snapshot(snapshot: &StatusSnapshot) {
    let taken_at = chrono::DateTime::from_timestamp(snapshot.time, 0)
        .unwrap_or_default()
        .format("%Y-%m-%d %H:%M:%S UTC");

    println!("🥧 {} ({})", snapshot.hostname, taken_at);
    println!("==========================================");
    println!("  Temperature: {}", or_dash(snapshot.cpu_temp_c.map(|t| format!("{:.1}°C", t))));
    println!("  Load (1m):   {}", or_dash(snapshot.load1.map(|l| format!("{:.2}", l))));
    println!(
        "  Memory:      {}",
        or_dash(snapshot.mem.map(|m| format!("{}/{} GB ({}%)", m.used_gb, m.total_gb, m.used_pct)))
    );
    println!(
        "  Disk:        {}",
        or_dash(snapshot.disk.map(|d| format!("{}/{} GB ({}%)", d.used_gb, d.total_gb, d.used_pct)))
    );
    println!("  Uptime:      {}", or_dash(snapshot.uptime.clone()));
    println!("  IP:          {}", or_dash(snapshot.ip.clone()));
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_serve() {
        let cli = Cli::try_parse_from(["pi_status"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.debug);
    }

    #[test]
    fn test_snapshot_format_parsing() {
        let cli = Cli::try_parse_from(["pi_status", "snapshot", "--format", "json"]).unwrap();
        match cli.command {
            Some(Commands::Snapshot(args)) => assert_eq!(args.format, "json"),
            _ => panic!("expected snapshot command"),
        }
    }

    #[test]
    fn test_port_is_not_configurable() {
        assert!(Cli::try_parse_from(["pi_status", "--port", "9090"]).is_err());
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "--");
        assert_eq!(or_dash(Some("1h 0m".to_string())), "1h 0m");
    }
}
