use clap::{Parser, Subcommand};
use sqldns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "sqldns")]
#[command(version)]
#[command(about = "sqldns - authoritative DNS records served from a database table")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Connection string (environment variables are expanded)
    #[arg(long)]
    dsn: Option<String>,

    /// Records table prefix
    #[arg(long)]
    table_prefix: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and print the served zones
    Zones,

    /// Resolve a name against the records table
    Lookup {
        /// Query name
        name: String,

        /// Zone to search; defaults to the longest served zone containing the name
        #[arg(short = 'z', long)]
        zone: Option<String>,

        /// Record type (A, AAAA, CNAME, SOA, ANY, ...)
        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: String,
    },

    /// Keep the zone list refreshed until interrupted
    Watch,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dsn: cli.dsn.clone(),
        table_prefix: cli.table_prefix.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting sqldns v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;
    let services = di::Services::new(&config, pool);
    bootstrap::verify_store(services.store.as_ref()).await?;

    match cli.command {
        Command::Zones => commands::zones(&services).await,
        Command::Lookup {
            name,
            zone,
            record_type,
        } => commands::lookup(&services, &name, zone.as_deref(), &record_type).await,
        Command::Watch => commands::watch(&services, config.zones.refresh_interval_secs).await,
    }
}
