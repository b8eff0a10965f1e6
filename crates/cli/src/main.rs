use clap::{Args, Parser, Subcommand};
use ferrous_doh_domain::{CliOverrides, RecordType};
use tracing::info;

mod bootstrap;
mod commands;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version)]
#[command(about = "Ferrous DoH - DNS-over-HTTPS JSON resolver")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP resolution endpoint (default)
    Serve(ServeArgs),

    /// Query a running server and print the answers
    Query(QueryArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Args)]
struct QueryArgs {
    /// Hostname, IP address or URL to resolve
    name: String,

    /// Record type (A, AAAA, MX, TXT, CNAME, PTR)
    #[arg(short = 't', long = "type", default_value = "A", value_parser = parse_record_type)]
    record_type: RecordType,

    /// Base URL of the server
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,
}

fn parse_record_type(value: &str) -> Result<RecordType, String> {
    value
        .parse()
        .map_err(|v| format!("type '{v}' is not supported"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Query(args)) => {
            commands::query::run(&args.server, &args.name, args.record_type).await
        }
        Some(Command::Serve(args)) => serve(args).await,
        None => serve(cli.serve).await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let cli_overrides = CliOverrides {
        port: args.port,
        bind_address: args.bind,
        log_level: args.log_level,
    };

    let config = bootstrap::load_config(args.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous DoH v{}", env!("CARGO_PKG_VERSION"));

    let app_state = di::build_app_state(&config)?;
    let listen_addr = config.listen_addr()?;

    server::start_web_server(listen_addr, app_state, &config.server.cors_allowed_origins).await?;

    info!("Server shutdown complete");
    Ok(())
}
