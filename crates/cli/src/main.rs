use clap::Parser;
use ferrous_recursor_application::ports::AnswerCachePort;
use ferrous_recursor_domain::CliOverrides;
use ferrous_recursor_infrastructure::dns::DnsServerHandler;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-recursor")]
#[command(version)]
#[command(about = "Ferrous Recursor - iterative DNS resolver with a persistent answer cache")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Answer cache file
    #[arg(long, value_name = "FILE")]
    cache_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.port,
        bind_address: cli.bind.clone(),
        cache_path: cli.cache_file.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Recursor v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;
    info!(
        roots = dns_services.resolver.root_hints().len(),
        cached_names = dns_services.cache.as_ref().map_or(0, |cache| cache.len()),
        "DNS services ready"
    );
    let handler = DnsServerHandler::new(dns_services.handler_use_case);

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    server::start_dns_server(dns_addr, handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
