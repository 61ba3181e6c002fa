use std::error::Error;

use configuration::DnsServerConfiguration;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod server;

use cli_args::CliArgs;
use server::DnsServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: CliArgs = argh::from_env();
    let cfg: DnsServerConfiguration = configuration::get_config(args.config)?;
    let address = args.bind.unwrap_or_else(|| cfg.server.bind_address());

    let server = DnsServer::bind(address).await?;
    tracing::info!("Listening on: {}, pid: {}", server.local_addr()?, std::process::id());

    server.serve().await?;

    Ok(())
}
