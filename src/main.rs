//! minihttpd entry point
//!
//! Parses flags, wires up logging, binds the listener, and hands off to the
//! accept loop. Everything interesting happens in the library crate.

use clap::Parser;
use minihttpd::config::ServerConfig;
use minihttpd::server::Server;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "minihttpd")]
#[command(about = "Minimal HTTP/1.1 server over raw TCP", long_about = None)]
struct Args {
    /// Directory served by the /files/ routes; omit to disable them
    #[arg(long)]
    directory: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:4221")]
    listen: SocketAddr,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minihttpd=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = ServerConfig::new(args.directory);

    let server = Server::bind(args.listen, config)?;
    server.run()?;

    Ok(())
}
