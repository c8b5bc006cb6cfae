//! Gateway configuration CLI
//!
//! Loads a configuration file, reports what it contains, and optionally
//! evaluates a client address against the ACL chain.

use anyhow::Result;
use clap::Parser;
use redgate::Config;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Redis-over-HTTP gateway configuration tool
#[derive(Parser, Debug)]
#[command(name = "redgate")]
#[command(version)]
#[command(about = "Load a gateway configuration and evaluate its ACL chain", long_about = None)]
struct Args {
    /// Configuration file path (JSON)
    #[arg(short, long, default_value = "redgate.json")]
    config: PathBuf,

    /// Client address to evaluate against the ACL chain
    #[arg(long)]
    client: Option<Ipv4Addr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Enable JSON log format
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    if args.json_logs {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }

    let config = Config::load(&args.config);

    info!(
        redis_host = %config.redis_host,
        redis_port = config.redis_port,
        redis_auth = config.redis_auth.is_some(),
        http_host = %config.http_host,
        http_port = config.http_port,
        acl_entries = config.acls.len(),
        "Configuration loaded"
    );

    if let Some(client) = args.client {
        // First matching entry wins
        match config.acls.iter().position(|entry| entry.matches(client)) {
            Some(index) => {
                let entry = &config.acls[index];
                info!(
                    %client,
                    entry = index,
                    enabled = ?entry.enabled_commands,
                    disabled = ?entry.disabled_commands,
                    basic_auth = entry.basic_auth.is_some(),
                    "Client matches ACL entry"
                );
            }
            None => info!(%client, "Client matches no ACL entry"),
        }
    }

    Ok(())
}
