use anyhow::Context;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use crate::app_state::AppState;
use crate::config_loader::load_config;
use crate::key_material::KeyPair;
use crate::orpheusweb::build_router;

/// Top-level CLI interface for Orpheus
#[derive(Parser)]
#[command(
    name = "orpheus",
    version = "0.1.0",
    about = "Orpheus agricultural fintech demo service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API (session, dashboard, transact endpoints)
    Serve {
        /// Host/IP to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate a new identifier pair
    GenerateKey {
        /// Directory to write orpheus-keys.txt into (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

pub fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve { host, port } => serve(host, port),
        Commands::GenerateKey { output } => generate_key(output),
    }
}

fn serve(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let config = load_config().context("failed to load config")?;
    let host = host.unwrap_or_else(|| config.bind_host.clone());
    let port = port.unwrap_or(config.bind_port);

    let state = Arc::new(AppState::from_config(&config)?);
    let app = build_router(state);

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")?;

    rt.block_on(async move {
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .with_context(|| format!("invalid bind address {host}:{port}"))?;
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!("HTTP server listening on http://{addr}");
        axum::serve(listener, app).await.context("server error")?;
        Ok(())
    })
}

fn generate_key(output: Option<String>) -> anyhow::Result<()> {
    let pair = KeyPair::generate();
    match output {
        Some(dir) => {
            let path = pair.write_key_file(Path::new(&dir))?;
            println!("Key pair saved to: {}", path.display());
        }
        None => println!("{}", pair.export_text()),
    }
    Ok(())
}
