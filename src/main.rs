//! Addition Service (v1)
//!
//! Serves a two-field form and adds the submitted numbers on the server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                    ┌──────────────────────────────────────────────┐
//!     ───────────────────────────┼─▶ GET /        page.rs ─▶ static/index.html  │
//!                                │                                              │
//!     ───────────────────────────┼─▶ POST /sumar  sum.rs  ─▶ calc::add          │
//!     ◀──────────────────────────┼── {"a","b","resultado"} | {"error"}          │
//!                                │                                              │
//!                                │  config · observability · security          │
//!                                │  lifecycle (startup, signals, shutdown)      │
//!                                └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use sum_service::lifecycle::startup::{start, Overrides, StartupOptions};

#[derive(Parser)]
#[command(name = "sum-service")]
#[command(about = "Web form and JSON endpoint that add two numbers", long_about = None)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind (default: all interfaces).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (default: 5000).
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbose error bodies and config auto-reload.
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let options = StartupOptions {
        config_path: args.config,
        overrides: Overrides {
            host: args.host,
            port: args.port,
            debug: args.debug,
        },
    };

    start(options).await?;
    Ok(())
}
