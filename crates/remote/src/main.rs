// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ag-queue-sim: local stand-in for the verification service's queue feed.
//!
//! Serves `/ws/queue` (and `/queue`) with synthetic jobs moving through the
//! processing stages, so `agv queue watch` can be exercised without the
//! real backend.

mod server;
mod state;

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use state::{QueueBoard, SimConfig};

/// ag-queue-sim: Simulated processing-queue server
#[derive(Parser, Debug)]
#[command(name = "ag-queue-sim")]
#[command(about = "Simulated WebSocket processing queue for the agv client")]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value = "1500")]
    tick_ms: u64,

    /// Admit a new job every N ticks (0 disables admission)
    #[arg(long, default_value = "2")]
    job_every: u32,

    /// Maximum number of jobs in flight
    #[arg(long, default_value = "5")]
    max_jobs: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting ag-queue-sim");
    info!("  Bind address: {}", args.bind);
    info!(
        "  Tick: {}ms, new job every {} ticks, at most {} jobs",
        args.tick_ms, args.job_every, args.max_jobs
    );

    let board = QueueBoard::new(SimConfig {
        job_every: args.job_every,
        max_jobs: args.max_jobs,
    });
    let interval = Duration::from_millis(args.tick_ms.max(1));
    tokio::spawn(state::run_ticker(board.clone(), interval));

    server::run(args.bind, board).await?;

    Ok(())
}
