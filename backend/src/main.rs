//! Cosmos CLI - Waitlist API server for the Cosmos Voyages landing page
//!
//! ```bash
//! cosmos                          # Listen on 0.0.0.0:8000
//! cosmos --port 9000              # Custom port
//! cosmos --static-dir dist        # Also serve the built frontend
//! ```

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cosmos")]
#[command(about = "Waitlist API server for the Cosmos Voyages landing page", long_about = None)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on (the page defaults to port 8000)
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Directory with the built frontend to serve as a fallback
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = cosmos::start_server(&cli.host, cli.port, cli.static_dir).await {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
