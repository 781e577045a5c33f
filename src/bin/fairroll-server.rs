//! HTTP server exposing `/roll-dice` and `/verify-roll`.

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use fairroll::seed::OsSeedSource;
use fairroll::server::config::{DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT};
use fairroll::server::{self, ServerConfigBuilder};

#[derive(Parser, Debug)]
#[command(name = "fairroll-server", about = "Provably fair die roll server")]
struct Args {
    /// Address to bind.
    #[arg(long, env = "FAIRROLL_HOST", default_value = DEFAULT_HOST)]
    host: String,

    #[arg(short, long, env = "FAIRROLL_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Disable permissive CORS headers and preflight handling.
    #[arg(long, env = "FAIRROLL_NO_CORS")]
    no_cors: bool,

    /// Largest accepted request body, in bytes.
    #[arg(long, env = "FAIRROLL_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    server::setup_logger();
    let args = Args::parse();

    let config = ServerConfigBuilder::default()
        .host(args.host)
        .port(args.port)
        .cors(!args.no_cors)
        .max_body_bytes(args.max_body_bytes)
        .build_validated()?;

    server::serve(config, Arc::new(OsSeedSource)).await?;
    Ok(())
}
