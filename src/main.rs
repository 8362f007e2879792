//! protoc-gen-twirp_java_jaxrs - A protoc plugin for Twirp Java clients
//!
//! This binary reads a CodeGeneratorRequest from stdin and writes a
//! CodeGeneratorResponse to stdout, following the protoc plugin protocol.

use prost::Message;
use prost_types::compiler::CodeGeneratorResponse;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive for plugin logs
const LOG_ENV: &str = "PROTOC_GEN_TWIRP_JAVA_LOG";

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("protoc-gen-twirp_java_jaxrs: {}", e);
        std::process::exit(1);
    }
}

/// Install a stderr-only subscriber; stdout belongs to protoc
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    io::stdin().read_to_end(&mut buf)?;

    // Generator failures go back to protoc inside the response
    let response =
        protoc_gen_twirp_java_jaxrs::generate_from_bytes(&buf).unwrap_or_else(|e| {
            tracing::error!("{}", e);
            CodeGeneratorResponse {
                error: Some(e.to_string()),
                ..Default::default()
            }
        });

    tracing::debug!(files = response.file.len(), "writing response");

    let mut out = Vec::new();
    response.encode(&mut out)?;
    io::stdout().write_all(&out)?;

    Ok(())
}
