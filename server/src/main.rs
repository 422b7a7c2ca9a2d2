//! Keymint License Server
//!
//! Issues cryptographically signed license tokens over HTTP. The signing
//! key and issuer certificate are loaded once at startup and shared
//! read-only across requests; a provisioning failure aborts the process
//! before the listener binds.
//!
//! Usage:
//!   keymint-server --key signing_key.pem --cert issuer.pem --port 8080
//!
//! The server is stateless: issued licenses are returned to the caller
//! and never stored.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use keymint_license::{LicenseSigner, SignatureDigest, SigningMaterial};
use keymint_server::build_router;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "keymint-server")]
#[command(about = "HTTP license issuing service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Path to the PEM-encoded private signing key
    #[arg(short, long, default_value = "signing_key.pem")]
    key: PathBuf,

    /// Path to the PEM-encoded issuer certificate
    #[arg(short, long, default_value = "issuer.pem")]
    cert: PathBuf,

    /// Digest algorithm inside the signature (sha1 for legacy verifiers)
    #[arg(long, default_value = "sha1")]
    digest: SignatureDigest,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Keymint license server starting...");
    let material = SigningMaterial::load(&args.key, &args.cert)
        .context("Failed to load signing key material")?;
    info!("Issuer: {}", material.issuer_subject());

    let signer = Arc::new(LicenseSigner::with_digest(material, args.digest));
    let app = build_router(signer);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .context("Failed to bind HTTP port")?;
    info!("Listening on port {}", args.port);
    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
