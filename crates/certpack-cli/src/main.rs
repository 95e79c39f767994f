//! certpack - bundle a client's TLS credentials into one JSON file.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use certpack_cli::{Config, Provisioner};
use certpack_core::{ClientId, MarkerPolicy};

/// Packs `ca.crt`, `<CLIENT_ID>.key` and `<CLIENT_ID>.crt` into
/// `<CLIENT_ID>.certs.json`
#[derive(Debug, Parser)]
#[command(name = "certpack")]
#[command(version, long_about = None)]
struct Cli {
    /// Client identifier, also the stem of its key and certificate files
    client_id: String,

    /// Directory holding the input files
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Directory to write the bundle to (defaults to --dir)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// CA certificate file name inside --dir
    #[arg(long, default_value = "ca.crt")]
    ca_cert: String,

    /// Fail if the client certificate has no BEGIN CERTIFICATE line
    #[arg(long)]
    require_marker: bool,

    /// Do not echo the bundle to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            input_dir: self.dir.clone(),
            output_dir: self.out_dir.clone().unwrap_or_else(|| self.dir.clone()),
            ca_cert_file: self.ca_cert.clone(),
            marker_policy: if self.require_marker {
                MarkerPolicy::Require
            } else {
                MarkerPolicy::Passthrough
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the bundle
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client_id = ClientId::new(cli.client_id.clone());
    let provisioner = Provisioner::new(cli.config());

    info!(
        client_id = %client_id,
        dir = %provisioner.config().input_dir.display(),
        "Packing credentials"
    );

    let bundle = provisioner.load(&client_id)?;

    if !cli.quiet {
        println!("{}", bundle);
    }

    provisioner.write(&bundle)?;

    Ok(())
}
