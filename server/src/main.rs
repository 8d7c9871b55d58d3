//! Blog static server
//!
//! Binary entry point. `cargo leptos serve` sets the site root and address
//! through `LEPTOS_SITE_ROOT` and `LEPTOS_SITE_ADDR`.

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the static server.
#[derive(Parser)]
#[command(name = "server", version, about = "Serve the built blog")]
struct Cli {
    /// Directory produced by the site build
    #[arg(long, env = "LEPTOS_SITE_ROOT", default_value = "target/site")]
    site_root: PathBuf,

    /// Address to listen on
    #[arg(long, env = "LEPTOS_SITE_ADDR", default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    server::init_tracing(cli.verbose);

    server::serve(&cli.site_root, cli.addr).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_custom_values() {
        let args = [
            "server",
            "--site-root",
            "dist",
            "--addr",
            "0.0.0.0:8080",
            "-vv",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.site_root, PathBuf::from("dist"));
        assert_eq!(cli.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_bad_address() {
        let result = Cli::try_parse_from(["server", "--addr", "not-an-address"]);
        assert!(result.is_err());
    }
}
