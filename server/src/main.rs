//! AY Docs server
//!
//! Serves the compiled client-side site and validates its configuration.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the AY docs server.
#[derive(Parser)]
#[command(
    name = "aydocs-server",
    version,
    about = "Static server for the AY language documentation site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "aydocs.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the compiled site
    Serve {
        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,
    },
    /// Validate configuration and page sections
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    server::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { port, host } => {
            server::cmd::serve::run(&cli.config, port, host).await?;
        }
        Commands::Check { strict } => {
            server::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_serve_command_parsing() {
        let args = ["aydocs-server", "serve", "--port", "8080", "--host", "0.0.0.0"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("aydocs.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_serve_defaults_to_config() {
        let args = ["aydocs-server", "serve"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Serve { port, host } => {
                assert!(port.is_none());
                assert!(host.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["aydocs-server", "--config", "site.toml", "check", "--strict"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["aydocs-server", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let result = Cli::try_parse_from(["aydocs-server"]);
        assert!(result.is_err());
    }
}
