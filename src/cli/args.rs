//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// REST API for an in-memory user resource
#[derive(Parser, Debug)]
#[command(name = "restful-web")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
///
/// Unset values fall back to the loaded configuration.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::parse_from(["restful-web", "-v", "serve", "--host", "127.0.0.1", "-p", "9000"]);

        assert!(cli.verbose);
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9000));
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::parse_from(["restful-web", "serve"]);

        assert!(!cli.verbose);
        let Commands::Serve(args) = cli.command;
        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }
}
