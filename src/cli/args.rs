//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Locale, navbar and sidebar resolver for the toollib docs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docs.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate locale keys, sidebar keys and links
    #[command(visible_alias = "c")]
    Check {
        /// Config files to check (default: the `--config` file)
        #[arg(value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
        paths: Vec<PathBuf>,

        /// Treat warnings as errors
        #[arg(long, short = 'W')]
        deny_warnings: bool,
    },

    /// Show the locale and sidebar that serve request paths
    #[command(visible_alias = "l")]
    Locate {
        #[command(flatten)]
        args: LocateArgs,
    },

    /// Print the resolved configuration as JSON
    #[command(visible_alias = "d")]
    Dump {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Locate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LocateArgs {
    /// Request paths, e.g. `/en/guide/introduce` (percent-encoding allowed)
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Output JSON instead of text
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_locate() {
        let cli = Cli::try_parse_from(["toollib-docs", "locate", "/en/guide/", "/zh/", "--json"])
            .unwrap();
        match cli.command {
            Commands::Locate { args } => {
                assert_eq!(args.paths, ["/en/guide/", "/zh/"]);
                assert!(args.json);
                assert!(!args.pretty);
            }
            other => panic!("expected locate, got {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("docs.toml"));
    }

    #[test]
    fn test_parse_check_with_global_config() {
        let cli = Cli::try_parse_from(["toollib-docs", "check", "-C", "site/docs.json", "-W"])
            .unwrap();
        assert_eq!(cli.config, PathBuf::from("site/docs.json"));
        assert!(matches!(
            cli.command,
            Commands::Check { ref paths, deny_warnings: true } if paths.is_empty()
        ));
    }

    #[test]
    fn test_locate_requires_path() {
        assert!(Cli::try_parse_from(["toollib-docs", "locate"]).is_err());
    }

    #[test]
    fn test_pretty_requires_json() {
        assert!(Cli::try_parse_from(["toollib-docs", "locate", "/", "--pretty"]).is_err());
    }
}
