//! toollib-docs - resolve and check the toollib documentation site config.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use toollib_docs::cli::{self, Cli, Commands, common::load_site};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    toollib_docs::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check {
            paths,
            deny_warnings,
        } => cli::check::check_configs(&cli, paths, *deny_warnings),
        Commands::Locate { args } => cli::locate::run_locate(args, &load_site(&cli)?),
        Commands::Dump { pretty } => cli::dump::run_dump(&load_site(&cli)?, *pretty),
    }
}
