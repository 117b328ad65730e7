//! Camptown - a static-site generator for single-album HTML5 players.

mod asset;
mod cli;
mod config;
mod embed;
mod generator;
mod logger;
mod markdown;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose > 0);

    cli::run(&cli)
}
