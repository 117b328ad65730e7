//! Command-line interface definitions.

use clap::{ArgAction, ColorChoice, Parser};
use std::path::PathBuf;

use crate::markdown::RenderOptions;

/// Build a single-album HTML5 player
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Album file (JSON, or TOML with a .toml extension)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input_file: PathBuf,

    /// Output directory, created if missing
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub output_dir: PathBuf,

    /// Show debug output and list every generated file
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Typeset lyrics (curly quotes, dashes, ellipses)
    #[arg(long)]
    pub smart_lyrics: bool,

    /// Leave `about` text exactly as written
    #[arg(long)]
    pub plain_prose: bool,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            smart_prose: !self.plain_prose,
            smart_lyrics: self.smart_lyrics,
            ..RenderOptions::default()
        }
    }
}
