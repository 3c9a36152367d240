//! Lucky Draw - a terminal raffle
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lucky_app::config::DrawVariant;
use lucky_core::prelude::*;
use lucky_draw::LaunchOptions;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    /// Constant rapid spin, stopped with Space
    Fixed,
    /// Slowing spin that stops itself
    Decelerating,
}

impl From<Variant> for DrawVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Fixed => DrawVariant::Fixed,
            Variant::Decelerating => DrawVariant::Decelerating,
        }
    }
}

/// Lucky Draw - pick a winner from a list of names
#[derive(Parser, Debug)]
#[command(name = "lucky")]
#[command(about = "A terminal lucky draw", long_about = None)]
struct Args {
    /// File with one name per line
    #[arg(long, value_name = "FILE")]
    names: Option<PathBuf>,

    /// Draw behaviour (defaults to the config file, then fixed)
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Remove each winner from the list
    #[arg(long)]
    remove_winner: bool,

    /// Start with sound off
    #[arg(long)]
    mute: bool,

    /// Config file to use instead of .lucky/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    lucky_draw::run(LaunchOptions {
        names_file: args.names,
        variant: args.variant.map(DrawVariant::from),
        remove_winner: args.remove_winner,
        mute: args.mute,
        config: args.config,
    })
    .await
}
