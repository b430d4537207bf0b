//! phi-primer - a terminal primer on IIT's Φ
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use phi_primer::common::prelude::*;
use phi_primer::{run, RunOptions};

/// phi-primer - a terminal primer on IIT's Φ
#[derive(Parser, Debug)]
#[command(name = "phip")]
#[command(about = "A terminal primer on Integrated Information Theory's Φ", long_about = None)]
struct Args {
    /// Render icons as plain ASCII instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,

    /// Write a default config file to the user config directory and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    run(RunOptions {
        ascii: args.ascii,
        init_config: args.init_config,
    })
    .await
}
