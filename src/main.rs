use clap::Parser;
use std::process::exit;

use orpheus::cli::{dispatch, Cli};

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = dispatch(cli) {
        eprintln!("orpheus: {e:#}");
        exit(1);
    }
}
