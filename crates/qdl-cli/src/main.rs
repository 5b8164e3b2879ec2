use clap::Parser;
use qdl_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // A missing URL exits here with usage and a non-zero status.
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    if let Err(err) = cli.run() {
        eprintln!("qiita-dl error: {:#}", err);
        std::process::exit(1);
    }
}
