use clap::Parser;

use siteplan::cli::{self, Cli};
use siteplan::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    cli::run(cli)
}
