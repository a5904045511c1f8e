use clap::Parser;
use spmx::cli::{run, Cli};
use spmx::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    run(cli)
}
