use clap::Parser;

use stockbook_cli::cli::Cli;

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let cli = Cli::parse();
    stockbook_cli::commands::run(cli)
}
