use anyhow::Result;
use clap::Parser;
use sql2go_cli::Cli;

fn main() -> Result<()> {
    sql2go_cli::init_logging();

    let cli = Cli::parse();
    let output = cli.run()?;

    print!("{output}");

    Ok(())
}
