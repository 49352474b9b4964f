// src/bin/cli.rs
use clap::Parser;
use stav_board::{ cli, log };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Cli::parse();
    log::init_cli(args.verbose);

    cli::run(args)?;
    Ok(())
}
