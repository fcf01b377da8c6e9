// src/bin/cli.rs
use clap::Parser;
use robot_guide::{ cli, log };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init_cli();

    cli::run(cli::Cli::parse())?;
    Ok(())
}
