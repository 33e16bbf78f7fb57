mod commands;
mod error;
mod logger;

use crate::commands::Commands;
use crate::error::Error;
use crate::logger::Logger;
use clap::Parser;

#[derive(Parser)]
#[command(
    arg_required_else_help = true,
    name = "ampref",
    version,
    about = "CLI tool for maintaining the declaration of provisioned resource attributes",
    long_about = "Regenerates, validates and queries the generated declaration describing which attributes (ARN, name, region, roles) each provisioned backend function exports."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), Error> {
    Logger::init();

    let cli = Cli::parse();

    // Match all commands here, in one place
    Ok(match cli.command {
        Commands::Generate(cmd) => commands::generate::run(&cmd)?,
        Commands::Validate(cmd) => commands::validate::run(&cmd)?,
        Commands::List(cmd) => commands::list::run(&cmd)?,
        Commands::Check(cmd) => commands::check::run(&cmd)?,
    })
}
