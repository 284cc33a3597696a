mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result =
        commands::save::execute_save(&cli.name, cli.location.as_deref(), cli.allow_prompt);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
