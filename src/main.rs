use clap::Parser;

use dealsheet::cli::{self, CheckCommand, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Convert(args) => cli::convert::execute(args),
        Commands::Inspect(args) => cli::inspect::execute(args),
        Commands::Check(CheckCommand::Config(args)) => cli::check::execute(args),
    };

    if let Err(e) = result {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
