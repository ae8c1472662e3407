mod cli;
mod error;
mod fmt;
mod ledger;
mod models;
mod reports;
mod settings;

use clap::Parser;

use cli::{Cli, Commands, ReportCommands};

fn main() {
    let cli = Cli::parse();
    let file = cli.file.as_deref();

    let result = match cli.command {
        None => cli::menu::run(file),
        Some(Commands::Add {
            amount,
            category,
            description,
            date,
        }) => cli::add::run(file, &amount, &category, &description, date.as_deref()),
        Some(Commands::List) => cli::list::run(file),
        Some(Commands::Report { command }) => match command {
            ReportCommands::Month { month } => cli::report::month(file, &month),
            ReportCommands::Year => cli::report::year(file),
        },
        Some(Commands::Save) => cli::save::run(file),
        Some(Commands::Status) => cli::status::run(file),
        Some(Commands::Init { ledger }) => cli::init::run(ledger),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
