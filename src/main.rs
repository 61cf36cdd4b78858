mod browser;
mod cli;
mod dashboard;
mod download;
mod error;
mod filter;
mod fixtures;
mod loader;
mod logging;
mod models;
mod settings;
mod store;
mod summary;
mod tui;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let data = cli.data.as_deref();

    let command = cli.command.unwrap_or(Commands::Browse {
        from_date: None,
        to_date: None,
    });
    if !matches!(command, Commands::Browse { .. }) {
        logging::init_stderr();
    }

    let result = match command {
        Commands::Browse { from_date, to_date } => cli::browse::run(data, from_date, to_date),
        Commands::List {
            from_date,
            to_date,
            json,
        } => cli::list::run(data, from_date, to_date, json),
        Commands::Download { ids, output } => cli::download::run(data, &ids, output),
        Commands::Config {
            data_file,
            manifest_dir,
            log_file,
            report_count,
        } => cli::config::run(data_file, manifest_dir, log_file, report_count),
        Commands::Status => cli::status::run(data),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
