use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref service,
            ref username,
            ref password,
            ref notes,
        } => passvault::cli::commands::add::execute(
            &cli,
            service,
            username,
            password.as_deref(),
            notes,
        ),
        Commands::Get { ref service, copy } => {
            passvault::cli::commands::get::execute(&cli, service, copy)
        }
        Commands::List => passvault::cli::commands::list::execute(&cli),
        Commands::Update {
            ref service,
            ref username,
            ref password,
            ref notes,
        } => passvault::cli::commands::update::execute(
            &cli,
            service,
            username,
            password.as_deref(),
            notes,
        ),
        Commands::Delete { ref service, force } => {
            passvault::cli::commands::delete::execute(&cli, service, force)
        }
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
