use clap::Parser;
use tracing_subscriber::EnvFilter;

use credvault::cli::{Cli, Commands};

fn main() {
    // RUST_LOG=credvault=debug for verbose output.  Secrets are never logged.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("credvault=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => credvault::cli::commands::init::execute(&cli),
        Commands::Status => credvault::cli::commands::status::execute(&cli),
        Commands::Add {
            ref service,
            ref secret,
            generate,
            policy,
        } => credvault::cli::commands::add::execute(
            &cli,
            service,
            secret.as_deref(),
            generate,
            policy,
        ),
        Commands::List { show } => credvault::cli::commands::list::execute(&cli, show),
        Commands::Delete { id, force } => credvault::cli::commands::delete::execute(&cli, id, force),
        Commands::Copy { id } => credvault::cli::commands::copy::execute(&cli, id),
        Commands::Generate { policy } => credvault::cli::commands::generate::execute(policy),
        Commands::ChangePassword => credvault::cli::commands::change_password::execute(&cli),
        Commands::Export {
            ref format,
            ref output,
        } => credvault::cli::commands::export::execute(&cli, format, output.as_deref()),
        Commands::Db { ref path } => credvault::cli::commands::db::execute(&cli, path),
        Commands::Completions { ref shell } => {
            credvault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        credvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
