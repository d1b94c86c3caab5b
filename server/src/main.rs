use clap::ArgAction;
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use last_resort_server::cli::database_migration::{check_migration_state, run_migrations};
use last_resort_server::cli::print_report::{print_report, ReportName};
use last_resort_server::cli_error::CliError;
use log::{error, warn};

fn main() {
    let args = CliArgs::parse();
    let dotenv_result = dotenv();

    let env = env_logger::Env::new().filter_or(
        "RUST_LOG",
        match args.global_opts.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        },
    );
    env_logger::Builder::from_env(env).init();
    if let Err(e) = dotenv_result {
        warn!("Could not read .env file: {}", e);
    }

    if let Err(e) = run_command(args.command) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_command(command: Command) -> Result<(), CliError> {
    match command {
        Command::Serve => last_resort_server::web::serve(),
        Command::MigrateDatabase => run_migrations(),
        Command::CheckDatabase => {
            check_migration_state()?;
            println!("Database schema is up to date.");
            Ok(())
        }
        Command::PrintReport { report } => print_report(report),
    }
}

/// Reporting web application of the Hotel Last Resort
#[derive(Debug, Parser)]
#[clap(name = "last-resort", version)]
pub struct CliArgs {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the hotel web application
    Serve,
    /// Create the missing tables of the hotel database
    MigrateDatabase,
    /// Check if all tables of the hotel database have been created
    CheckDatabase,
    /// Print a single report to stdout
    PrintReport {
        /// The report to print
        #[clap(value_enum)]
        report: ReportName,
    },
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Verbosity level (can be specified multiple times)
    #[clap(long, short, global = true, action = ArgAction::Count)]
    verbose: u8,
}
