use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_calc_command, handle_currency_command, handle_export_command, handle_goal_command,
    handle_import_command, handle_report_command, handle_transaction_command, CalcCommands,
    CurrencyCommands, ExportCommands, GoalCommands, ImportCommands, ReportCommands,
    TransactionCommands,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "fintrack records income and expenses, summarizes them over rolling \
                  periods and ships loan, split, ROI and inflation calculators."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Analytics and dashboard reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Financial calculators
    #[command(subcommand)]
    Calc(CalcCommands),

    /// Exchange rates and conversion
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import data
    #[command(subcommand)]
    Import(ImportCommands),

    /// Initialize fintrack
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FINTRACK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("fintrack=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        // Calculators need no data directory
        Some(Commands::Calc(cmd)) => handle_calc_command(cmd)?,
        Some(command) => run(command)?,
        None => {
            println!("fintrack - Terminal-based personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    Ok(())
}

fn run(command: Commands) -> Result<()> {
    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    match command {
        Commands::Transaction(cmd) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Commands::Goal(cmd) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Commands::Currency(cmd) => {
            handle_currency_command(&storage, &settings, cmd)?;
        }
        Commands::Export(cmd) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        Commands::Import(cmd) => {
            handle_import_command(&storage, &settings, cmd)?;
        }
        Commands::Calc(cmd) => {
            handle_calc_command(cmd)?;
        }
        Commands::Init => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("User:          {}", settings.user_id);
            println!("Base currency: {}", settings.base_currency);
            println!();
            println!("Run 'fintrack transaction add expense 12.50 home' to record a transaction.");
        }
        Commands::Config => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Rates file:     {}", settings.rates_path(&paths).display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  User:          {}", settings.user_id);
            println!("  Base currency: {}", settings.base_currency);
            println!("  Default range: {}", settings.default_range);
            println!("  Date format:   {}", settings.date_format);
        }
    }

    Ok(())
}
