use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_budget_command, handle_category_command, handle_report_command,
    handle_transaction_command,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::models::Month;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker for the terminal",
    long_about = "fintrack records income and expenses, tracks monthly budgets per \
                  category, and summarizes your spending with charts and insights."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(fintrack::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(fintrack::cli::BudgetCommands),

    /// Category commands
    #[command(subcommand)]
    Category(fintrack::cli::CategoryCommands),

    /// Dashboard, charts, and insights
    #[command(subcommand)]
    Report(fintrack::cli::ReportCommands),

    /// Recompute this month's budget spending from the transaction history
    Recompute,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings shown to config.json
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fintrack::logging::init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Recompute) => {
            // stored `spent` always tracks the current month
            let month = Month::current();
            storage.recompute_budgets(month)?;
            println!(
                "Recomputed {} budgets for {}",
                storage.budgets.count()?,
                month.label()
            );
        }
        Some(Commands::History { count }) => {
            let entries = storage.audit().read_recent(count)?;
            if entries.is_empty() {
                println!("No history yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config { save }) => {
            if save {
                settings.save(&paths)?;
            }

            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budgets file:      {}", paths.budgets_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Recent transactions: {}", settings.recent_transactions);
            if save {
                println!();
                println!("Saved settings to {}", paths.settings_file().display());
            }
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack report dashboard' for this month's summary.");
        }
    }

    Ok(())
}
