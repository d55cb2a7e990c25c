use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_add, handle_config, handle_export, handle_import, handle_init, handle_list,
    handle_report, run_interactive, AppContext, ExportFormat,
};
use budget_tracker::config::BudgetPaths;
use budget_tracker::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker",
    long_about = "Records income and expenses in a plain text file, keeps a running \
                  balance and reports spending by category. Run without a command \
                  for the interactive menu."
)]
struct Cli {
    /// Data file to use instead of the configured one
    #[arg(short, long, global = true, env = "BUDGET_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    #[command(alias = "menu")]
    Interactive,

    /// Add a transaction
    Add {
        /// 'income' or 'expense'
        kind: String,
        /// Non-negative amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List all transactions and the current balance
    #[command(alias = "ls")]
    List,

    /// Show expenses by category
    Report {
        /// Also export the report to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export transactions
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Append the transactions of a JSON export to the data file
    Import {
        /// JSON file written by `export json`
        #[arg(id = "import_file", value_name = "FILE")]
        file: PathBuf,
    },

    /// Write the settings file with current values
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let ctx = AppContext::new(paths, cli.file)?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => run_interactive(&ctx)?,
        Commands::Add {
            kind,
            amount,
            description,
            category,
        } => handle_add(&ctx, &kind, &amount, description, category)?,
        Commands::List => handle_list(&ctx)?,
        Commands::Report { output } => handle_report(&ctx, output)?,
        Commands::Export { format, output } => handle_export(&ctx, format, output)?,
        Commands::Import { file } => handle_import(&ctx, &file)?,
        Commands::Init => handle_init(&ctx)?,
        Commands::Config => handle_config(&ctx),
    }

    Ok(())
}
