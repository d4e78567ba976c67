use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{handle_categories_command, CategoryArgs};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::display::format_transaction_register;
use tally::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal personal finance tracker",
    long_about = "Tally records income and expense transactions and manages the \
                  categories they are filed under, from an interactive terminal UI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// List the default categories
    Categories(CategoryArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, settings and logging
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&paths, &settings)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            let transactions = tally::tui::run_tui(&settings)?;
            print!(
                "{}",
                format_transaction_register(
                    &transactions,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }
        Some(Commands::Categories(args)) => {
            handle_categories_command(args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Tally at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            tracing::info!(path = %paths.settings_file().display(), "settings written");
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Run 'tally' to launch the interactive interface.");
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Tick rate:       {}ms", settings.tick_rate_ms);
            println!("  Log filter:      {}", settings.log_filter);
        }
    }

    Ok(())
}
