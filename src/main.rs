use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use means_test::cli::{
    handle_allowances_command, handle_cmi_command, handle_evaluate_command, handle_median_command,
    handle_tables_command, AllowancesArgs, CmiArgs, EvaluateArgs, MedianArgs, TablesCommands,
};
use means_test::config::{paths::MeansTestPaths, settings::Settings};
use means_test::standards::StandardsTables;
use means_test::telemetry;

#[derive(Parser)]
#[command(
    name = "means-test",
    author = "Kaylee Beyene",
    version,
    about = "Chapter 7 means test and IRS allowance calculator",
    long_about = "means-test applies the Chapter 7 bankruptcy means test: it averages \
                  six months of income, compares it with the state median and, for \
                  above-median households, weighs disposable income against the \
                  presumption-of-abuse thresholds using the IRS Collection Financial \
                  Standards."
)]
struct Cli {
    /// JSON table set to use instead of the configured one
    #[arg(long, global = true, env = "MEANS_TEST_STANDARDS")]
    standards: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the means test for a household
    #[command(alias = "eval")]
    Evaluate(EvaluateArgs),

    /// Show the IRS allowance breakdown for a household
    Allowances(AllowancesArgs),

    /// Compute Current Monthly Income from a CSV ledger
    Cmi(CmiArgs),

    /// Look up the state median family income
    Median(MedianArgs),

    /// Inspect or export the standards tables
    #[command(subcommand)]
    Tables(TablesCommands),

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = MeansTestPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    telemetry::init(&settings.log_level)?;

    // --standards is taken relative to the working directory
    let standards_override = cli.standards.as_deref();
    let standards_source = settings.standards_source(&paths, standards_override);

    let load_tables = |settings: &Settings| -> Result<StandardsTables> {
        settings
            .load_tables(&paths, standards_override)
            .context("Failed to load standards tables")
    };

    match cli.command {
        Some(Commands::Evaluate(args)) => {
            let tables = load_tables(&settings)?;
            handle_evaluate_command(&settings, &tables, args)?;
        }
        Some(Commands::Allowances(args)) => {
            let tables = load_tables(&settings)?;
            handle_allowances_command(&settings, &tables, args)?;
        }
        Some(Commands::Cmi(args)) => {
            handle_cmi_command(&settings, args)?;
        }
        Some(Commands::Median(args)) => {
            let tables = load_tables(&settings)?;
            handle_median_command(&settings, &tables, args)?;
        }
        Some(Commands::Tables(cmd)) => {
            let tables = load_tables(&settings)?;
            handle_tables_command(standards_source.as_deref(), &tables, cmd)?;
        }
        Some(Commands::Init) => {
            if paths.settings_file().exists() {
                println!("Settings already exist at {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("means-test Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Disposable income policy: {}", settings.disposable_income_policy);
            match &standards_source {
                Some(file) => println!("  Standards file:           {}", file.display()),
                None => println!("  Standards file:           builtin"),
            }
            println!("  Currency symbol:          {}", settings.currency_symbol);
            println!("  Log level:                {}", settings.log_level);
        }
        None => {
            println!("means-test - Chapter 7 means test calculator");
            println!();
            println!("Run 'means-test --help' for usage information.");
            println!("Run 'means-test evaluate --state CA --income 4200' to get started.");
        }
    }

    Ok(())
}
