mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::dashboard::DashboardArgs;
use commands::formatting::FormatArgs;
use commands::growth::GrowthArgs;
use commands::patients::TrendArgs;
use commands::period::PeriodArgs;
use commands::revenue::{KpiArgs, RevenueArgs};

/// Period-bounded clinic revenue and patient reports
#[derive(Parser)]
#[command(
    name = "clinic-report",
    version,
    about = "Period-bounded clinic revenue and patient reports",
    long_about = "Turns revenue entries and daily patient snapshots into reports for a \
                  week, month, quarter or year: per-day revenue buckets, KPIs, growth \
                  against the previous period, and patient retention trends."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log computation details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a named period to its date range
    Range(PeriodArgs),
    /// Format an amount as Moroccan Dirham
    Format(FormatArgs),
    /// Percentage change between two values
    Growth(GrowthArgs),
    /// Per-day revenue buckets with source and category breakdowns
    Revenue(RevenueArgs),
    /// Headline revenue KPIs for a range
    Kpis(KpiArgs),
    /// New-patient totals and retention for a range
    Trends(TrendArgs),
    /// Full period dashboard with growth against the previous period
    Dashboard(DashboardArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("clinic_analytics_core=debug,clinic_report=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: anyhow::Result<serde_json::Value> = match cli.command {
        Commands::Range(args) => commands::period::run_range(args),
        Commands::Format(args) => commands::formatting::run_format(args),
        Commands::Growth(args) => commands::growth::run_growth(args),
        Commands::Revenue(args) => commands::revenue::run_revenue(args),
        Commands::Kpis(args) => commands::revenue::run_kpis(args),
        Commands::Trends(args) => commands::patients::run_trends(args),
        Commands::Dashboard(args) => commands::dashboard::run_dashboard(args),
        Commands::Version => {
            println!("clinic-report {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}: {:#}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
