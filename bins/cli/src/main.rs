//! Mizan command-line front end.
//!
//! Reads a trial balance CSV and a classification template, then derives
//! IFRS financial statements.

mod export;
mod input;
mod output;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use mizan_core::fiscal::{COMBINED, available_periods};
use mizan_core::ledger::{
    ClassifiedAccount, LedgerEntry, apply_mapping, check_trial_balance, entries_for_period,
};
use mizan_core::reports::{EngineOptions, PeriodStatements, ReportError, StatementService};
use mizan_shared::{AppConfig, AppError, telemetry};
use tracing::{error, info, warn};

use output::OutputFormat;

/// Derive IFRS financial statements from a classified trial balance
#[derive(Parser)]
#[command(name = "mizan", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format; defaults to `output.format` from configuration
    #[arg(long, global = true)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the reporting periods in a trial balance, newest first
    Periods(LedgerArgs),
    /// Check that total debits equal total credits
    Check(CheckArgs),
    /// Derive the financial statements
    Statements(StatementsArgs),
    /// Export the classified trial balance as CSV
    ExportMapping(ExportArgs),
}

#[derive(Args)]
struct LedgerArgs {
    /// Trial balance CSV (account_code,account_name,period,debit,credit)
    #[arg(long, short)]
    ledger: PathBuf,
}

#[derive(Args)]
struct CheckArgs {
    #[command(flatten)]
    input: LedgerArgs,

    /// Period to check; all rows when omitted or "Combined"
    #[arg(long, short)]
    period: Option<String>,
}

#[derive(Args)]
struct StatementsArgs {
    #[command(flatten)]
    input: LedgerArgs,

    /// Classification template (JSON array)
    #[arg(long, short)]
    mapping: PathBuf,

    /// Period to report on; defaults to the first selectable period
    #[arg(long, short, conflicts_with = "all")]
    period: Option<String>,

    /// Derive every selectable period
    #[arg(long)]
    all: bool,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    input: LedgerArgs,

    /// Classification template (JSON array)
    #[arg(long, short)]
    mapping: PathBuf,

    /// Period to export; "Combined" merges all periods. Every row when omitted
    #[arg(long, short)]
    period: Option<String>,

    /// Destination file; stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    telemetry::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let app_error = err.downcast_ref::<AppError>();
            if let Some(app_error) = app_error {
                error!(code = app_error.error_code(), "Command failed");
            }
            eprintln!("error: {err:#}");
            let code = app_error.map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;
    let options = EngineOptions::from(&config.engine);
    let format = match cli.format {
        Some(format) => format,
        None => config.output.format.parse()?,
    };

    match cli.command {
        Commands::Periods(args) => periods(&args, &options, format),
        Commands::Check(args) => check(&args, &options, format),
        Commands::Statements(args) => statements(&args, &options, format),
        Commands::ExportMapping(args) => export_mapping(&args),
    }
}

fn periods(args: &LedgerArgs, options: &EngineOptions, format: OutputFormat) -> anyhow::Result<()> {
    let entries = input::read_ledger_file(&args.ledger)?;
    let periods = available_periods(&entry_periods(&entries), &options.period_ordering);

    match format {
        OutputFormat::Json => println!("{}", output::to_json(&periods)?),
        OutputFormat::Table => println!("{}", output::periods_table(&periods)),
    }
    Ok(())
}

fn check(args: &CheckArgs, options: &EngineOptions, format: OutputFormat) -> anyhow::Result<()> {
    let entries = input::read_ledger_file(&args.input.ledger)?;
    let period = args.period.as_deref().unwrap_or(COMBINED);

    let selected = entries_for_period(&entries, period);
    if selected.is_empty() && period != COMBINED {
        return Err(AppError::NotFound(format!("period {period}")).into());
    }

    let result = check_trial_balance(&selected, options.tolerance);
    match format {
        OutputFormat::Json => println!("{}", output::to_json(&result)?),
        OutputFormat::Table => println!("{}", output::check_table(period, &result)),
    }

    if !result.is_balanced {
        return Err(AppError::Validation(format!(
            "trial balance for {period} is out by {}",
            result.difference
        ))
        .into());
    }
    Ok(())
}

fn statements(
    args: &StatementsArgs,
    options: &EngineOptions,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let accounts = classified(&args.input.ledger, &args.mapping)?;

    let derived = if args.all {
        StatementService::generate_all(&accounts, options)
    } else {
        let period = StatementService::resolve_period(&accounts, args.period.as_deref(), options)
            .map_err(report_error)?;
        let derivation = StatementService::derive(&accounts, &period, options);
        vec![PeriodStatements {
            statements: derivation.statements(options.tolerance),
            period: derivation.period,
            previous_period: derivation.previous_period,
        }]
    };

    for item in &derived {
        if !item.statements.is_balanced(options.tolerance) {
            warn!(
                period = %item.period,
                total_assets = %item.statements.total_assets(),
                total_equity_and_liabilities = %item.statements.total_equity_and_liabilities(),
                "Financial position does not balance"
            );
        }
    }
    info!(periods = derived.len(), "Derived statements");

    match (format, args.all) {
        (OutputFormat::Json, true) => println!("{}", output::to_json(&derived)?),
        (OutputFormat::Json, false) => println!("{}", output::to_json(&derived[0])?),
        (OutputFormat::Table, _) => {
            for item in &derived {
                println!("{}", output::statements_table(item));
            }
        }
    }
    Ok(())
}

fn export_mapping(args: &ExportArgs) -> anyhow::Result<()> {
    let mut entries = input::read_ledger_file(&args.input.ledger)?;
    let template = input::read_mapping_file(&args.mapping)?;

    if let Some(period) = args.period.as_deref() {
        entries = entries_for_period(&entries, period);
        if entries.is_empty() {
            return Err(AppError::NotFound(format!("period {period}")).into());
        }
    }
    let accounts = apply_mapping(&entries, &template);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| AppError::Internal(format!("{}: {e}", path.display())))?;
            export::write_mapping(&accounts, BufWriter::new(file))?;
            info!(rows = accounts.len(), path = %path.display(), "Exported mapping");
        }
        None => export::write_mapping(&accounts, io::stdout().lock())?,
    }
    Ok(())
}

fn classified(ledger: &Path, mapping: &Path) -> anyhow::Result<Vec<ClassifiedAccount>> {
    let entries = input::read_ledger_file(ledger)?;
    let template = input::read_mapping_file(mapping)?;
    Ok(apply_mapping(&entries, &template))
}

fn entry_periods(entries: &[LedgerEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.period.as_str()).collect()
}

fn report_error(err: ReportError) -> AppError {
    match err {
        ReportError::PeriodNotFound(period) => AppError::NotFound(format!("period {period}")),
        ReportError::NoDataFound => AppError::Validation("trial balance has no rows".to_string()),
    }
}
