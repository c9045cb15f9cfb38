use anyhow::Context;
use clap::Parser;
use hospital_trends::prompt::{MAX_PROMPT_ATTEMPTS, prompt_for_period};
use hospital_trends::utils::logging::print_report;
use hospital_trends::{ReportConfig, ReportingPeriod, SqliteSource, run_report};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hospital-trends",
    about = "Update the hospital trend table and long-stay log for one reporting month",
    version
)]
struct Cli {
    /// Date range as START,END, ie 2019-03-01,2019-03-31 (default: last completed month)
    #[arg(long, conflicts_with = "prompt")]
    params: Option<String>,

    /// Ask for the reporting month (MM/YYYY) on the terminal
    #[arg(long)]
    prompt: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = match &cli.config {
        Some(path) => ReportConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => ReportConfig::default(),
    };

    let period = resolve_period(&cli)?;
    info!("Reporting period: {period}");

    let source = SqliteSource::open(&config.database).with_context(|| {
        format!(
            "Failed to open admissions database {}",
            config.database.display()
        )
    })?;

    let report = run_report(&source, &period, &config)
        .with_context(|| format!("Failed to update reports for {}", period.display_label()))?;

    print_report(&report);
    println!("Done");
    Ok(())
}

fn resolve_period(cli: &Cli) -> anyhow::Result<ReportingPeriod> {
    if let Some(params) = &cli.params {
        return params
            .parse()
            .with_context(|| format!("Invalid --params value '{params}'"));
    }

    if cli.prompt {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        return Ok(prompt_for_period(&mut input, &mut output, MAX_PROMPT_ATTEMPTS)?);
    }

    let today = chrono::Local::now().date_naive();
    Ok(ReportingPeriod::last_completed_month(today)?)
}
