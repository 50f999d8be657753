use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use txoutcome::application::runner::OutcomeRunner;
use txoutcome::config::{AppConfig, ProviderKey};
use txoutcome::domain::ports::{NotifierBox, SubmitterBox};
use txoutcome::domain::tokens::Tokens;
use txoutcome::infrastructure::console::TracingNotifier;
use txoutcome::infrastructure::in_memory::ReplaySubmitter;
use txoutcome::interfaces::csv::outcome_writer::OutcomeWriter;
use txoutcome::interfaces::json::result_reader::ResultReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Recorded transaction results, one JSON object per line
    input: PathBuf,

    /// TOML file with provider and contract settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Provider to target, overriding the config file
    #[arg(long, value_enum)]
    provider: Option<ProviderKey>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path).into_diagnostic()?,
        None => AppConfig::default(),
    };
    let (provider, contract) = config.select(cli.provider).into_diagnostic()?;
    let mut contract = contract.clone();
    contract.load_artifacts().await;
    tracing::info!(
        %provider,
        address = %contract.address,
        abi = contract.abi.is_some(),
        tvc = contract.tvc.is_some(),
        boc = contract.boc.is_some(),
        "Using contract"
    );

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = ResultReader::new(file);
    let mut records = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Error reading transaction result: {}", e),
        }
    }

    let count = records.len();
    let submitter: SubmitterBox = Box::new(ReplaySubmitter::new(records));
    let notifier: NotifierBox = Box::new(TracingNotifier::new());
    let runner = OutcomeRunner::new(submitter, notifier, contract);

    let mut outcomes = Vec::with_capacity(count);
    for index in 0..count {
        outcomes.push(runner.process(index).await);
    }

    let total_fees = outcomes
        .iter()
        .fold(Tokens::ZERO, |total, outcome| total + outcome.fees);
    tracing::info!(processed = count, %total_fees, "Done");

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    writer.write_outcomes(outcomes).into_diagnostic()?;

    Ok(())
}
