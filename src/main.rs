use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loan_schedule_rs::calendar::parse_day;
use loan_schedule_rs::config::parse_delimiter;
use loan_schedule_rs::io::{normalize_amount, write_schedule};
use loan_schedule_rs::{OutputFormat, SafeTimeProvider, ScheduleConfig, TimeSource};

#[derive(Parser, Debug)]
#[command(name = "loan-schedule", version, about = "Day-by-day loan balance and accrued interest")]
struct Cli {
    #[arg(short = 't', long, default_value = "transactions.csv", help = "Transactions CSV file")]
    transactions: PathBuf,
    #[arg(short = 'r', long, default_value = "interest_rates.csv", help = "Interest rates CSV file")]
    rates: PathBuf,
    #[arg(short = 'd', long, default_value = "2022-06-27", value_parser = first_day, help = "Date of first day of loan")]
    first_day: NaiveDate,
    #[arg(short = 'p', long, default_value = "200000", value_parser = principal, help = "Principal balance on first day")]
    principal: Decimal,
    #[arg(short = 'n', long, default_value = ";", value_parser = delimiter, help = "Input CSV field delimiter character")]
    input_delimiter: char,
    #[arg(short = 'u', long, default_value = ";", value_parser = delimiter, help = "Output CSV field delimiter character")]
    output_delimiter: char,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

impl From<Cli> for ScheduleConfig {
    fn from(cli: Cli) -> Self {
        ScheduleConfig {
            transactions_path: cli.transactions,
            rates_path: cli.rates,
            first_day: cli.first_day,
            principal: cli.principal,
            input_delimiter: cli.input_delimiter,
            output_delimiter: cli.output_delimiter,
            format: cli.format,
        }
    }
}

fn first_day(s: &str) -> Result<NaiveDate, String> {
    parse_day(s).map_err(|e| format!("invalid date {s:?}: {e}"))
}

fn principal(s: &str) -> Result<Decimal, String> {
    Decimal::from_str_exact(&normalize_amount(s)).map_err(|e| format!("invalid principal {s:?}: {e}"))
}

fn delimiter(s: &str) -> Result<char, String> {
    parse_delimiter(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ScheduleConfig::from(Cli::parse());

    let runner = config.load_runner().context("failed to read loan inputs")?;
    let time = SafeTimeProvider::new(TimeSource::System);
    let schedule = runner.run(&time).context("failed to calculate loan")?;

    let stdout = io::stdout();
    write_schedule(
        stdout.lock(),
        &schedule,
        config.format,
        config.output_delimiter_byte()?,
    )
    .context("failed to write schedule")?;

    Ok(())
}
