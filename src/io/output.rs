use csv::WriterBuilder;
use std::io::Write;

use crate::config::OutputFormat;
use crate::errors::Result;
use crate::schedule::{Schedule, ScheduleRecord};

pub const CSV_HEADER: [&str; 4] = [
    "Date",
    "Annual interest rate (%)",
    "Balance",
    "Accrued interest",
];

/// write the schedule as csv, header first, one record per day
pub fn write_csv<W: Write>(writer: W, schedule: &Schedule, delimiter: u8) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for record in schedule.records() {
        writer.write_record([
            &record.date,
            &record.annual_interest_rate,
            &record.balance,
            &record.accrued_interest,
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// write the schedule as a pretty-printed json array
pub fn write_json<W: Write>(mut writer: W, schedule: &Schedule) -> Result<()> {
    let records: Vec<ScheduleRecord> = schedule.records().collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_schedule<W: Write>(
    writer: W,
    schedule: &Schedule,
    format: OutputFormat,
    delimiter: u8,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, schedule, delimiter),
        OutputFormat::Json => write_json(writer, schedule),
    }
}
