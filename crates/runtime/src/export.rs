//! Ball-by-ball CSV export.
//!
//! Layout: a header row, then one row per [`BallRecord`] in log order. The
//! batsman column is always quoted. Rows are separated by `\n` with no
//! terminator after the last one.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use cricket_core::{BallKind, BallLog, BallRecord};

use crate::api::ExportError;

pub const HEADER: [&str; 9] = [
    "Over", "Ball", "Batsman", "Runs", "Type", "Bat Runs", "Free Hit", "Total", "Wickets",
];

/// Writes the log as CSV.
pub fn write_csv<W: Write>(log: &BallLog, mut writer: W) -> Result<(), ExportError> {
    writer.write_all(to_csv_string(log)?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Renders the log as one CSV document.
pub fn to_csv_string(log: &BallLog) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    {
        let mut csv = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buffer);

        csv.write_record(HEADER)?;
        for record in log {
            csv.write_record(row(record))?;
        }
        csv.flush()?;
    }

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }

    tracing::debug!(rows = log.len(), bytes = buffer.len(), "Ball log encoded");
    // Every field comes from UTF-8 strings or integers.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub fn export_to_path(log: &BallLog, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(log, file)?;
    tracing::info!(path = %path.display(), rows = log.len(), "Ball log written");
    Ok(())
}

/// `cricket-match-<unix millis>.csv`
pub fn suggested_file_name(now: SystemTime) -> String {
    let millis = now
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("cricket-match-{millis}.csv")
}

fn row(record: &BallRecord) -> [String; 9] {
    [
        record.over.to_string(),
        record.ball.to_string(),
        quote(&record.batsman),
        record.runs.to_string(),
        record.kind.to_string(),
        bat_runs(record).to_string(),
        if record.free_hit { "Yes" } else { "No" }.to_string(),
        record.total.to_string(),
        record.wickets.to_string(),
    ]
}

/// Runs off the bat: the no-ball's bat runs, otherwise the delivery's runs.
fn bat_runs(record: &BallRecord) -> u32 {
    match record.kind {
        BallKind::NoBall => record.bat_runs.unwrap_or(0),
        _ => record.runs,
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
