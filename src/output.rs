use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::error::{Result, VidcatError};
use crate::lister::DirectoryEntry;
use crate::runner::RunReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = VidcatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(VidcatError::InvalidArg(format!(
                "Unknown output format: {other}"
            ))),
        }
    }
}

/// Prints the selected entries as soon as they are known. JSON is a single
/// document and is emitted by [`print_report`] instead.
pub fn print_listing(format: OutputFormat, entries: &[DirectoryEntry]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(&mut out, format, entries)
}

pub fn print_report(format: OutputFormat, report: &RunReport) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, format, report)
}

pub fn write_listing<W: Write>(
    out: &mut W,
    format: OutputFormat,
    entries: &[DirectoryEntry],
) -> Result<()> {
    if format == OutputFormat::Json {
        return Ok(());
    }
    for entry in entries {
        writeln!(
            out,
            "{}\t{}\t{}",
            entry.name,
            format_modified(entry.modified_at),
            entry.is_directory
        )?;
    }
    Ok(())
}

/// Writes what follows the listing: the whole document for JSON, the
/// command or destination summary for text.
pub fn write_report<W: Write>(out: &mut W, format: OutputFormat, report: &RunReport) -> Result<()> {
    match format {
        OutputFormat::Text => write_summary(out, report),
        OutputFormat::Json => write_json(out, report),
    }
}

fn write_summary<W: Write>(out: &mut W, report: &RunReport) -> Result<()> {
    if let Some(command) = &report.command {
        writeln!(out)?;
        writeln!(out, "Command: {}", shell_words::join(command))?;
    }
    if let Some(dest) = report.destination.as_deref().filter(|_| report.concatenated) {
        writeln!(
            out,
            "Concatenated {} files into {}",
            report.entries.len(),
            dest.display()
        )?;
    }
    Ok(())
}

/// RFC 3339 in UTC. humantime cannot represent times before the epoch, so
/// those are rendered as an offset from it.
fn format_modified(time: SystemTime) -> String {
    match time.duration_since(UNIX_EPOCH) {
        Ok(_) => humantime::format_rfc3339_seconds(time).to_string(),
        Err(err) => {
            let secs = Duration::from_secs(err.duration().as_secs());
            format!(
                "{} before 1970-01-01T00:00:00Z",
                humantime::format_duration(secs)
            )
        }
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    path: &'a Path,
    modified_at: String,
    is_directory: bool,
}

impl<'a> From<&'a DirectoryEntry> for JsonEntry<'a> {
    fn from(entry: &'a DirectoryEntry) -> Self {
        Self {
            name: &entry.name,
            path: &entry.path,
            modified_at: format_modified(entry.modified_at),
            is_directory: entry.is_directory,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    entries: Vec<JsonEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'a [String]>,
    concatenated: bool,
}

fn write_json<W: Write>(out: &mut W, report: &RunReport) -> Result<()> {
    let json_report = JsonReport {
        entries: report.entries.iter().map(JsonEntry::from).collect(),
        destination: report.destination.as_deref(),
        command: report.command.as_deref(),
        concatenated: report.concatenated,
    };
    serde_json::to_writer_pretty(&mut *out, &json_report)?;
    writeln!(out)?;
    Ok(())
}
