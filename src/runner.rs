use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::concat::{self, ConcatTool, ConcatenationRequest, Mp4Box};
use crate::config::Config;
use crate::error::Result;
use crate::lister::{self, DirectoryEntry};

pub struct RunReport {
    pub entries: Vec<DirectoryEntry>,
    pub destination: Option<PathBuf>,
    /// Set for dry runs only.
    pub command: Option<Vec<String>>,
    pub concatenated: bool,
}

pub fn run<F>(config: &Config, on_listed: F) -> Result<RunReport>
where
    F: FnOnce(&[DirectoryEntry]) -> Result<()>,
{
    let tool = config
        .concat
        .as_ref()
        .map(|settings| Mp4Box::new(&settings.tool))
        .unwrap_or_default();
    run_with(config, &tool, on_listed)
}

/// Lists the source directory, reports the selection through `on_listed`,
/// then hands the ordered files to `tool` unless the run is list-only or a
/// dry run.
pub fn run_with<F>(config: &Config, tool: &dyn ConcatTool, on_listed: F) -> Result<RunReport>
where
    F: FnOnce(&[DirectoryEntry]) -> Result<()>,
{
    info!(
        src_dir = %config.src_dir.display(),
        pattern = config.pattern.as_ref().map(|re| re.as_str()).unwrap_or(""),
        ordering = ?config.ordering,
        "scanning source directory"
    );
    let entries = lister::list(&config.src_dir, &config.ordering, config.pattern.as_ref())?;
    on_listed(&entries)?;

    let mut report = RunReport {
        entries,
        destination: None,
        command: None,
        concatenated: false,
    };

    let Some(settings) = &config.concat else {
        return Ok(report);
    };

    let sources = report.entries.iter().map(|e| e.path.clone()).collect();
    let request = ConcatenationRequest::new(settings.destination.clone(), sources)?;
    report.destination = Some(settings.destination.clone());

    if settings.dry_run {
        report.command = Some(tool.command_line(&request));
        return Ok(report);
    }

    fs::create_dir_all(&settings.out_dir)?;
    if let Err(err) = concat::concatenate(tool, &request) {
        warn!(sources = ?request.sources(), "concatenation failed");
        return Err(err);
    }
    report.concatenated = true;
    Ok(report)
}
