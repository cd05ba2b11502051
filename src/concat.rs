use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{Result, VidcatError};

pub const DEFAULT_TOOL: &str = "MP4Box";

/// Destination plus ordered sources. Both are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatenationRequest {
    destination: PathBuf,
    sources: Vec<PathBuf>,
}

impl ConcatenationRequest {
    pub fn new(destination: impl Into<PathBuf>, sources: Vec<PathBuf>) -> Result<Self> {
        let destination = destination.into();
        if destination.as_os_str().is_empty() {
            return Err(VidcatError::InvalidRequest(
                "destination path cannot be empty".to_string(),
            ));
        }
        if sources.is_empty() {
            return Err(VidcatError::InvalidRequest(
                "no source path provided".to_string(),
            ));
        }
        Ok(Self {
            destination,
            sources,
        })
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }
}

pub trait ConcatTool {
    fn name(&self) -> String;
    /// Program plus arguments the tool would run, for display.
    fn command_line(&self, request: &ConcatenationRequest) -> Vec<String>;
    fn concatenate(&self, request: &ConcatenationRequest) -> Result<()>;
}

/// Runs `tool` once over a validated request. Sources are concatenated in
/// request order.
pub fn concatenate(tool: &dyn ConcatTool, request: &ConcatenationRequest) -> Result<()> {
    info!(
        tool = %tool.name(),
        sources = request.sources().len(),
        destination = %request.destination().display(),
        "concatenating"
    );
    tool.concatenate(request)
}

/// GPAC's MP4Box: `MP4Box -add <first> -cat <next>... -new <dest>`.
pub struct Mp4Box {
    program: PathBuf,
}

impl Mp4Box {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn args(&self, request: &ConcatenationRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(request.sources.len() * 2 + 2);
        for (i, src) in request.sources.iter().enumerate() {
            let flag = if i == 0 { "-add" } else { "-cat" };
            args.push(flag.into());
            args.push(src.into());
        }
        // Without -new MP4Box edits an existing destination in place.
        args.push("-new".into());
        args.push(request.destination.clone().into());
        args
    }

    fn command(&self, request: &ConcatenationRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(request));
        cmd.stdin(Stdio::null());
        // stdout carries the listing and JSON report.
        cmd.stdout(io::stderr());
        cmd.stderr(Stdio::inherit());
        cmd
    }
}

impl Default for Mp4Box {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

impl ConcatTool for Mp4Box {
    fn name(&self) -> String {
        self.program.display().to_string()
    }

    fn command_line(&self, request: &ConcatenationRequest) -> Vec<String> {
        std::iter::once(self.program.as_os_str().to_owned())
            .chain(self.args(request))
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    fn concatenate(&self, request: &ConcatenationRequest) -> Result<()> {
        let line = shell_words::join(self.command_line(request));
        debug!(command = %line, "spawning concatenation tool");

        let status = self
            .command(request)
            .status()
            .map_err(|err| VidcatError::ExternalToolFailure {
                tool: self.name(),
                reason: format!("could not be started: {err}"),
            })?;

        if !status.success() {
            return Err(VidcatError::ExternalToolFailure {
                tool: self.name(),
                reason: format!("exited with {status}"),
            });
        }

        info!(
            destination = %request.destination.display(),
            sources = request.sources.len(),
            "concatenation finished"
        );
        Ok(())
    }
}
