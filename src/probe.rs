//! The fixture's one child process.
//!
//! A probe is a program plus argument vector run to completion with stdin closed and
//! both output streams captured. Only stdout matters to the caller: a failed launch
//! yields no bytes, and a child that exits non-zero still yields whatever it wrote.

use crate::constants::PROBE_COMMAND_LINE;
use std::ffi::OsString;
use std::fmt;
use std::process::{ExitStatus, Stdio};
use std::str::FromStr;
use tokio::process::Command;
use tracing::debug;

/// How `PROBE_COMMAND_LINE` is turned into a program and arguments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProbeMode {
    /// The whole command line is the program name, with no arguments.
    #[default]
    Literal,
    /// The command line is split on whitespace into program and arguments.
    Split,
}

impl FromStr for ProbeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(ProbeMode::Literal),
            "split" => Ok(ProbeMode::Split),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for ProbeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeMode::Literal => f.write_str("literal"),
            ProbeMode::Split => f.write_str("split"),
        }
    }
}

/// Error types for probe execution
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to launch probe process: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Probe process exited unsuccessfully (code: {code:?})")]
    Exited {
        code: Option<i32>,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },
}

impl ProbeError {
    /// Check if the child never started
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, ProbeError::Spawn(_))
    }

    /// Stdout the child produced before failing; empty if it never started
    pub fn captured_stdout(&self) -> &[u8] {
        match self {
            ProbeError::Spawn(_) => &[],
            ProbeError::Exited { stdout, .. } => stdout,
        }
    }

    /// Consume the error, keeping only the stdout bytes to relay
    pub fn into_stdout(self) -> Vec<u8> {
        match self {
            ProbeError::Spawn(_) => Vec::new(),
            ProbeError::Exited { stdout, .. } => stdout,
        }
    }

    /// Get error category for programmatic handling
    pub fn error_category(&self) -> &'static str {
        match self {
            ProbeError::Spawn(_) => "LAUNCH",
            ProbeError::Exited { .. } => "EXIT",
        }
    }

    fn from_status(status: ExitStatus, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        ProbeError::Exited {
            code: status.code(),
            stdout,
            stderr,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl ProbeCommand {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The probe as the fixture ships it: one opaque program name, no arguments
    pub fn literal() -> Self {
        Self::new(PROBE_COMMAND_LINE, Vec::<OsString>::new())
    }

    /// The corrected probe: `cmd.exe` with `/c ping 127.0.0.1` as separate arguments
    pub fn split() -> Self {
        let mut parts = PROBE_COMMAND_LINE.split_whitespace();
        let program = parts.next().unwrap_or_default();
        Self::new(program, parts)
    }

    pub fn for_mode(mode: ProbeMode) -> Self {
        match mode {
            ProbeMode::Literal => Self::literal(),
            ProbeMode::Split => Self::split(),
        }
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Run the probe to completion and return its stdout
    pub async fn output(&self) -> Result<Vec<u8>, ProbeError> {
        debug!(
            "Launching probe program={:?} args={:?}",
            self.program, self.args
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(ProbeError::from_status(
                output.status,
                output.stdout,
                output.stderr,
            ))
        }
    }

    /// Run the probe, swallowing any error, and return the stdout to relay
    ///
    /// The second element reports whether the child was actually launched.
    pub async fn capture(&self) -> (Vec<u8>, bool) {
        match self.output().await {
            Ok(stdout) => (stdout, true),
            Err(e) => {
                if let ProbeError::Exited { stderr, .. } = &e {
                    debug!("Probe stderr: {}", String::from_utf8_lossy(stderr).trim_end());
                }
                debug!("Ignoring probe error [{}]: {}", e.error_category(), e);
                let launched = !e.is_launch_failure();
                (e.into_stdout(), launched)
            }
        }
    }
}

impl Default for ProbeCommand {
    fn default() -> Self {
        Self::literal()
    }
}
