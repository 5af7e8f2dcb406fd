//! Wires an invocation to the greeting or the probe.

use crate::config::FixtureConfig;
use crate::invocation::{Action, Invocation};
use crate::probe::ProbeCommand;
use crate::terminal_output::TerminalOutput;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

/// What a run wrote to the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Greeted,
    Relayed { bytes: usize, launched: bool },
}

#[derive(Debug, Clone, Default)]
pub struct Fixture {
    probe: ProbeCommand,
}

impl Fixture {
    pub fn new(config: &FixtureConfig) -> Self {
        Self::with_probe(ProbeCommand::for_mode(config.probe_mode))
    }

    pub fn with_probe(probe: ProbeCommand) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &ProbeCommand {
        &self.probe
    }

    /// Run once against `out`
    ///
    /// Probe errors never surface here; the only error is a failed write to `out`.
    pub async fn run<W: Write>(&self, invocation: &Invocation, out: &mut W) -> Result<Outcome> {
        match invocation.action() {
            Action::Greet => {
                TerminalOutput::write_greeting(out).context("Failed to write greeting")?;
                Ok(Outcome::Greeted)
            }
            Action::Probe => {
                debug!(
                    "{} extra argument(s) present, running probe",
                    invocation.extra_count()
                );
                let (stdout, launched) = self.probe.capture().await;
                let bytes = TerminalOutput::relay(out, &stdout)
                    .context("Failed to relay probe output")?;
                Ok(Outcome::Relayed { bytes, launched })
            }
        }
    }
}
