use std::ffi::OsStr;
use std::process::{Command, Output};

use vulnerable_binary::constants::{LOG_FILE_ENV, PROBE_MODE_ENV, VERBOSE_ENV};

/// Build a command for the compiled fixture with a clean logging environment, so
/// assertions on stderr are not affected by the developer's shell.
#[allow(dead_code)]
pub fn fixture_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vulnerable_binary"));
    cmd.env_remove("RUST_LOG")
        .env_remove(VERBOSE_ENV)
        .env_remove(LOG_FILE_ENV)
        .env_remove(PROBE_MODE_ENV);
    cmd
}

/// Run the fixture with the given extra arguments and wait for it
#[allow(dead_code)]
pub fn run_fixture<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    fixture_command()
        .args(args)
        .output()
        .expect("failed to run fixture binary")
}
