//! Centralized constants for the fixture's fixed strings and environment keys.

/// Line printed when the fixture is run without extra arguments.
pub const GREETING: &str = "Hello world";

/// Command line the probe attempts to run.
///
/// In literal mode this whole string is used as the program name, so the launch
/// fails on practically every host. Scanners key on that exact behavior.
pub const PROBE_COMMAND_LINE: &str = "cmd.exe /c ping 127.0.0.1";

/// Enables debug-level logging when set to a true value.
pub const VERBOSE_ENV: &str = "VULNERABLE_BINARY_VERBOSE";

/// Writes logs to a rolling daily file instead of stderr when set to a true value.
pub const LOG_FILE_ENV: &str = "VULNERABLE_BINARY_LOG_FILE";

/// Selects `literal` (default) or `split` probe invocation.
pub const PROBE_MODE_ENV: &str = "VULNERABLE_BINARY_PROBE_MODE";

/// Qualifier/organization/application triple for `directories::ProjectDirs`.
pub const PROJECT_DIRS: (&str, &str, &str) = ("dev", "vulnerable_binary", "vulnerable_binary");

/// File name prefix of the rolling log file.
pub const LOG_FILE_NAME: &str = "fixture.log";
