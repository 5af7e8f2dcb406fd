//! Environment-driven configuration.
//!
//! The fixture has no flags, so the only knobs are environment variables. Bad values
//! never abort a run: they fall back to the default and are kept as `issues` for the
//! entry point to log once the subscriber is up.

use crate::constants::{LOG_FILE_ENV, PROBE_MODE_ENV, VERBOSE_ENV};
use crate::probe::ProbeMode;
use std::env;

/// Errors raised while reading configuration values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}: expected a boolean (1/0, true/false, yes/no, on/off), got '{value}'")]
    InvalidBool { key: &'static str, value: String },

    #[error("{key}: unknown probe mode '{value}' (expected 'literal' or 'split')")]
    UnknownProbeMode { key: &'static str, value: String },
}

impl ConfigError {
    /// Name of the environment variable that carried the bad value
    pub fn key(&self) -> &'static str {
        match self {
            ConfigError::InvalidBool { key, .. } | ConfigError::UnknownProbeMode { key, .. } => {
                key
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureConfig {
    pub log_to_file: bool,
    pub verbose: bool,
    pub probe_mode: ProbeMode,
    /// Values that were present but unusable; defaults were applied instead.
    pub issues: Vec<ConfigError>,
}

impl FixtureConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.verbose = config.read_bool(&lookup, VERBOSE_ENV);
        config.log_to_file = config.read_bool(&lookup, LOG_FILE_ENV);

        if let Some(raw) = lookup(PROBE_MODE_ENV) {
            match raw.parse::<ProbeMode>() {
                Ok(mode) => config.probe_mode = mode,
                Err(_) => config.issues.push(ConfigError::UnknownProbeMode {
                    key: PROBE_MODE_ENV,
                    value: raw,
                }),
            }
        }

        config
    }

    fn read_bool<F>(&mut self, lookup: &F, key: &'static str) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup(key) else {
            return false;
        };
        match parse_bool(&raw) {
            Some(value) => value,
            None => {
                self.issues.push(ConfigError::InvalidBool { key, value: raw });
                false
            }
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
