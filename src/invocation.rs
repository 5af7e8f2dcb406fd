//! Process arguments and the decision they drive.
//!
//! Argument content is never interpreted. `--help`, `--` and non-UTF-8 values count
//! exactly like any other argument, which is why the raw OS vector is kept instead of
//! running it through a flag parser.

use std::env;
use std::ffi::OsString;

/// What the fixture does for a given invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No extra arguments: print the greeting line.
    Greet,
    /// At least one extra argument: attempt the probe and relay its stdout.
    Probe,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    extra: Vec<OsString>,
}

impl Invocation {
    /// Build from the current process arguments
    pub fn from_env() -> Self {
        Self::from_args(env::args_os())
    }

    /// Build from a full argument vector, program name first
    pub fn from_args<I, A>(args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_default();
        Self {
            program,
            extra: args.collect(),
        }
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn extra_count(&self) -> usize {
        self.extra.len()
    }

    pub fn has_extra_arguments(&self) -> bool {
        !self.extra.is_empty()
    }

    pub fn action(&self) -> Action {
        if self.has_extra_arguments() {
            Action::Probe
        } else {
            Action::Greet
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_only_greets() {
        let invocation = Invocation::from_args(["vulnerable_binary"]);
        assert_eq!(invocation.program(), "vulnerable_binary");
        assert_eq!(invocation.extra_count(), 0);
        assert_eq!(invocation.action(), Action::Greet);
    }

    #[test]
    fn test_empty_vector_greets() {
        let invocation = Invocation::from_args(Vec::<OsString>::new());
        assert!(invocation.program().is_empty());
        assert_eq!(invocation.action(), Action::Greet);
    }

    #[test]
    fn test_any_extra_argument_probes() {
        for extra in ["x", "--help", "--version", "--", ""] {
            let invocation = Invocation::from_args(["vulnerable_binary", extra]);
            assert!(invocation.has_extra_arguments(), "'{extra}' should count");
            assert_eq!(invocation.action(), Action::Probe);
        }

        let invocation = Invocation::from_args(["vulnerable_binary", "a", "b", "c"]);
        assert_eq!(invocation.extra_count(), 3);
        assert_eq!(invocation.action(), Action::Probe);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_probes() {
        use std::os::unix::ffi::OsStringExt;

        let invocation = Invocation::from_args([
            OsString::from("vulnerable_binary"),
            OsString::from_vec(vec![0xff, 0xfe]),
        ]);
        assert_eq!(invocation.action(), Action::Probe);
    }
}
