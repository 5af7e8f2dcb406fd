//! Library module for vulnerable_binary
//!
//! A process-execution fixture. Run without arguments it prints `Hello world`; run
//! with any argument it attempts `cmd.exe /c ping 127.0.0.1` as a single program name
//! and relays whatever that attempt wrote to stdout. It always exits 0.

pub mod config;
pub mod constants;
pub mod fixture;
pub mod invocation;
pub mod logging;
pub mod probe;
pub mod terminal_output;

pub use config::FixtureConfig;
pub use fixture::{Fixture, Outcome};
pub use invocation::{Action, Invocation};
