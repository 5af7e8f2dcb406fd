//! Process-execution fixture: greets without arguments, attempts a ping probe with them.

use std::io;
use tracing::{debug, warn};
use vulnerable_binary::{Fixture, FixtureConfig, Invocation};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = FixtureConfig::from_env();
    // Dropped at the end of main, flushing the file writer.
    let _log_guard =
        vulnerable_binary::logging::init_subscriber(config.log_to_file, config.verbose);

    for issue in &config.issues {
        warn!("Ignoring configuration value: {}", issue);
    }

    let invocation = Invocation::from_env();
    let fixture = Fixture::new(&config);
    debug!(
        "Starting fixture action={:?} probe_mode={}",
        invocation.action(),
        config.probe_mode
    );

    // Every failure is swallowed; the exit status is always 0.
    match fixture.run(&invocation, &mut io::stdout()).await {
        Ok(outcome) => debug!("Fixture finished: {:?}", outcome),
        Err(e) => debug!("Ignoring output error: {:#}", e),
    }
}
