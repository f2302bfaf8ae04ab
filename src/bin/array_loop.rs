use array_loop::{logging, run_to_stdout, RunConfig};
use log::{error, info};

/// Entry point: no arguments, no environment. Prints the transformed
/// reference sequence to stdout and exits 0, or logs the error and exits
/// non-zero.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig::default();
    logging::init(&config.logging)?;

    if let Some(active) = logging::current_config() {
        info!("Log level {}", active.level);
    }
    info!("Starting array_loop with length {}", config.sequence.length);

    if let Err(e) = run_to_stdout(&config) {
        error!("array_loop failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
