//! # array_loop
//!
//! Builds a sequence `1..=N`, rewrites each element in place (square when
//! below 5, otherwise `v * 2 + 5`) and prints one value per line.
//!
//! ```
//! use array_loop::{run, RunConfig};
//!
//! let mut out = Vec::new();
//! run(&RunConfig::default(), &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "1\n4\n9\n16\n15\n17\n19\n21\n23\n25\n"
//! );
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod printer;
pub mod sequence;
pub mod transform;

pub use config::{ConfigError, LoggingConfig, RunConfig, SequenceConfig};
pub use error::{ArrayLoopError, Result};
pub use printer::{print_array, print_to_stdout};
pub use sequence::Sequence;
pub use transform::{apply_rule, square_all, square_array};

use log::info;
use std::io::Write;

/// Generate, transform and print a sequence according to `config`.
///
/// The length is validated before anything is allocated; output is written
/// only after the whole transform has succeeded.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let (sequence, length) = prepare(config)?;
    print_array(&sequence, length, out)?;

    info!("Processed sequence of {} elements", length);
    Ok(())
}

/// Same as [`run`], writing to stdout.
pub fn run_to_stdout(config: &RunConfig) -> Result<()> {
    let (sequence, length) = prepare(config)?;
    print_to_stdout(&sequence, length)?;

    info!("Processed sequence of {} elements", length);
    Ok(())
}

fn prepare(config: &RunConfig) -> Result<(Sequence, usize)> {
    let length = config.sequence_length()?;

    let mut sequence = Sequence::with_length(length)?;
    square_array(&mut sequence, length)?;
    Ok((sequence, length))
}
