//! Benchmark runner: times the reference FFT backend against the
//! accelerated backend over the default sweep of cubic volume sizes.
//!
//! No flags; the sweep and repetition count are fixed. Exits non-zero on the
//! first filter error.

use fftprobe::harness::{run_sweep, SweepConfig};
use std::io;

fn main() -> fftprobe::Result<()> {
    let mut stdout = io::stdout().lock();
    run_sweep(&SweepConfig::default(), &mut stdout)?;
    Ok(())
}
