//! Verification tool: asserts the process-global factory resolves every
//! generic FFT filter kind to the accelerated backend.
//!
//! Prints one line per instantiated filter; on a regression it prints a
//! diagnostic for the failing kind and exits non-zero.

use fftprobe::factory;
use fftprobe::verify::verify_default_backends;
use std::io;

fn main() -> fftprobe::Result<()> {
    let factory = factory::global().read();
    let mut stdout = io::stdout().lock();
    verify_default_backends(&factory, &mut stdout)?;
    Ok(())
}
