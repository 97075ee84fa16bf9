//! # fftprobe
//!
//! **Benchmark and backend-verification harness for pluggable FFT image filters.**
//!
//! fftprobe times a serial reference FFT backend against a parallel
//! accelerated backend over a sweep of cubic 3D volumes, and verifies that
//! the filter factory resolves every generic FFT filter kind to the
//! accelerated backend by default.
//!
//! ## Components
//!
//! - **Filters**: the eight generic FFT filter kinds (forward/inverse,
//!   full-ND/single-axis, complex-to-complex, and the half-Hermitian real
//!   forms), each implemented by a reference and an accelerated backend over
//!   a shared rustfft engine
//! - **Factory**: a typed registry mapping each kind to an ordered list of
//!   backend constructors; front registration is the default
//! - **Harness**: the size sweep, per-trial timing, and report formatting
//! - **Verification**: the linear pass asserting the accelerated backend is
//!   the default for every kind
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fftprobe::prelude::*;
//!
//! let filter = fftprobe::factory::create_default(FilterKind::Forward)?;
//! assert_eq!(filter.backend(), BackendId::Accelerated);
//! ```
//!
//! Two binaries cover the command-line surface: `fft_benchmark` runs the
//! default sweep, `verify_backends` runs the verification pass against the
//! process-global factory. Neither takes arguments; both exit non-zero on
//! the first propagated error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod error;
pub mod factory;
pub mod filter;
pub mod harness;
pub mod verify;
pub mod volume;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backend::{AcceleratedFftFilter, ReferenceFftFilter};
    pub use crate::config::GlobalConfiguration;
    pub use crate::error::{Error, Result};
    pub use crate::factory::{FilterFactory, InsertionPosition};
    pub use crate::filter::{
        BackendId, DataDomain, FftDirection, FftImageFilter, FilterData, FilterKind,
    };
    pub use crate::harness::{SweepConfig, TrialRecord};
    pub use crate::volume::{SampleVolume, SpectralVolume, VolumeSpec};
}

pub use error::{Error, Result};
