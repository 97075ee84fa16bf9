//! Error types for fftprobe

use crate::filter::{BackendId, DataDomain, FilterKind};
use thiserror::Error;

/// Result type alias using fftprobe's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fftprobe operations
#[derive(Error, Debug)]
pub enum Error {
    /// The factory has no registration able to construct the requested kind
    #[error("No registered backend can construct filter kind {kind}")]
    ConstructionFailed {
        /// The generic filter kind that failed to resolve
        kind: FilterKind,
    },

    /// Factory resolution returned a different backend than expected
    #[error("{kind}: expected {expected} backend, factory resolved {actual}")]
    BackendMismatch {
        /// The generic filter kind that was checked
        kind: FilterKind,
        /// Backend the caller required
        expected: BackendId,
        /// Backend actually instantiated
        actual: BackendId,
    },

    /// Input bound to a filter has the wrong data domain
    #[error("{filter} expects {expected} input, got {got}")]
    InputDomainMismatch {
        /// Concrete class name of the filter
        filter: &'static str,
        /// Domain required by the filter kind
        expected: DataDomain,
        /// Domain of the bound data
        got: DataDomain,
    },

    /// `update` called before `set_input`
    #[error("Missing input: bind a volume with set_input before update")]
    MissingInput,

    /// A volume axis has an unusable length
    #[error("Invalid length {len} for axis {axis}")]
    InvalidLength {
        /// Axis index (0..3)
        axis: usize,
        /// The offending length
        len: usize,
    },

    /// Buffer length does not match the declared dimensions
    #[error("Shape mismatch: dims {dims:?} require {expected} elements, got {got}")]
    ShapeMismatch {
        /// Declared dimensions
        dims: [usize; 3],
        /// Element count implied by the dimensions
        expected: usize,
        /// Element count actually provided
        got: usize,
    },

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),

    /// Failure writing a report line
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
