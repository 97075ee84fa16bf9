//! Generic FFT filter surface
//!
//! A [`FilterKind`] names one of the eight generic transforms; concrete
//! instances come from the backend modules and are usually resolved through
//! the [`factory`](crate::factory). The trait mirrors the classic image
//! filter contract: bind an input, call `update`, take the output.

use crate::error::Result;
use std::any::Any;
use std::fmt;

use crate::volume::{SampleVolume, SpectralVolume};

/// Direction of FFT computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FftDirection {
    /// Spatial domain to frequency domain
    #[default]
    Forward,
    /// Frequency domain to spatial domain (normalized by 1/N)
    Inverse,
}

/// Identity of a concrete backend implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendId {
    /// Serial CPU reference implementation
    Reference,
    /// Parallel accelerated implementation
    Accelerated,
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => write!(f, "reference"),
            Self::Accelerated => write!(f, "accelerated"),
        }
    }
}

/// Data domain of a filter input or output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDomain {
    /// Real-valued samples (f32)
    Real,
    /// Complex-valued spectrum (Complex32)
    Spectral,
}

impl fmt::Display for DataDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Spectral => write!(f, "spectral"),
        }
    }
}

/// Input or output volume of a filter
#[derive(Debug, Clone)]
pub enum FilterData {
    /// Real-valued volume
    Real(SampleVolume),
    /// Complex-valued spectrum
    Spectral(SpectralVolume),
}

impl FilterData {
    /// Domain tag of the carried volume
    pub fn domain(&self) -> DataDomain {
        match self {
            Self::Real(_) => DataDomain::Real,
            Self::Spectral(_) => DataDomain::Spectral,
        }
    }
}

/// The eight generic FFT filter kinds
///
/// This is the generic side of the factory's lookup table; each kind is
/// implemented by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Real to full complex spectrum over all axes
    Forward,
    /// Full complex spectrum back to real over all axes
    Inverse,
    /// Real to complex along a single axis
    Forward1D,
    /// Complex back to real along a single axis
    Inverse1D,
    /// Complex to complex over all axes, direction selectable
    ComplexToComplex,
    /// Complex to complex along a single axis, direction selectable
    ComplexToComplex1D,
    /// Real to half-Hermitian spectrum (last axis truncated to n/2 + 1)
    RealToHalfHermitianForward,
    /// Half-Hermitian spectrum back to real
    HalfHermitianToRealInverse,
}

impl FilterKind {
    /// Every kind, in declaration order
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Forward,
        FilterKind::Inverse,
        FilterKind::Forward1D,
        FilterKind::Inverse1D,
        FilterKind::ComplexToComplex,
        FilterKind::ComplexToComplex1D,
        FilterKind::RealToHalfHermitianForward,
        FilterKind::HalfHermitianToRealInverse,
    ];

    /// Domain the kind requires on input
    pub fn input_domain(self) -> DataDomain {
        match self {
            Self::Forward | Self::Forward1D | Self::RealToHalfHermitianForward => DataDomain::Real,
            Self::Inverse
            | Self::Inverse1D
            | Self::ComplexToComplex
            | Self::ComplexToComplex1D
            | Self::HalfHermitianToRealInverse => DataDomain::Spectral,
        }
    }

    /// Domain the kind produces on output
    pub fn output_domain(self) -> DataDomain {
        match self {
            Self::Forward
            | Self::Forward1D
            | Self::ComplexToComplex
            | Self::ComplexToComplex1D
            | Self::RealToHalfHermitianForward => DataDomain::Spectral,
            Self::Inverse | Self::Inverse1D | Self::HalfHermitianToRealInverse => DataDomain::Real,
        }
    }

    /// Concrete class name for this kind under a given backend
    pub fn class_name(self, backend: BackendId) -> &'static str {
        match (backend, self) {
            (BackendId::Reference, Self::Forward) => "ReferenceForwardFftFilter",
            (BackendId::Reference, Self::Inverse) => "ReferenceInverseFftFilter",
            (BackendId::Reference, Self::Forward1D) => "ReferenceForward1DFftFilter",
            (BackendId::Reference, Self::Inverse1D) => "ReferenceInverse1DFftFilter",
            (BackendId::Reference, Self::ComplexToComplex) => "ReferenceComplexToComplexFftFilter",
            (BackendId::Reference, Self::ComplexToComplex1D) => {
                "ReferenceComplexToComplex1DFftFilter"
            }
            (BackendId::Reference, Self::RealToHalfHermitianForward) => {
                "ReferenceRealToHalfHermitianForwardFftFilter"
            }
            (BackendId::Reference, Self::HalfHermitianToRealInverse) => {
                "ReferenceHalfHermitianToRealInverseFftFilter"
            }
            (BackendId::Accelerated, Self::Forward) => "AcceleratedForwardFftFilter",
            (BackendId::Accelerated, Self::Inverse) => "AcceleratedInverseFftFilter",
            (BackendId::Accelerated, Self::Forward1D) => "AcceleratedForward1DFftFilter",
            (BackendId::Accelerated, Self::Inverse1D) => "AcceleratedInverse1DFftFilter",
            (BackendId::Accelerated, Self::ComplexToComplex) => {
                "AcceleratedComplexToComplexFftFilter"
            }
            (BackendId::Accelerated, Self::ComplexToComplex1D) => {
                "AcceleratedComplexToComplex1DFftFilter"
            }
            (BackendId::Accelerated, Self::RealToHalfHermitianForward) => {
                "AcceleratedRealToHalfHermitianForwardFftFilter"
            }
            (BackendId::Accelerated, Self::HalfHermitianToRealInverse) => {
                "AcceleratedHalfHermitianToRealInverseFftFilter"
            }
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Forward => "Forward",
            Self::Inverse => "Inverse",
            Self::Forward1D => "Forward1D",
            Self::Inverse1D => "Inverse1D",
            Self::ComplexToComplex => "ComplexToComplex",
            Self::ComplexToComplex1D => "ComplexToComplex1D",
            Self::RealToHalfHermitianForward => "RealToHalfHermitianForward",
            Self::HalfHermitianToRealInverse => "HalfHermitianToRealInverse",
        };
        write!(f, "{name}")
    }
}

/// Object-safe FFT filter contract
///
/// Backend identity checks go through [`as_any`](FftImageFilter::as_any)
/// and a concrete-type downcast; the check returns a `Result` at the call
/// site rather than raising, so a mismatch is an ordinary error value.
pub trait FftImageFilter: Any + Send + std::fmt::Debug {
    /// Generic kind this instance implements
    fn kind(&self) -> FilterKind;

    /// Backend that produced this instance
    fn backend(&self) -> BackendId;

    /// Concrete class name (one per backend/kind pair)
    fn name_of_class(&self) -> &'static str;

    /// Bind the input volume, checking its data domain
    fn set_input(&mut self, input: FilterData) -> Result<()>;

    /// Execute the transform synchronously
    fn update(&mut self) -> Result<()>;

    /// Take the produced output, if `update` has run
    fn take_output(&mut self) -> Option<FilterData>;

    /// Downcast seam for backend identity verification
    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_enumerated_once() {
        assert_eq!(FilterKind::ALL.len(), 8);
        for (i, a) in FilterKind::ALL.iter().enumerate() {
            for b in &FilterKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_domains_are_consistent() {
        assert_eq!(FilterKind::Forward.input_domain(), DataDomain::Real);
        assert_eq!(FilterKind::Forward.output_domain(), DataDomain::Spectral);
        assert_eq!(FilterKind::Inverse.input_domain(), DataDomain::Spectral);
        assert_eq!(FilterKind::Inverse.output_domain(), DataDomain::Real);
        assert_eq!(
            FilterKind::HalfHermitianToRealInverse.input_domain(),
            DataDomain::Spectral
        );
    }

    #[test]
    fn test_class_names_are_distinct_per_backend() {
        for kind in FilterKind::ALL {
            assert_ne!(
                kind.class_name(BackendId::Reference),
                kind.class_name(BackendId::Accelerated)
            );
        }
    }
}
