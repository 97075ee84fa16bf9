//! Default-backend verification pass
//!
//! Regression oracle for the factory's registration order: every generic
//! kind must resolve to the accelerated backend. One linear pass, stopping at
//! the first kind that resolves elsewhere.

use crate::backend::AcceleratedFftFilter;
use crate::error::{Error, Result};
use crate::factory::FilterFactory;
use crate::filter::{BackendId, FftImageFilter, FilterKind};
use std::io::Write;

/// The kinds the pass checks, each expected to resolve to the accelerated
/// backend
pub const EXPECTED_ACCELERATED: [FilterKind; 8] = [
    FilterKind::ComplexToComplex1D,
    FilterKind::ComplexToComplex,
    FilterKind::HalfHermitianToRealInverse,
    FilterKind::Forward1D,
    FilterKind::Forward,
    FilterKind::Inverse1D,
    FilterKind::Inverse,
    FilterKind::RealToHalfHermitianForward,
];

/// Check that every kind's default resolution is the accelerated backend.
///
/// Prints one confirmation line per instantiated filter. On the first kind
/// that resolves to another backend, prints a diagnostic naming the kind and
/// returns [`Error::BackendMismatch`] without visiting the remaining kinds.
/// Construction failures propagate the same way.
pub fn verify_default_backends<W: Write>(factory: &FilterFactory, out: &mut W) -> Result<()> {
    for kind in EXPECTED_ACCELERATED {
        let filter = factory.create(kind)?;
        writeln!(
            out,
            "Instantiated default FFT image filter backend {}",
            filter.name_of_class()
        )?;
        if filter
            .as_any()
            .downcast_ref::<AcceleratedFftFilter>()
            .is_none()
        {
            writeln!(
                out,
                "Accelerated FFT filter was not instantiated as default backend for {kind}!"
            )?;
            return Err(Error::BackendMismatch {
                kind,
                expected: BackendId::Accelerated,
                actual: filter.backend(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterKind;

    #[test]
    fn test_expected_table_covers_all_kinds() {
        for kind in FilterKind::ALL {
            assert!(EXPECTED_ACCELERATED.contains(&kind));
        }
        assert_eq!(EXPECTED_ACCELERATED.len(), FilterKind::ALL.len());
    }
}
