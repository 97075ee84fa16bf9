//! Concrete FFT filter backends
//!
//! Both backends dispatch through the same engine; the reference backend runs
//! every line batch serially, the accelerated backend fans lines out across a
//! rayon pool. Keeping one engine guarantees numerical parity between the two.

mod accelerated;
mod engine;
mod reference;

pub use accelerated::AcceleratedFftFilter;
pub use reference::ReferenceFftFilter;

use crate::error::{Error, Result};
use crate::filter::{BackendId, FftDirection, FilterData, FilterKind};

/// State shared by every concrete filter: the bound input, the produced
/// output, and the per-kind transform parameters.
#[derive(Debug)]
pub(crate) struct FilterCore {
    kind: FilterKind,
    backend: BackendId,
    input: Option<FilterData>,
    output: Option<FilterData>,
    direction: FftDirection,
    axis: usize,
    last_dim_is_odd: bool,
}

impl FilterCore {
    pub(crate) fn new(kind: FilterKind, backend: BackendId) -> Self {
        Self {
            kind,
            backend,
            input: None,
            output: None,
            direction: FftDirection::Forward,
            axis: 0,
            last_dim_is_odd: false,
        }
    }

    pub(crate) fn kind(&self) -> FilterKind {
        self.kind
    }

    pub(crate) fn set_direction_axis(&mut self, axis: usize) {
        self.axis = axis.min(2);
    }

    pub(crate) fn set_transform_direction(&mut self, direction: FftDirection) {
        self.direction = direction;
    }

    pub(crate) fn set_last_dim_is_odd(&mut self, odd: bool) {
        self.last_dim_is_odd = odd;
    }

    pub(crate) fn set_input(&mut self, input: FilterData, class: &'static str) -> Result<()> {
        let expected = self.kind.input_domain();
        let got = input.domain();
        if got != expected {
            return Err(Error::InputDomainMismatch {
                filter: class,
                expected,
                got,
            });
        }
        self.input = Some(input);
        self.output = None;
        Ok(())
    }

    pub(crate) fn take_output(&mut self) -> Option<FilterData> {
        self.output.take()
    }

    /// Run the transform for this core's kind. Input domain was validated at
    /// bind time, so the unreachable arms really are unreachable.
    pub(crate) fn execute(&mut self, parallel: bool) -> Result<()> {
        let input = self.input.as_ref().ok_or(Error::MissingInput)?;
        let output = match (self.kind, input) {
            (FilterKind::Forward, FilterData::Real(v)) => {
                FilterData::Spectral(engine::forward_nd(v, parallel)?)
            }
            (FilterKind::Inverse, FilterData::Spectral(s)) => {
                FilterData::Real(engine::inverse_nd(s, parallel)?)
            }
            (FilterKind::Forward1D, FilterData::Real(v)) => {
                FilterData::Spectral(engine::forward_axis(v, self.axis, parallel)?)
            }
            (FilterKind::Inverse1D, FilterData::Spectral(s)) => {
                FilterData::Real(engine::inverse_axis(s, self.axis, parallel)?)
            }
            (FilterKind::ComplexToComplex, FilterData::Spectral(s)) => {
                FilterData::Spectral(engine::complex_to_complex(s, self.direction, parallel)?)
            }
            (FilterKind::ComplexToComplex1D, FilterData::Spectral(s)) => FilterData::Spectral(
                engine::complex_to_complex_axis(s, self.axis, self.direction, parallel)?,
            ),
            (FilterKind::RealToHalfHermitianForward, FilterData::Real(v)) => {
                FilterData::Spectral(engine::real_to_half_hermitian(v, parallel)?)
            }
            (FilterKind::HalfHermitianToRealInverse, FilterData::Spectral(s)) => FilterData::Real(
                engine::half_hermitian_to_real(s, self.last_dim_is_odd, parallel)?,
            ),
            (kind, input) => {
                return Err(Error::InputDomainMismatch {
                    filter: kind.class_name(self.backend),
                    expected: kind.input_domain(),
                    got: input.domain(),
                });
            }
        };
        self.output = Some(output);
        Ok(())
    }
}
