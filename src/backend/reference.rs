//! Serial CPU reference backend

use super::FilterCore;
use crate::error::Result;
use crate::filter::{BackendId, FftDirection, FftImageFilter, FilterData, FilterKind};
use std::any::Any;

/// Reference implementation of every filter kind
///
/// Runs each axis pass serially on the calling thread; the baseline the
/// benchmark measures the accelerated backend against.
#[derive(Debug)]
pub struct ReferenceFftFilter {
    core: FilterCore,
}

impl ReferenceFftFilter {
    /// New reference filter for the given kind
    pub fn new(kind: FilterKind) -> Self {
        Self {
            core: FilterCore::new(kind, BackendId::Reference),
        }
    }

    /// Axis the 1D kinds transform along (default 0)
    pub fn set_direction_axis(&mut self, axis: usize) {
        self.core.set_direction_axis(axis);
    }

    /// Transform direction for the complex-to-complex kinds (default forward)
    pub fn set_transform_direction(&mut self, direction: FftDirection) {
        self.core.set_transform_direction(direction);
    }

    /// Whether the half-Hermitian input's original last axis was odd
    pub fn set_actual_last_dim_is_odd(&mut self, odd: bool) {
        self.core.set_last_dim_is_odd(odd);
    }
}

impl FftImageFilter for ReferenceFftFilter {
    fn kind(&self) -> FilterKind {
        self.core.kind()
    }

    fn backend(&self) -> BackendId {
        BackendId::Reference
    }

    fn name_of_class(&self) -> &'static str {
        self.core.kind().class_name(BackendId::Reference)
    }

    fn set_input(&mut self, input: FilterData) -> Result<()> {
        let class = self.name_of_class();
        self.core.set_input(input, class)
    }

    fn update(&mut self) -> Result<()> {
        self.core.execute(false)
    }

    fn take_output(&mut self) -> Option<FilterData> {
        self.core.take_output()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
