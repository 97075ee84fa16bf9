//! Parallel accelerated backend
//!
//! Line batches run on rayon. By default work goes to the global pool; when
//! the global configuration carries a worker override, a dedicated pool of
//! that size is built at construction time, so no `update` call ever pays
//! the pool construction. A pool build failure is held until the first
//! update, where it surfaces as a backend error.

use super::FilterCore;
use crate::config::GlobalConfiguration;
use crate::error::{Error, Result};
use crate::filter::{BackendId, FftDirection, FftImageFilter, FilterData, FilterKind};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::any::Any;

/// Accelerated implementation of every filter kind
#[derive(Debug)]
pub struct AcceleratedFftFilter {
    core: FilterCore,
    pool: std::result::Result<Option<ThreadPool>, String>,
}

impl AcceleratedFftFilter {
    /// New accelerated filter for the given kind
    ///
    /// The worker override is sampled from the global configuration here and
    /// any dedicated pool is built immediately, so later configuration
    /// changes do not affect an existing instance and the transform itself
    /// never pays pool construction.
    pub fn new(kind: FilterKind) -> Self {
        let pool = match GlobalConfiguration::workers() {
            0 => Ok(None),
            workers => ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map(Some)
                .map_err(|e| e.to_string()),
        };
        Self {
            core: FilterCore::new(kind, BackendId::Accelerated),
            pool,
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

    /// True when this instance owns a dedicated pool from a non-zero worker
    /// override sampled at construction
    pub fn uses_dedicated_pool(&self) -> bool {
        matches!(self.pool, Ok(Some(_)))
    }
}

impl FftImageFilter for AcceleratedFftFilter {
    fn kind(&self) -> FilterKind {
        self.core.kind()
    }

    fn backend(&self) -> BackendId {
        BackendId::Accelerated
    }

    fn name_of_class(&self) -> &'static str {
        self.core.kind().class_name(BackendId::Accelerated)
    }

    fn set_input(&mut self, input: FilterData) -> Result<()> {
        let class = self.name_of_class();
        self.core.set_input(input, class)
    }

    fn update(&mut self) -> Result<()> {
        let Self { core, pool, .. } = self;
        match pool {
            Ok(Some(pool)) => pool.install(|| core.execute(true)),
            Ok(None) => core.execute(true),
            Err(msg) => Err(Error::Backend(msg.clone())),
        }
    }

    fn take_output(&mut self) -> Option<FilterData> {
        self.core.take_output()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
