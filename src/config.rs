//! Process-global configuration for the accelerated backend
//!
//! A single synchronized instance per process. Today it carries one knob: the
//! worker-thread override the accelerated backend samples at construction
//! time. Zero (the default) means use every core via the global rayon pool.

use parking_lot::RwLock;
use std::sync::OnceLock;

/// Global accelerated-backend parameters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfiguration {
    workers: usize,
}

fn instance() -> &'static RwLock<GlobalConfiguration> {
    static INSTANCE: OnceLock<RwLock<GlobalConfiguration>> = OnceLock::new();
    INSTANCE.get_or_init(|| RwLock::new(GlobalConfiguration::default()))
}

impl GlobalConfiguration {
    /// Current worker-thread override (0 = all cores)
    pub fn workers() -> usize {
        instance().read().workers
    }

    /// Set the worker-thread override for accelerated filters constructed
    /// after this call
    pub fn set_workers(workers: usize) {
        instance().write().workers = workers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the global is not raced by the parallel test runner.
    #[test]
    fn test_default_then_set_then_get() {
        assert_eq!(GlobalConfiguration::workers(), 0);
        GlobalConfiguration::set_workers(2);
        assert_eq!(GlobalConfiguration::workers(), 2);
        GlobalConfiguration::set_workers(0);
        assert_eq!(GlobalConfiguration::workers(), 0);
    }
}
