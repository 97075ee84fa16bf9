//! Typed filter factory
//!
//! Replaces runtime class-name resolution with a lookup table from
//! [`FilterKind`] to an ordered list of backend registrations. `create`
//! returns the front registration's instance, so whichever backend was
//! registered at the front last is the default. The process-global factory is
//! initialized with the accelerated backend in front of the reference
//! backend for every kind, mirroring the init-at-load registration the
//! verification tool guards.

use crate::backend::{AcceleratedFftFilter, ReferenceFftFilter};
use crate::error::{Error, Result};
use crate::filter::{BackendId, FftImageFilter, FilterKind};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Constructor for one (kind, backend) registration
pub type FilterConstructor = fn(FilterKind) -> Box<dyn FftImageFilter>;

/// Where a registration lands in a kind's resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPosition {
    /// Becomes the new default for the kind
    Front,
    /// Fallback, consulted only if everything in front is removed
    Back,
}

#[derive(Clone)]
struct Registration {
    backend: BackendId,
    construct: FilterConstructor,
}

fn builtin_constructor(backend: BackendId) -> FilterConstructor {
    match backend {
        BackendId::Reference => |kind| Box::new(ReferenceFftFilter::new(kind)),
        BackendId::Accelerated => |kind| Box::new(AcceleratedFftFilter::new(kind)),
    }
}

/// Ordered registry of filter constructors, one list per kind
#[derive(Default)]
pub struct FilterFactory {
    entries: HashMap<FilterKind, Vec<Registration>>,
}

impl FilterFactory {
    /// Factory with no registrations; every `create` fails
    pub fn empty() -> Self {
        Self::default()
    }

    /// Factory with the default resolution order: reference registered
    /// first, accelerated pushed to the front of every kind
    pub fn with_defaults() -> Self {
        let mut factory = Self::empty();
        factory.register_backend(BackendId::Reference, InsertionPosition::Back);
        factory.register_backend(BackendId::Accelerated, InsertionPosition::Front);
        factory
    }

    /// Register a custom constructor for one kind
    pub fn register_constructor(
        &mut self,
        kind: FilterKind,
        backend: BackendId,
        construct: FilterConstructor,
        position: InsertionPosition,
    ) {
        let list = self.entries.entry(kind).or_default();
        let registration = Registration { backend, construct };
        match position {
            InsertionPosition::Front => list.insert(0, registration),
            InsertionPosition::Back => list.push(registration),
        }
    }

    /// Register a built-in backend for one kind
    pub fn register(&mut self, kind: FilterKind, backend: BackendId, position: InsertionPosition) {
        self.register_constructor(kind, backend, builtin_constructor(backend), position);
    }

    /// Register a built-in backend for every kind
    pub fn register_backend(&mut self, backend: BackendId, position: InsertionPosition) {
        for kind in FilterKind::ALL {
            self.register(kind, backend, position);
        }
    }

    /// Construct the default (front-registered) instance for a kind
    pub fn create(&self, kind: FilterKind) -> Result<Box<dyn FftImageFilter>> {
        let registration = self
            .entries
            .get(&kind)
            .and_then(|list| list.first())
            .ok_or(Error::ConstructionFailed { kind })?;
        Ok((registration.construct)(kind))
    }

    /// Resolution order for a kind, front first
    pub fn resolution_order(&self, kind: FilterKind) -> Vec<BackendId> {
        self.entries
            .get(&kind)
            .map(|list| list.iter().map(|r| r.backend).collect())
            .unwrap_or_default()
    }
}

/// Process-global factory, built with [`FilterFactory::with_defaults`] on
/// first access
pub fn global() -> &'static RwLock<FilterFactory> {
    static GLOBAL: OnceLock<RwLock<FilterFactory>> = OnceLock::new();
    GLOBAL.get_or_init(|| RwLock::new(FilterFactory::with_defaults()))
}

/// Construct a kind's default instance through the global factory
pub fn create_default(kind: FilterKind) -> Result<Box<dyn FftImageFilter>> {
    global().read().create(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_factory_fails_construction() {
        let factory = FilterFactory::empty();
        let err = factory.create(FilterKind::Forward).unwrap_err();
        assert!(matches!(
            err,
            Error::ConstructionFailed {
                kind: FilterKind::Forward
            }
        ));
    }

    #[test]
    fn test_front_registration_wins() {
        let mut factory = FilterFactory::empty();
        factory.register(
            FilterKind::Forward,
            BackendId::Accelerated,
            InsertionPosition::Back,
        );
        factory.register(
            FilterKind::Forward,
            BackendId::Reference,
            InsertionPosition::Front,
        );
        let filter = factory.create(FilterKind::Forward).unwrap();
        assert_eq!(filter.backend(), BackendId::Reference);
        assert_eq!(
            factory.resolution_order(FilterKind::Forward),
            vec![BackendId::Reference, BackendId::Accelerated]
        );
    }

    #[test]
    fn test_defaults_resolve_accelerated_for_every_kind() {
        let factory = FilterFactory::with_defaults();
        for kind in FilterKind::ALL {
            let filter = factory.create(kind).unwrap();
            assert_eq!(filter.backend(), BackendId::Accelerated);
            assert_eq!(filter.kind(), kind);
        }
    }

    #[test]
    fn test_global_factory_constructs_defaults() {
        let filter = create_default(FilterKind::Inverse).unwrap();
        assert_eq!(filter.backend(), BackendId::Accelerated);
        assert_eq!(filter.name_of_class(), "AcceleratedInverseFftFilter");
    }
}
