//! Factory registration and default-backend resolution tests
//!
//! Covers the typed registry: default resolution order, front-insertion
//! override semantics, and the process-global factory.

use fftprobe::backend::AcceleratedFftFilter;
use fftprobe::factory::{self, FilterFactory, InsertionPosition};
use fftprobe::filter::{BackendId, FftImageFilter, FilterData, FilterKind};
use fftprobe::volume::{SampleVolume, VolumeSpec};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_defaults_resolve_every_kind_to_accelerated() {
    let factory = FilterFactory::with_defaults();
    for kind in FilterKind::ALL {
        let filter = factory.create(kind).unwrap();
        assert_eq!(filter.kind(), kind);
        assert_eq!(filter.backend(), BackendId::Accelerated);
        assert_eq!(
            filter.name_of_class(),
            kind.class_name(BackendId::Accelerated)
        );
        assert!(
            filter
                .as_any()
                .downcast_ref::<AcceleratedFftFilter>()
                .is_some(),
            "{kind} did not downcast to the accelerated backend"
        );
    }
}

#[test]
fn test_default_resolution_order_is_accelerated_then_reference() {
    let factory = FilterFactory::with_defaults();
    for kind in FilterKind::ALL {
        assert_eq!(
            factory.resolution_order(kind),
            vec![BackendId::Accelerated, BackendId::Reference]
        );
    }
}

#[test]
fn test_front_insertion_overrides_the_default() {
    let mut factory = FilterFactory::with_defaults();
    factory.register(
        FilterKind::Forward,
        BackendId::Reference,
        InsertionPosition::Front,
    );
    let filter = factory.create(FilterKind::Forward).unwrap();
    assert_eq!(filter.backend(), BackendId::Reference);
    // Other kinds keep the accelerated default.
    let other = factory.create(FilterKind::Inverse).unwrap();
    assert_eq!(other.backend(), BackendId::Accelerated);
}

#[test]
fn test_factory_built_filter_executes() {
    let mut filter = factory::create_default(FilterKind::Forward).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let volume = SampleVolume::random(VolumeSpec::cube(8), &mut rng).unwrap();
    filter.set_input(FilterData::Real(volume)).unwrap();
    filter.update().unwrap();
    match filter.take_output() {
        Some(FilterData::Spectral(spectrum)) => assert_eq!(spectrum.len(), 512),
        other => panic!("expected spectral output, got {other:?}"),
    }
}

#[test]
fn test_global_factory_is_stable_across_reads() {
    for _ in 0..2 {
        let filter = factory::create_default(FilterKind::RealToHalfHermitianForward).unwrap();
        assert_eq!(filter.backend(), BackendId::Accelerated);
        assert_eq!(
            filter.name_of_class(),
            "AcceleratedRealToHalfHermitianForwardFftFilter"
        );
    }
}
