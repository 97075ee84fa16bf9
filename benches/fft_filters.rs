//! Criterion benchmarks for the forward FFT filters.
//!
//! Run with: cargo bench
//!
//! Sizes are kept small so the suite finishes quickly; the `fft_benchmark`
//! binary covers the full sweep the harness was built for.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fftprobe::backend::{AcceleratedFftFilter, ReferenceFftFilter};
use fftprobe::filter::{FftImageFilter, FilterData, FilterKind};
use fftprobe::volume::{SampleVolume, VolumeSpec};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_fft");
    for edge in [16usize, 32, 64] {
        let spec = VolumeSpec::cube(edge);
        group.throughput(Throughput::Elements(spec.voxels() as u64));

        group.bench_with_input(BenchmarkId::new("reference", edge), &spec, |b, &spec| {
            let mut rng = StdRng::seed_from_u64(17);
            b.iter(|| {
                let mut filter = ReferenceFftFilter::new(FilterKind::Forward);
                let volume = SampleVolume::random(spec, &mut rng).unwrap();
                filter.set_input(FilterData::Real(volume)).unwrap();
                filter.update().unwrap();
                black_box(filter.take_output())
            });
        });

        group.bench_with_input(BenchmarkId::new("accelerated", edge), &spec, |b, &spec| {
            let mut rng = StdRng::seed_from_u64(17);
            b.iter(|| {
                let mut filter = AcceleratedFftFilter::new(FilterKind::Forward);
                let volume = SampleVolume::random(spec, &mut rng).unwrap();
                filter.set_input(FilterData::Real(volume)).unwrap();
                filter.update().unwrap();
                black_box(filter.take_output())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forward);
criterion_main!(benches);
