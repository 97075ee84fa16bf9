//! Shared transform engine for both backends
//!
//! The FFT kernels themselves come from the rustfft planner; this module owns
//! the axis-separable drivers that apply 1D plans along each axis of a dense
//! row-major 3D buffer. Both backends run the same code paths, so reference
//! and accelerated outputs agree to float precision; the accelerated backend
//! merely transforms the per-axis line batch on a rayon pool.
//!
//! Lines along a non-contiguous axis are gathered into a row-major scratch
//! buffer, transformed, and scattered back. That costs one extra buffer per
//! axis pass but keeps the parallel path safe and branch-free.

use crate::error::{Error, Result};
use crate::filter::FftDirection;
use crate::volume::{SampleVolume, SpectralVolume, VolumeSpec};
use num_complex::Complex32;
use rayon::prelude::*;
use rustfft::FftPlanner;
use std::sync::Arc;

/// Row-major strides for the given dimensions
fn strides(dims: [usize; 3]) -> [usize; 3] {
    [dims[1] * dims[2], dims[2], 1]
}

/// The two axes that index lines along `axis`
fn other_axes(axis: usize) -> (usize, usize) {
    match axis {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

/// Base offsets of every line running along `axis`
fn line_bases(dims: [usize; 3], axis: usize) -> Vec<usize> {
    let st = strides(dims);
    let (a1, a2) = other_axes(axis);
    let mut bases = Vec::with_capacity(dims[a1] * dims[a2]);
    for i in 0..dims[a1] {
        for j in 0..dims[a2] {
            bases.push(i * st[a1] + j * st[a2]);
        }
    }
    bases
}

fn plan(n: usize, direction: FftDirection) -> Arc<dyn rustfft::Fft<f32>> {
    let mut planner = FftPlanner::<f32>::new();
    match direction {
        FftDirection::Forward => planner.plan_fft_forward(n),
        FftDirection::Inverse => planner.plan_fft_inverse(n),
    }
}

/// Apply a 1D transform along one axis of a dense complex buffer.
///
/// Unnormalized in both directions; callers apply 1/N scaling where the
/// filter contract requires it.
pub(crate) fn transform_axis(
    data: &mut [Complex32],
    dims: [usize; 3],
    axis: usize,
    direction: FftDirection,
    parallel: bool,
) -> Result<()> {
    debug_assert!(axis < 3);
    let n = dims[axis];
    if n == 0 {
        return Err(Error::InvalidLength { axis, len: 0 });
    }
    if n == 1 {
        return Ok(());
    }
    let fft = plan(n, direction);
    let stride = strides(dims)[axis];
    let bases = line_bases(dims, axis);

    // Gather lines into contiguous rows.
    let mut rows = vec![Complex32::new(0.0, 0.0); data.len()];
    for (r, &base) in bases.iter().enumerate() {
        for i in 0..n {
            rows[r * n + i] = data[base + i * stride];
        }
    }

    if parallel {
        rows.par_chunks_exact_mut(n).for_each_init(
            || vec![Complex32::new(0.0, 0.0); fft.get_inplace_scratch_len()],
            |scratch, row| fft.process_with_scratch(row, scratch),
        );
    } else {
        let mut scratch = vec![Complex32::new(0.0, 0.0); fft.get_inplace_scratch_len()];
        for row in rows.chunks_exact_mut(n) {
            fft.process_with_scratch(row, &mut scratch);
        }
    }

    // Scatter transformed lines back into the strided layout.
    for (r, &base) in bases.iter().enumerate() {
        for i in 0..n {
            data[base + i * stride] = rows[r * n + i];
        }
    }
    Ok(())
}

fn transform_all_axes(
    data: &mut [Complex32],
    dims: [usize; 3],
    direction: FftDirection,
    parallel: bool,
) -> Result<()> {
    // Innermost (contiguous) axis first.
    for axis in (0..3).rev() {
        transform_axis(data, dims, axis, direction, parallel)?;
    }
    Ok(())
}

fn scale(data: &mut [Complex32], factor: f32, parallel: bool) {
    if parallel {
        data.par_iter_mut().for_each(|c| *c *= factor);
    } else {
        for c in data.iter_mut() {
            *c *= factor;
        }
    }
}

fn promote(volume: &SampleVolume) -> Vec<Complex32> {
    volume
        .as_slice()
        .iter()
        .map(|&x| Complex32::new(x, 0.0))
        .collect()
}

fn real_part(data: Vec<Complex32>) -> Vec<f32> {
    data.into_iter().map(|c| c.re).collect()
}

/// Real to full complex spectrum over all three axes
pub(crate) fn forward_nd(volume: &SampleVolume, parallel: bool) -> Result<SpectralVolume> {
    let dims = volume.dims();
    VolumeSpec::new(dims).validate()?;
    let mut data = promote(volume);
    transform_all_axes(&mut data, dims, FftDirection::Forward, parallel)?;
    SpectralVolume::from_vec(dims, data)
}

/// Full complex spectrum back to real, normalized by 1/N
pub(crate) fn inverse_nd(spectrum: &SpectralVolume, parallel: bool) -> Result<SampleVolume> {
    let dims = spectrum.dims();
    VolumeSpec::new(dims).validate()?;
    let mut data = spectrum.as_slice().to_vec();
    transform_all_axes(&mut data, dims, FftDirection::Inverse, parallel)?;
    let n: usize = dims.iter().product();
    scale(&mut data, 1.0 / n as f32, parallel);
    SampleVolume::from_vec(dims, real_part(data))
}

/// Real to complex along a single axis
pub(crate) fn forward_axis(
    volume: &SampleVolume,
    axis: usize,
    parallel: bool,
) -> Result<SpectralVolume> {
    let dims = volume.dims();
    VolumeSpec::new(dims).validate()?;
    let mut data = promote(volume);
    transform_axis(&mut data, dims, axis, FftDirection::Forward, parallel)?;
    SpectralVolume::from_vec(dims, data)
}

/// Complex back to real along a single axis, normalized by 1/n
pub(crate) fn inverse_axis(
    spectrum: &SpectralVolume,
    axis: usize,
    parallel: bool,
) -> Result<SampleVolume> {
    let dims = spectrum.dims();
    VolumeSpec::new(dims).validate()?;
    let mut data = spectrum.as_slice().to_vec();
    transform_axis(&mut data, dims, axis, FftDirection::Inverse, parallel)?;
    scale(&mut data, 1.0 / dims[axis] as f32, parallel);
    SampleVolume::from_vec(dims, real_part(data))
}

/// Complex to complex over all axes; inverse applies 1/N
pub(crate) fn complex_to_complex(
    spectrum: &SpectralVolume,
    direction: FftDirection,
    parallel: bool,
) -> Result<SpectralVolume> {
    let dims = spectrum.dims();
    VolumeSpec::new(dims).validate()?;
    let mut data = spectrum.as_slice().to_vec();
    transform_all_axes(&mut data, dims, direction, parallel)?;
    if direction == FftDirection::Inverse {
        let n: usize = dims.iter().product();
        scale(&mut data, 1.0 / n as f32, parallel);
    }
    SpectralVolume::from_vec(dims, data)
}

/// Complex to complex along a single axis; inverse applies 1/n
pub(crate) fn complex_to_complex_axis(
    spectrum: &SpectralVolume,
    axis: usize,
    direction: FftDirection,
    parallel: bool,
) -> Result<SpectralVolume> {
    let dims = spectrum.dims();
    VolumeSpec::new(dims).validate()?;
    let mut data = spectrum.as_slice().to_vec();
    transform_axis(&mut data, dims, axis, direction, parallel)?;
    if direction == FftDirection::Inverse {
        scale(&mut data, 1.0 / dims[axis] as f32, parallel);
    }
    SpectralVolume::from_vec(dims, data)
}

/// Real to half-Hermitian spectrum: the full forward transform truncated to
/// the non-redundant last-axis prefix of length n/2 + 1
pub(crate) fn real_to_half_hermitian(
    volume: &SampleVolume,
    parallel: bool,
) -> Result<SpectralVolume> {
    let full = forward_nd(volume, parallel)?;
    let [n0, n1, n2] = full.dims();
    let h = n2 / 2 + 1;
    let src = full.as_slice();
    let mut data = Vec::with_capacity(n0 * n1 * h);
    for line in src.chunks_exact(n2) {
        data.extend_from_slice(&line[..h]);
    }
    SpectralVolume::from_vec([n0, n1, h], data)
}

/// Half-Hermitian spectrum back to real.
///
/// The dropped last-axis coefficients are rebuilt from conjugate symmetry
/// before the full inverse transform runs. `last_dim_is_odd` disambiguates
/// the original length, since n/2 + 1 is the same for 2k and 2k + 1.
pub(crate) fn half_hermitian_to_real(
    spectrum: &SpectralVolume,
    last_dim_is_odd: bool,
    parallel: bool,
) -> Result<SampleVolume> {
    let [n0, n1, h] = spectrum.dims();
    VolumeSpec::new([n0, n1, h]).validate()?;
    let full_n2 = if last_dim_is_odd {
        2 * h - 1
    } else {
        2 * (h - 1)
    };
    if full_n2 == 0 {
        return Err(Error::InvalidLength { axis: 2, len: 0 });
    }

    let half = spectrum.as_slice();
    let mut data = vec![Complex32::new(0.0, 0.0); n0 * n1 * full_n2];
    for i in 0..n0 {
        for j in 0..n1 {
            let src_line = (i * n1 + j) * h;
            let dst_line = (i * n1 + j) * full_n2;
            data[dst_line..dst_line + h].copy_from_slice(&half[src_line..src_line + h]);
        }
    }
    // X[i, j, k] = conj(X[-i mod n0, -j mod n1, n2 - k]) for the trailing half.
    for i in 0..n0 {
        for j in 0..n1 {
            let ci = (n0 - i) % n0;
            let cj = (n1 - j) % n1;
            for k in h..full_n2 {
                let src = (ci * n1 + cj) * full_n2 + (full_n2 - k);
                data[(i * n1 + j) * full_n2 + k] = data[src].conj();
            }
        }
    }

    let full = SpectralVolume::from_vec([n0, n1, full_n2], data)?;
    inverse_nd(&full, parallel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides_are_row_major() {
        assert_eq!(strides([2, 3, 4]), [12, 4, 1]);
    }

    #[test]
    fn test_line_bases_cover_each_line_once() {
        let bases = line_bases([2, 3, 4], 1);
        assert_eq!(bases.len(), 8);
        let mut sorted = bases.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    #[test]
    fn test_transform_along_unit_axis_is_identity() {
        let mut data = vec![Complex32::new(2.0, -1.0); 6];
        let original = data.clone();
        transform_axis(&mut data, [1, 2, 3], 0, FftDirection::Forward, false).unwrap();
        assert_eq!(data, original);
    }

    #[test]
    fn test_serial_and_parallel_axis_transforms_agree() {
        let dims = [4, 3, 5];
        let data: Vec<Complex32> = (0..60)
            .map(|i| Complex32::new(i as f32 * 0.25, (i % 7) as f32))
            .collect();
        for axis in 0..3 {
            let mut serial = data.clone();
            let mut parallel = data.clone();
            transform_axis(&mut serial, dims, axis, FftDirection::Forward, false).unwrap();
            transform_axis(&mut parallel, dims, axis, FftDirection::Forward, true).unwrap();
            for (a, b) in serial.iter().zip(&parallel) {
                assert!((a - b).norm() < 1e-4);
            }
        }
    }

    #[test]
    fn test_half_hermitian_roundtrip_even_and_odd() {
        for n2 in [6usize, 7] {
            let dims = [3, 2, n2];
            let data: Vec<f32> = (0..dims.iter().product::<usize>())
                .map(|i| (i as f32 * 0.37).sin())
                .collect();
            let volume = SampleVolume::from_vec(dims, data.clone()).unwrap();
            let half = real_to_half_hermitian(&volume, false).unwrap();
            assert_eq!(half.dims(), [3, 2, n2 / 2 + 1]);
            let back = half_hermitian_to_real(&half, n2 % 2 == 1, false).unwrap();
            assert_eq!(back.dims(), dims);
            for (a, b) in data.iter().zip(back.as_slice()) {
                assert!((a - b).abs() < 1e-4, "expected {a}, got {b}");
            }
        }
    }
}
