//! Dense 3D sample volumes
//!
//! Volumes are stored row-major (C order, last axis fastest). The benchmark
//! sweep only ever produces cubes, but the filters accept any positive
//! per-axis lengths.

use crate::error::{Error, Result};
use num_complex::Complex32;
use rand::Rng;

/// Per-axis lengths of a 3D volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeSpec {
    dims: [usize; 3],
}

impl VolumeSpec {
    /// Spec with explicit per-axis lengths
    pub fn new(dims: [usize; 3]) -> Self {
        Self { dims }
    }

    /// Cubic spec with the same length on every axis
    pub fn cube(edge: usize) -> Self {
        Self { dims: [edge; 3] }
    }

    /// Per-axis lengths
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Total element count
    pub fn voxels(&self) -> usize {
        self.dims.iter().product()
    }

    /// Reject volumes with a zero-length axis
    pub fn validate(&self) -> Result<()> {
        for (axis, &len) in self.dims.iter().enumerate() {
            if len == 0 {
                return Err(Error::InvalidLength { axis, len });
            }
        }
        Ok(())
    }
}

/// Dense real-valued (f32) 3D volume
#[derive(Debug, Clone, PartialEq)]
pub struct SampleVolume {
    dims: [usize; 3],
    data: Vec<f32>,
}

impl SampleVolume {
    /// Build from an existing buffer, checking the element count
    pub fn from_vec(dims: [usize; 3], data: Vec<f32>) -> Result<Self> {
        let expected: usize = dims.iter().product();
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                dims,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Fresh volume filled with uniform [0, 1) samples
    pub fn random<R: Rng + ?Sized>(spec: VolumeSpec, rng: &mut R) -> Result<Self> {
        spec.validate()?;
        let data = (0..spec.voxels())
            .map(|_| rng.random_range(0.0f32..1.0))
            .collect();
        Ok(Self {
            dims: spec.dims(),
            data,
        })
    }

    /// Per-axis lengths
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Total element count
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the volume holds no samples
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the sample buffer
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Dense complex-valued (Complex32) 3D spectrum
///
/// Half-Hermitian spectra carry the truncated last-axis length in `dims`;
/// reconstruction of the dropped coefficients is the inverse filter's job.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralVolume {
    dims: [usize; 3],
    data: Vec<Complex32>,
}

impl SpectralVolume {
    /// Build from an existing buffer, checking the element count
    pub fn from_vec(dims: [usize; 3], data: Vec<Complex32>) -> Result<Self> {
        let expected: usize = dims.iter().product();
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                dims,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Per-axis lengths
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Total element count
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the spectrum holds no coefficients
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the coefficient buffer
    pub fn as_slice(&self) -> &[Complex32] {
        &self.data
    }
}
