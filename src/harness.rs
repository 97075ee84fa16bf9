//! Benchmark sweep over cubic volume sizes
//!
//! For each configured edge length and repetition, the harness generates one
//! fresh random volume per backend (never shared, so neither backend profits
//! from the other's warm state), times only the `update` call with a
//! monotonic clock, and emits a tab-separated record. Timing is best-effort
//! wall clock; there is no pinning or calibration, and any filter error
//! aborts the sweep.

use crate::backend::{AcceleratedFftFilter, ReferenceFftFilter};
use crate::error::Result;
use crate::filter::{FftImageFilter, FilterData, FilterKind};
use crate::volume::{SampleVolume, VolumeSpec};
use rand::Rng;
use std::io::Write;
use std::time::Instant;

/// Column header preceding the record lines
pub const REPORT_HEADER: &str = "Experiment   Image Len (px)\tVolume (px)\tCPU FFT Time (s)\tGPU FFT Time(s)\tRelative Speed";

/// Sweep parameters: edge lengths to visit and repetitions per length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Cube edge lengths, ascending
    pub edge_lens: Vec<usize>,
    /// Trials per edge length
    pub repetitions: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            edge_lens: vec![10, 30, 100, 200, 300, 600, 800, 1000, 1200, 1500, 2000],
            repetitions: 3,
        }
    }
}

/// One timed trial; immutable once recorded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    /// Index of the edge length within the sweep
    pub experiment: usize,
    /// Cube edge length in pixels
    pub edge_len: usize,
    /// Total volume in voxels (edge³)
    pub voxels: usize,
    /// Reference backend elapsed seconds
    pub reference_secs: f64,
    /// Accelerated backend elapsed seconds
    pub accelerated_secs: f64,
}

impl TrialRecord {
    /// Reference time over accelerated time; > 1 means the accelerated
    /// backend won
    pub fn relative_speed(&self) -> f64 {
        self.reference_secs / self.accelerated_secs
    }

    /// Render this record as one report line
    pub fn write_row<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "\t{:>2}\t\t{:>5}\t{}\t\t{:.6}\t{:.6}\t{:.1}%",
            self.experiment,
            self.edge_len,
            format_scientific(self.voxels as f64, 2),
            self.reference_secs,
            self.accelerated_secs,
            self.relative_speed() * 100.0,
        )?;
        Ok(())
    }
}

/// Scientific notation with an explicit sign and two-digit exponent, e.g.
/// `1.00e+03` for 1000
pub fn format_scientific(value: f64, precision: usize) -> String {
    let rendered = format!("{value:.precision$e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => rendered,
    }
}

/// Generate a fresh volume, bind it, and time only the transform itself
fn time_forward<R: Rng + ?Sized>(
    filter: &mut dyn FftImageFilter,
    spec: VolumeSpec,
    rng: &mut R,
) -> Result<f64> {
    let volume = SampleVolume::random(spec, rng)?;
    filter.set_input(FilterData::Real(volume))?;
    let start = Instant::now();
    filter.update()?;
    Ok(start.elapsed().as_secs_f64())
}

/// Run the full sweep, writing the header and one line per trial
///
/// Returns every trial record in emission order. Exactly
/// `edge_lens.len() * repetitions` records are produced on success.
pub fn run_sweep<W: Write>(config: &SweepConfig, out: &mut W) -> Result<Vec<TrialRecord>> {
    let mut rng = rand::rng();
    run_sweep_with_rng(config, out, &mut rng)
}

/// Sweep with a caller-provided RNG, for deterministic tests
pub fn run_sweep_with_rng<W: Write, R: Rng + ?Sized>(
    config: &SweepConfig,
    out: &mut W,
    rng: &mut R,
) -> Result<Vec<TrialRecord>> {
    writeln!(out, "{REPORT_HEADER}")?;
    let mut records = Vec::with_capacity(config.edge_lens.len() * config.repetitions);
    for (experiment, &edge_len) in config.edge_lens.iter().enumerate() {
        let spec = VolumeSpec::cube(edge_len);
        spec.validate()?;
        for _ in 0..config.repetitions {
            let mut reference = ReferenceFftFilter::new(FilterKind::Forward);
            let reference_secs = time_forward(&mut reference, spec, rng)?;

            let mut accelerated = AcceleratedFftFilter::new(FilterKind::Forward);
            let accelerated_secs = time_forward(&mut accelerated, spec, rng)?;

            let record = TrialRecord {
                experiment,
                edge_len,
                voxels: spec.voxels(),
                reference_secs,
                accelerated_secs,
            };
            record.write_row(out)?;
            records.push(record);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientific_format_pads_exponent() {
        assert_eq!(format_scientific(1000.0, 2), "1.00e+03");
        assert_eq!(format_scientific(27000.0, 2), "2.70e+04");
        assert_eq!(format_scientific(0.00125, 2), "1.25e-03");
        assert_eq!(format_scientific(0.0, 2), "0.00e+00");
        assert_eq!(format_scientific(8.0e12, 1), "8.0e+12");
    }

    #[test]
    fn test_relative_speed_is_ratio() {
        let record = TrialRecord {
            experiment: 0,
            edge_len: 10,
            voxels: 1000,
            reference_secs: 0.3,
            accelerated_secs: 0.1,
        };
        assert!((record.relative_speed() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_row_fields_are_tab_separated() {
        let record = TrialRecord {
            experiment: 3,
            edge_len: 200,
            voxels: 8_000_000,
            reference_secs: 1.25,
            accelerated_secs: 0.5,
        };
        let mut buf = Vec::new();
        record.write_row(&mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.contains("8.00e+06"));
        assert!(line.contains("1.250000"));
        assert!(line.contains("250.0%"));
    }
}
