//! Tools to inspect generated waveforms, power spectral density and peak detection.

use std::result::Result;
use ndarray::{Array1, s};
use num_complex::Complex;
use rustfft::{FftPlanner, FftDirection};
use crate::error::AnalysisError;


/// Retrieves the power density of the given waveform sampled at `sampling_rate` (Hz),
/// returns tuple of frequency axis (Hz) and associated power spectrum respectively,
/// both covering the positive half of the spectrum
pub fn get_power_density(
    x: &Array1<f64>,
    sampling_rate: f64,
) -> Result<(Array1<f64>, Array1<f64>), AnalysisError> {
    if x.is_empty() {
        return Err(AnalysisError::EmptyWaveform);
    }

    let dt = 1. / sampling_rate;
    let total_time = x.len() as f64 * dt;
    let x_mean = x.sum() / x.len() as f64;

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft(x.len(), FftDirection::Forward);

    let mut x_fft: Vec<Complex<f64>> = x.iter()
        .map(|&x_i| Complex::new(x_i - x_mean, 0.0))
        .collect();
    fft.process(&mut x_fft);

    let sxx: Array1<f64> = Array1::from(x_fft)
        .mapv(|val| (2.0 * dt.powi(2) / total_time * (val * val.conj())).re);

    let half = x.len() / 2;
    let sxx_positive = sxx.slice(s![0..half]).to_owned();

    let df = 1.0 / total_time;
    let faxis: Array1<f64> = (0..half).map(|k| k as f64 * df).collect();

    Ok((faxis, sxx_positive))
}

fn diff(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Returns indices of where values have peaked given a certain tolerance on the
/// first difference, neighboring candidate indices are merged into one peak
pub fn find_peaks(values: &[f64], tolerance: f64) -> Vec<usize> {
    let first_diff = diff(values);
    let second_diff = diff(&first_diff);

    let local_maxima: Vec<usize> = first_diff.iter()
        .enumerate()
        .filter(|(n, i)| i.abs() <= tolerance && *n + 1 < second_diff.len() && second_diff[n + 1] < 0.)
        .map(|(n, _)| n + 2)
        .collect();

    let mut peak_spans: Vec<Vec<usize>> = Vec::new();
    for (n, &i) in local_maxima.iter().enumerate() {
        if n == 0 || local_maxima[n] - local_maxima[n - 1] != 1 {
            peak_spans.push(Vec::new());
        }

        if let Some(span) = peak_spans.last_mut() {
            span.push(i);
        }
    }

    peak_spans.iter()
        .map(|i| i[i.len() / 2])
        .collect()
}
