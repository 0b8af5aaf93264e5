//! Resamples a fixed 5 ms Hodgkin Huxley simulation into a waveform at a requested
//! sampling rate.
//!
//! The simulation always runs [`SIMULATION_STEPS`] steps of [`DT`](crate::neuron::hodgkin_huxley::DT)
//! and the output holds `sampling_rate / 200` samples, so one waveform plays back over 5 ms
//! at the requested rate.

use std::result::Result;
use ndarray::Array1;
use rayon::prelude::*;
use tracing::{debug, warn};
use crate::error::WaveformError;
use crate::neuron::hodgkin_huxley::{
    HodgkinHuxleyIntegrator, SimulationParameters, VoltageIntegration,
};


/// Number of integrator steps in one waveform (5 ms at 0.01 ms)
pub const SIMULATION_STEPS: usize = 500;

/// Sampling rates must be divisible by this to yield a whole number of samples
pub const SAMPLING_RATE_DIVISOR: u32 = 200;

/// Validated output layout for a given sampling rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformShape {
    /// Output sampling rate (Hz)
    pub sampling_rate: u32,
    /// Number of samples in the output
    pub waveform_length: usize,
    /// Integrator steps consumed per output sample
    pub steps_per_sample: f64,
}

impl WaveformShape {
    /// Derives the waveform length and resampling stride, fails if the
    /// sampling rate is not divisible by `200`
    pub fn new(sampling_rate: u32) -> Result<Self, WaveformError> {
        if sampling_rate % SAMPLING_RATE_DIVISOR != 0 {
            return Err(WaveformError::InvalidSamplingRate(sampling_rate));
        }

        let waveform_length = (sampling_rate / SAMPLING_RATE_DIVISOR) as usize;
        let steps_per_sample = SIMULATION_STEPS as f64 / waveform_length as f64;

        Ok(WaveformShape { sampling_rate, waveform_length, steps_per_sample })
    }

    /// Whether the stride lands exactly on the step grid and fills every sample
    pub fn is_aligned(&self) -> bool {
        self.waveform_length > 0 && SIMULATION_STEPS % self.waveform_length == 0
    }

    /// Whether the value of step `i` is recorded
    pub fn records_step(&self, i: usize) -> bool {
        i as f64 % self.steps_per_sample == 0.
    }
}

/// Settings for a waveform construction beyond the biophysical parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformSettings {
    /// Output sampling rate (Hz)
    pub sampling_rate: u32,
    /// Whether the membrane potential is integrated, when integrated the
    /// waveform holds membrane potentials instead of increments
    pub voltage_integration: VoltageIntegration,
    /// Constant injected current
    pub injected_current: f64,
}

impl Default for WaveformSettings {
    fn default() -> Self {
        WaveformSettings {
            sampling_rate: 20_000,
            voltage_integration: VoltageIntegration::Reference,
            injected_current: 0.,
        }
    }
}

impl WaveformSettings {
    /// Reference settings at the given sampling rate
    pub fn from_sampling_rate(sampling_rate: u32) -> Self {
        WaveformSettings { sampling_rate, ..WaveformSettings::default() }
    }
}

fn run_waveform(
    shape: &WaveformShape,
    settings: &WaveformSettings,
    params: &SimulationParameters,
) -> Array1<f64> {
    let mut integrator = HodgkinHuxleyIntegrator::new(params)
        .with_voltage_integration(settings.voltage_integration)
        .with_injected_current(settings.injected_current);

    let mut voltages: Array1<f64> = Array1::zeros(shape.waveform_length);
    let mut j = 0;
    for i in 0..SIMULATION_STEPS {
        let increment = integrator.step();
        if shape.records_step(i) {
            let v = match settings.voltage_integration {
                VoltageIntegration::Reference => increment,
                VoltageIntegration::Integrated => integrator.current_voltage,
            };

            // recorded steps are k * steps_per_sample for k < waveform_length
            if let Some(slot) = voltages.get_mut(j) {
                *slot = v;
            }
            j += 1;
        }
    }

    voltages
}

/// Constructs a waveform with the given settings, fails before any simulation
/// if the sampling rate is not divisible by `200`
pub fn construct_waveform_with_settings(
    settings: &WaveformSettings,
    params: &SimulationParameters,
) -> Result<Array1<f64>, WaveformError> {
    let shape = WaveformShape::new(settings.sampling_rate)?;
    if !shape.is_aligned() {
        warn!(
            sampling_rate = shape.sampling_rate,
            steps_per_sample = shape.steps_per_sample,
            "stride does not divide the simulation window, unfilled samples stay at zero"
        );
    }

    debug!(
        sampling_rate = shape.sampling_rate,
        waveform_length = shape.waveform_length,
        steps_per_sample = shape.steps_per_sample,
        "constructing hodgkin huxley waveform"
    );

    Ok(run_waveform(&shape, settings, params))
}

/// Constructs a reference waveform of voltage increments at the given sampling rate
pub fn construct_waveform(
    sampling_rate: u32,
    params: &SimulationParameters,
) -> Result<Array1<f64>, WaveformError> {
    construct_waveform_with_settings(&WaveformSettings::from_sampling_rate(sampling_rate), params)
}

/// Constructs a reference waveform from each biophysical parameter individually
///
/// - `sampling_rate` : output sampling rate (Hz), must be divisible by `200`
///
/// - `c_m` : membrane capacitance (µF/cm^2)
///
/// - `g_k_max`, `g_na_max`, `g_m` : potassium, sodium and leak conductances
///
/// - `e_k`, `e_na` : potassium and sodium reversal potentials (mV)
///
/// - `v_rest` : resting potential (mV)
///
/// - `v_0` : initial membrane potential (mV)
#[allow(clippy::too_many_arguments)]
pub fn construct_hodgkin_huxley_waveform(
    sampling_rate: u32,
    c_m: f64,
    g_k_max: f64,
    g_na_max: f64,
    g_m: f64,
    e_k: f64,
    e_na: f64,
    v_rest: f64,
    v_0: f64,
) -> Result<Array1<f64>, WaveformError> {
    let params = SimulationParameters { c_m, g_k_max, g_na_max, g_m, e_k, e_na, v_rest, v_0 };

    construct_waveform(sampling_rate, &params)
}

/// Constructs one waveform per parameter set in parallel, each with its own integrator
pub fn construct_waveforms(
    settings: &WaveformSettings,
    params: &[SimulationParameters],
) -> Result<Vec<Array1<f64>>, WaveformError> {
    let shape = WaveformShape::new(settings.sampling_rate)?;
    debug!(count = params.len(), sampling_rate = shape.sampling_rate, "constructing waveform batch");

    Ok(
        params.par_iter()
            .map(|p| run_waveform(&shape, settings, p))
            .collect()
    )
}
