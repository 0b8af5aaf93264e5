//! # Hodgkin Huxley Waveform
//!
//! `hodgkin_huxley_waveform` simulates a single Hodgkin Huxley membrane for a fixed
//! 5 ms window at a 0.01 ms timestep and resamples the result into a waveform at an
//! arbitrary sampling rate (divisible by 200 Hz), for audio rate playback or signal analysis.
//!
//! The default integrator reproduces the reference model exactly, which reports the
//! voltage increment of each step without ever advancing the membrane potential. Use
//! [`VoltageIntegration::Integrated`](neuron::hodgkin_huxley::VoltageIntegration) to
//! accumulate the increments and record a real membrane potential trace instead.
//!
//! ## Example Code
//!
//! ### Constructing a reference waveform
//!
//! ```rust
//! use hodgkin_huxley_waveform::{
//!     error::WaveformError,
//!     neuron::hodgkin_huxley::SimulationParameters,
//!     waveform::construct_waveform,
//! };
//!
//! fn main() -> Result<(), WaveformError> {
//!     let params = SimulationParameters::default();
//!     let waveform = construct_waveform(1000, &params)?;
//!
//!     // 1000 Hz over the 5 ms window
//!     assert_eq!(waveform.len(), 5);
//!
//!     // rates that are not a multiple of 200 Hz are rejected
//!     assert!(construct_waveform(350, &params).is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Integrating the membrane potential and inspecting the spectrum
//!
//! ```rust
//! use hodgkin_huxley_waveform::{
//!     analysis::get_power_density,
//!     error::HodgkinHuxleyWaveformError,
//!     neuron::hodgkin_huxley::{SimulationParameters, VoltageIntegration},
//!     waveform::{construct_waveform_with_settings, WaveformSettings},
//! };
//!
//! fn main() -> Result<(), HodgkinHuxleyWaveformError> {
//!     let settings = WaveformSettings {
//!         sampling_rate: 100_000,
//!         voltage_integration: VoltageIntegration::Integrated,
//!         injected_current: 0.,
//!     };
//!     let params = SimulationParameters { v_0: 20., ..SimulationParameters::default() };
//!
//!     let voltages = construct_waveform_with_settings(&settings, &params)?;
//!     let (frequencies, power) = get_power_density(&voltages, settings.sampling_rate as f64)?;
//!
//!     assert_eq!(frequencies.len(), power.len());
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod neuron;
pub mod waveform;
