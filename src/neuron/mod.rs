//! Membrane models used to generate waveforms.

pub mod hodgkin_huxley;
