use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
};
extern crate hodgkin_huxley_waveform;
use hodgkin_huxley_waveform::{
    neuron::hodgkin_huxley::{SimulationParameters, VoltageIntegration},
    waveform::{construct_waveform_with_settings, WaveformSettings},
};


// Builds the reference waveform and the integrated voltage waveform for the same
// parameters and writes both to a .csv file at the working directory
fn main() -> Result<(), Box<dyn Error>> {
    let params = SimulationParameters { v_0: 20., ..SimulationParameters::default() };

    let reference_settings = WaveformSettings::from_sampling_rate(100_000);
    let integrated_settings = WaveformSettings {
        voltage_integration: VoltageIntegration::Integrated,
        ..reference_settings
    };

    let increments = construct_waveform_with_settings(&reference_settings, &params)?;
    let voltages = construct_waveform_with_settings(&integrated_settings, &params)?;

    let mut file = BufWriter::new(File::create("hodgkin_huxley_waveform.csv")?);
    writeln!(file, "sample,increment,voltage")?;
    for (n, (increment, voltage)) in increments.iter().zip(voltages.iter()).enumerate() {
        writeln!(file, "{},{},{}", n, increment, voltage)?;
    }
    file.flush()?;

    Ok(())
}
