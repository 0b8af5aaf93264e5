#[cfg(test)]
mod tests {
    use rand::Rng;
    use hodgkin_huxley_waveform::{
        error::WaveformError,
        neuron::hodgkin_huxley::{HodgkinHuxleyIntegrator, SimulationParameters, VoltageIntegration},
        waveform::{
            construct_hodgkin_huxley_waveform, construct_waveform, construct_waveform_with_settings,
            construct_waveforms, WaveformSettings, SIMULATION_STEPS,
        },
    };


    // first increment of the default parameters from n = 0.32, m = 0.05, h = 0.60 at 0 mV
    const GOLDEN_INCREMENT: f64 = -0.0030690477477611734;

    #[test]
    pub fn test_invalid_sampling_rates() {
        for rate in [1, 150, 199, 333, 350, 44_100] {
            match construct_waveform(rate, &SimulationParameters::default()) {
                Err(WaveformError::InvalidSamplingRate(reported)) => assert_eq!(reported, rate),
                Ok(_) => panic!("{} Hz should be rejected", rate),
            }
        }
    }

    #[test]
    pub fn test_random_invalid_sampling_rates() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let rate: u32 = rng.gen_range(1..=1_000_000);
            let result = construct_waveform(rate, &SimulationParameters::default());

            assert_eq!(result.is_err(), rate % 200 != 0);
        }
    }

    #[test]
    pub fn test_single_sample_golden_value() -> Result<(), WaveformError> {
        let waveform = construct_hodgkin_huxley_waveform(
            200, 1., 36., 120., 0.3, -12., 115., 10.6, 0.,
        )?;

        assert_eq!(waveform.len(), 1);
        assert!((waveform[0] - GOLDEN_INCREMENT).abs() < 1e-12);

        Ok(())
    }

    #[test]
    pub fn test_golden_value_from_formulas() -> Result<(), WaveformError> {
        let (n0, m0, h0, dt) = (0.32_f64, 0.05_f64, 0.60_f64, 0.01);
        let v = 0_f64;

        let relax = |x: f64, alpha: f64, beta: f64| {
            let tau = 1. / (alpha + beta);
            x + dt / tau * (alpha * tau - x)
        };

        let alpha_n = (10. - v) / (100. * (((10. - v) / 10.).exp() - 1.));
        let alpha_m = (25. - v) / (10. * (((25. - v) / 10.).exp() - 1.));
        let n = relax(n0, alpha_n, 0.125 * (-v / 80.).exp());
        let m = relax(m0, alpha_m, 4. * (-v / 18.).exp());
        let h = relax(h0, 0.07 * (-v / 20.).exp(), 1. / (((30. - v) / 10.).exp() + 1.));

        let i_na = 120. * m.powi(3) * h * (115. - v);
        let i_k = 36. * n.powi(4) * (-12. - v);
        let i_m = 0.3 * (10.6 - v);
        let expected = dt / 1. * (i_na + i_k + i_m);

        let waveform = construct_waveform(200, &SimulationParameters::default())?;
        assert!((waveform[0] - expected).abs() < 1e-12);

        Ok(())
    }

    #[test]
    pub fn test_samples_match_integrator_steps() -> Result<(), WaveformError> {
        let params = SimulationParameters::default();
        let waveform = construct_waveform(1000, &params)?;
        assert_eq!(waveform.len(), 5);

        let mut integrator = HodgkinHuxleyIntegrator::new(&params);
        let increments: Vec<f64> = (0..SIMULATION_STEPS).map(|_| integrator.step()).collect();
        assert_eq!(integrator.timestep, SIMULATION_STEPS);

        for k in 0..5 {
            assert_eq!(waveform[k], increments[100 * k]);
        }

        Ok(())
    }

    #[test]
    pub fn test_waveform_lengths() -> Result<(), WaveformError> {
        for rate in [200, 400, 1000, 20_000, 48_000, 100_000] {
            let waveform = construct_waveform(rate, &SimulationParameters::default())?;
            assert_eq!(waveform.len(), (rate / 200) as usize);
        }

        Ok(())
    }

    #[test]
    pub fn test_determinism() -> Result<(), WaveformError> {
        let params = SimulationParameters { v_0: 3.5, ..SimulationParameters::default() };

        let first = construct_waveform(20_000, &params)?;
        let second = construct_waveform(20_000, &params)?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    pub fn test_singularity_guards() -> Result<(), WaveformError> {
        for v_0 in [10., 25.] {
            let params = SimulationParameters { v_0, ..SimulationParameters::default() };
            let waveform = construct_waveform(200, &params)?;

            assert!(waveform[0].is_finite(), "increment at {} mV is {}", v_0, waveform[0]);
        }

        Ok(())
    }

    #[test]
    pub fn test_reference_waveform_stays_small() -> Result<(), WaveformError> {
        // membrane potential never moves so increments only drift through the gates
        let waveform = construct_waveform(100_000, &SimulationParameters::default())?;

        assert!(waveform.iter().all(|i| i.is_finite() && i.abs() < 0.01));

        Ok(())
    }

    #[test]
    pub fn test_integrated_waveform_spikes() -> Result<(), WaveformError> {
        let settings = WaveformSettings {
            voltage_integration: VoltageIntegration::Integrated,
            ..WaveformSettings::from_sampling_rate(20_000)
        };
        let params = SimulationParameters { v_0: 20., ..SimulationParameters::default() };

        let voltages = construct_waveform_with_settings(&settings, &params)?;
        let peak = voltages.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        assert_eq!(voltages.len(), 100);
        assert!(peak > 90., "peak voltage was {}", peak);

        Ok(())
    }

    #[test]
    pub fn test_parallel_batch_matches_sequential() -> Result<(), WaveformError> {
        let settings = WaveformSettings::from_sampling_rate(10_000);
        let params: Vec<SimulationParameters> = (0..16)
            .map(|i| SimulationParameters { v_0: i as f64 * 2., ..SimulationParameters::default() })
            .collect();

        let batch = construct_waveforms(&settings, &params)?;
        assert_eq!(batch.len(), params.len());

        for (waveform, p) in batch.iter().zip(params.iter()) {
            assert_eq!(*waveform, construct_waveform(10_000, p)?);
        }

        Ok(())
    }

    #[test]
    pub fn test_parallel_batch_rejects_invalid_rate() {
        let settings = WaveformSettings::from_sampling_rate(199);

        assert!(construct_waveforms(&settings, &[SimulationParameters::default()]).is_err());
    }
}
