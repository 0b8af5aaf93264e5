//! A fixed timestep Hodgkin Huxley integrator using the shifted resting potential
//! convention (rest at roughly `0` mV) with gating variables relaxed toward their
//! voltage dependent steady states every step.
//!
//! By default the integrator reproduces the reference behavior where [`HodgkinHuxleyIntegrator::step`]
//! only returns the voltage increment and never advances the membrane potential itself,
//! so every step is evaluated at the initial voltage. This is most likely a latent defect
//! in the reference model rather than intended dynamics, use [`VoltageIntegration::Integrated`]
//! to accumulate the increment into the membrane potential and get real action potentials.

use std::collections::HashMap;
use tracing::trace;


/// Fixed integration timestep (ms)
pub const DT: f64 = 0.01;

/// Initial potassium activation
pub const N_INIT: f64 = 0.32;
/// Initial sodium activation
pub const M_INIT: f64 = 0.05;
/// Initial sodium inactivation
pub const H_INIT: f64 = 0.60;

// offset used to step off of the removable 0/0 points of the alpha rates
const SINGULARITY_OFFSET: f64 = 0.001;

/// Potassium activation opening rate, nudges off of the removable
/// singularity at `10` mV
pub fn alpha_n(voltage: f64) -> f64 {
    let v = if voltage == 10. { voltage + SINGULARITY_OFFSET } else { voltage };

    (10. - v) / (100. * (((10. - v) / 10.).exp() - 1.))
}

/// Potassium activation closing rate
pub fn beta_n(voltage: f64) -> f64 {
    0.125 * (-voltage / 80.).exp()
}

/// Sodium activation opening rate, nudges off of the removable
/// singularity at `25` mV
pub fn alpha_m(voltage: f64) -> f64 {
    let v = if voltage == 25. { voltage + SINGULARITY_OFFSET } else { voltage };

    (25. - v) / (10. * (((25. - v) / 10.).exp() - 1.))
}

/// Sodium activation closing rate
pub fn beta_m(voltage: f64) -> f64 {
    4. * (-voltage / 18.).exp()
}

/// Sodium inactivation opening rate
pub fn alpha_h(voltage: f64) -> f64 {
    0.07 * (-voltage / 20.).exp()
}

/// Sodium inactivation closing rate
pub fn beta_h(voltage: f64) -> f64 {
    1. / (((30. - voltage) / 10.).exp() + 1.)
}

/// A gating variable that relaxes toward its steady state given its opening
/// and closing rates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatingVariable {
    /// Open probability, not clamped to `[0, 1]`
    pub state: f64,
}

impl GatingVariable {
    /// Creates a gating variable seeded at the given state
    pub fn new(state: f64) -> Self {
        GatingVariable { state }
    }

    /// Forward Euler step of `dx/dt = (x_inf - x) / tau` where `tau = 1 / (alpha + beta)`
    /// and `x_inf = alpha * tau`
    pub fn update(&mut self, alpha: f64, beta: f64, dt: f64) {
        let tau = 1. / (alpha + beta);
        let steady_state = alpha * tau;

        self.state += dt / tau * (steady_state - self.state);
    }
}

/// Whether the integrator advances its own membrane potential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoltageIntegration {
    /// Membrane potential stays at its initial value, only the increment is reported
    #[default]
    Reference,
    /// Increment is accumulated into the membrane potential after each step
    Integrated,
}

/// Biophysical parameters of a single simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Membrane capacitance (µF/cm^2)
    pub c_m: f64,
    /// Maximum potassium conductance (mS/cm^2)
    pub g_k_max: f64,
    /// Maximum sodium conductance (mS/cm^2)
    pub g_na_max: f64,
    /// Leak conductance (mS/cm^2)
    pub g_m: f64,
    /// Potassium reversal potential (mV)
    pub e_k: f64,
    /// Sodium reversal potential (mV)
    pub e_na: f64,
    /// Leak reversal (resting) potential (mV)
    pub v_rest: f64,
    /// Initial membrane potential (mV)
    pub v_0: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            c_m: 1.,
            g_k_max: 36.,
            g_na_max: 120.,
            g_m: 0.3,
            e_k: -12.,
            e_na: 115.,
            v_rest: 10.6,
            v_0: 0.,
        }
    }
}

/// Hodgkin Huxley integrator that owns its state exclusively
#[derive(Debug, Clone)]
pub struct HodgkinHuxleyIntegrator {
    /// Parameters the integrator was created with
    pub params: SimulationParameters,
    /// Timestep (ms)
    pub dt: f64,
    /// Membrane potential (mV)
    pub current_voltage: f64,
    /// Potassium activation
    pub n: GatingVariable,
    /// Sodium activation
    pub m: GatingVariable,
    /// Sodium inactivation
    pub h: GatingVariable,
    /// Last calculated sodium current
    pub i_na: f64,
    /// Last calculated potassium current
    pub i_k: f64,
    /// Last calculated leak current
    pub i_m: f64,
    /// Externally injected current
    pub i_inj: f64,
    /// Whether `step` updates the membrane potential
    pub voltage_integration: VoltageIntegration,
    /// Number of steps taken
    pub timestep: usize,
}

impl Default for HodgkinHuxleyIntegrator {
    fn default() -> Self {
        HodgkinHuxleyIntegrator::new(&SimulationParameters::default())
    }
}

impl HodgkinHuxleyIntegrator {
    /// Creates an integrator at `v_0` with the fixed gating seeds
    /// `n = 0.32`, `m = 0.05` and `h = 0.60`
    pub fn new(params: &SimulationParameters) -> Self {
        HodgkinHuxleyIntegrator {
            params: *params,
            dt: DT,
            current_voltage: params.v_0,
            n: GatingVariable::new(N_INIT),
            m: GatingVariable::new(M_INIT),
            h: GatingVariable::new(H_INIT),
            i_na: 0.,
            i_k: 0.,
            i_m: 0.,
            i_inj: 0.,
            voltage_integration: VoltageIntegration::Reference,
            timestep: 0,
        }
    }

    /// Returns the default implementation of the integrator
    pub fn default_impl() -> Self {
        HodgkinHuxleyIntegrator::default()
    }

    /// Sets a constant injected current
    pub fn with_injected_current(mut self, i_inj: f64) -> Self {
        self.i_inj = i_inj;
        self
    }

    /// Sets whether the membrane potential is integrated
    pub fn with_voltage_integration(mut self, voltage_integration: VoltageIntegration) -> Self {
        self.voltage_integration = voltage_integration;
        self
    }

    /// Updates the gating variables at the current membrane potential
    pub fn update_gates(&mut self) {
        let v = self.current_voltage;

        self.n.update(alpha_n(v), beta_n(v), self.dt);
        self.m.update(alpha_m(v), beta_m(v), self.dt);
        self.h.update(alpha_h(v), beta_h(v), self.dt);
    }

    /// Recalculates the sodium, potassium and leak currents
    pub fn update_currents(&mut self) {
        let v = self.current_voltage;
        let params = &self.params;

        self.i_na = params.g_na_max * self.m.state.powi(3) * self.h.state * (params.e_na - v);
        self.i_k = params.g_k_max * self.n.state.powi(4) * (params.e_k - v);
        self.i_m = params.g_m * (params.v_rest - v);
    }

    /// Voltage change over one timestep given the last calculated currents
    pub fn get_voltage_increment(&self) -> f64 {
        self.dt / self.params.c_m * (self.i_na + self.i_k + self.i_m + self.i_inj)
    }

    /// Advances the gating variables and currents by one timestep and returns
    /// the voltage increment, the membrane potential is only updated when using
    /// [`VoltageIntegration::Integrated`]
    pub fn step(&mut self) -> f64 {
        self.update_gates();
        self.update_currents();

        let increment = self.get_voltage_increment();
        if self.voltage_integration == VoltageIntegration::Integrated {
            self.current_voltage += increment;
        }

        self.timestep += 1;
        trace!(timestep = self.timestep, increment, voltage = self.current_voltage, "hodgkin huxley step");

        increment
    }
}

/// Iterates the given integrator for a number of steps and returns state variables
/// over time, output hashmap has keys `"current_voltage"`, `"increment"`,
/// `"n"`, `"m"`, and `"h"`
pub fn run_hodgkin_huxley_trace(
    integrator: &mut HodgkinHuxleyIntegrator,
    iterations: usize,
) -> HashMap<String, Vec<f64>> {
    let mut state_output: HashMap<String, Vec<f64>> = HashMap::new();
    for key in ["current_voltage", "increment", "n", "m", "h"] {
        state_output.insert(key.to_string(), Vec::with_capacity(iterations));
    }

    for _ in 0..iterations {
        let increment = integrator.step();

        state_output.get_mut("current_voltage").map(|val| val.push(integrator.current_voltage));
        state_output.get_mut("increment").map(|val| val.push(increment));
        state_output.get_mut("n").map(|val| val.push(integrator.n.state));
        state_output.get_mut("m").map(|val| val.push(integrator.m.state));
        state_output.get_mut("h").map(|val| val.push(integrator.h.state));
    }

    state_output
}
