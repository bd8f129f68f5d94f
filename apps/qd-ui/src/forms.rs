//! Form text state and numeric coercion for the two submit flows.
//!
//! Coercion is the only processing applied: text that fails to parse
//! travels as `null` and the service rejects it. Range checks live behind
//! the HTTP interface, not here.

use qd_wire::{AnalyzeParams, SimulateParams};

/// Text state of the single-simulation form.
#[derive(Debug, Clone)]
pub struct SimulationForm {
    pub n_qubits: String,
    pub noise_prob: String,
    pub eve_prob: String,
}

impl Default for SimulationForm {
    fn default() -> Self {
        Self {
            n_qubits: "100".to_string(),
            noise_prob: "0.05".to_string(),
            eve_prob: "0.0".to_string(),
        }
    }
}

impl SimulationForm {
    pub fn to_params(&self) -> SimulateParams {
        SimulateParams {
            n_qubits: coerce_int(&self.n_qubits),
            noise_prob: coerce_float(&self.noise_prob),
            eve_prob: coerce_float(&self.eve_prob),
        }
    }
}

/// Text state of the batch-analysis form.
#[derive(Debug, Clone)]
pub struct AnalysisForm {
    pub n_runs: String,
    pub n_qubits: String,
}

impl Default for AnalysisForm {
    fn default() -> Self {
        Self {
            n_runs: "10".to_string(),
            n_qubits: "25".to_string(),
        }
    }
}

impl AnalysisForm {
    pub fn to_params(&self) -> AnalyzeParams {
        AnalyzeParams {
            n_runs: coerce_int(&self.n_runs),
            n_qubits: coerce_int(&self.n_qubits),
        }
    }
}

fn coerce_int(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

fn coerce_float(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
