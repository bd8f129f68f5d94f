//! Request and response bodies exchanged with the simulator service.
//!
//! Field names are the JSON contract; the service tolerates missing fields
//! but this side always sends the full shape.

use serde::{Deserialize, Serialize};

/// Body for `POST /simulate`.
///
/// Fields are optional on purpose: form text that fails numeric coercion is
/// forwarded as `null` and rejected by the service, not validated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulateParams {
    pub n_qubits: Option<u64>,
    pub noise_prob: Option<f64>,
    pub eve_prob: Option<f64>,
}

/// One protocol run as reported by the service.
///
/// Keys are bit sequences (0/1). The sifted keys are on the wire but the
/// dashboard only displays the final keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationResult {
    pub qber: f64,
    pub sifted_length: u64,
    pub key_length: u64,
    pub detected_eve: bool,
    pub alice_final_key: Vec<u8>,
    pub bob_final_key: Vec<u8>,
    #[serde(default)]
    pub alice_sifted_key: Vec<u8>,
    #[serde(default)]
    pub bob_sifted_key: Vec<u8>,
}

/// Body for `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeParams {
    pub n_runs: Option<u64>,
    pub n_qubits: Option<u64>,
}

/// Sweep of QBER against natural channel noise. `x` arrives pre-scaled to
/// percent and `qber` has the same length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoiseSweep {
    pub x: Vec<f64>,
    pub qber: Vec<f64>,
}

/// Sweep of QBER and detection rate against eavesdropper probability.
/// All three arrays share one length; `x` is in percent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EveSweep {
    pub x: Vec<f64>,
    pub qber: Vec<f64>,
    pub detection_rate: Vec<f64>,
}

/// Response body for `POST /analyze`: two independent sweep series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub noise: NoiseSweep,
    pub eve: EveSweep,
}

/// Error body the service sends with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFault {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_params_serialize_coercion_sentinels_as_null() {
        let params = SimulateParams {
            n_qubits: Some(100),
            noise_prob: None,
            eve_prob: Some(0.0),
        };
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"n_qubits":100,"noise_prob":null,"eve_prob":0.0}"#);
    }

    #[test]
    fn simulation_result_decodes_service_shape() {
        let body = r#"{
            "qber": 0.0123,
            "sifted_length": 48,
            "key_length": 40,
            "detected_eve": false,
            "alice_final_key": [0, 1, 1, 0],
            "bob_final_key": [0, 1, 1, 0],
            "alice_sifted_key": [0, 1, 1, 0, 1],
            "bob_sifted_key": [0, 1, 1, 0, 1]
        }"#;
        let result: SimulationResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.qber, 0.0123);
        assert_eq!(result.sifted_length, 48);
        assert_eq!(result.key_length, 40);
        assert!(!result.detected_eve);
        assert_eq!(result.alice_final_key, vec![0, 1, 1, 0]);
    }

    #[test]
    fn simulation_result_tolerates_missing_sifted_keys() {
        let body = r#"{
            "qber": 0.5,
            "sifted_length": 0,
            "key_length": 0,
            "detected_eve": true,
            "alice_final_key": [],
            "bob_final_key": []
        }"#;
        let result: SimulationResult = serde_json::from_str(body).unwrap();
        assert!(result.alice_sifted_key.is_empty());
        assert!(result.bob_final_key.is_empty());
    }

    #[test]
    fn analysis_result_decodes_both_sweeps() {
        let body = r#"{
            "noise": {"x": [0.0, 5.0, 10.0], "qber": [0.01, 0.05, 0.11]},
            "eve": {
                "x": [0.0, 50.0, 100.0],
                "qber": [0.01, 0.13, 0.25],
                "detection_rate": [0.0, 0.6, 1.0]
            }
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.noise.x.len(), result.noise.qber.len());
        assert_eq!(result.eve.detection_rate, vec![0.0, 0.6, 1.0]);
    }

    #[test]
    fn remote_fault_decodes_error_body() {
        let fault: RemoteFault =
            serde_json::from_str(r#"{"error": "n_qubits must be positive"}"#).unwrap();
        assert_eq!(fault.error, "n_qubits must be positive");
    }
}
