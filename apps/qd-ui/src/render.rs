//! Projection of one simulation result into display-ready values.

use egui::Color32;
use qd_wire::{SimulationResult, detection_label, format_qber, key_preview};

/// Color for a positive eavesdropper verdict.
pub const ALARM_COLOR: Color32 = Color32::from_rgb(205, 50, 50);
/// Color for the all-clear verdict.
pub const SAFE_COLOR: Color32 = Color32::from_rgb(40, 150, 75);

/// Everything the results panel shows, precomputed once per response.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationDisplay {
    pub qber: String,
    pub sifted_length: String,
    pub key_length: String,
    pub detection_label: &'static str,
    pub detection_color: Color32,
    pub alice_key: String,
    pub bob_key: String,
}

impl SimulationDisplay {
    pub fn project(result: &SimulationResult) -> Self {
        Self {
            qber: format_qber(result.qber),
            sifted_length: result.sifted_length.to_string(),
            key_length: result.key_length.to_string(),
            detection_label: detection_label(result.detected_eve),
            detection_color: if result.detected_eve {
                ALARM_COLOR
            } else {
                SAFE_COLOR
            },
            alice_key: key_preview(&result.alice_final_key),
            bob_key: key_preview(&result.bob_final_key),
        }
    }
}
