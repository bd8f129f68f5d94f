//! Retained chart state keyed by drawing surface.
//!
//! Every analysis run replaces what a surface shows. The registry is the
//! sole mutation entry point: the previous model is dropped before the new
//! one is retained, so a surface never holds zero or two live models after
//! an install.

use std::collections::HashMap;

use egui::Color32;
use qd_wire::{EveSweep, NoiseSweep};
use thiserror::Error;

pub const NOISE_SURFACE: &str = "noiseChart";
pub const EVE_SURFACE: &str = "eveChart";

const SURFACES: [&str; 2] = [NOISE_SURFACE, EVE_SURFACE];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("no chart surface named '{0}'")]
    SurfaceNotFound(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesModel {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
}

/// Axis arrangement of a chart. `Dual` puts the secondary series on their
/// own axis with gridlines suppressed so the two scales don't visually
/// collide.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisLayout {
    Single {
        y_label: &'static str,
    },
    Dual {
        primary_label: &'static str,
        secondary_label: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub layout: AxisLayout,
    pub primary: Vec<SeriesModel>,
    pub secondary: Vec<SeriesModel>,
}

#[derive(Default)]
pub struct ChartRegistry {
    live: HashMap<String, ChartModel>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever `surface` currently shows with `model`.
    ///
    /// The previous model is dropped before the new one is retained; this
    /// holds across changes of chart kind on the same surface. An unknown
    /// surface fails without touching any retained state.
    pub fn install(&mut self, surface: &str, model: ChartModel) -> Result<(), ChartError> {
        if !SURFACES.contains(&surface) {
            return Err(ChartError::SurfaceNotFound(surface.to_string()));
        }
        if let Some(previous) = self.live.remove(surface) {
            drop(previous);
        }
        self.live.insert(surface.to_string(), model);
        Ok(())
    }

    pub fn model(&self, surface: &str) -> Option<&ChartModel> {
        self.live.get(surface)
    }
}

/// Single-line chart of QBER against natural channel noise.
pub fn noise_chart(sweep: &NoiseSweep) -> ChartModel {
    ChartModel {
        title: "Effect of Natural Channel Noise on QBER",
        x_label: "Noise Probability (%)",
        layout: AxisLayout::Single { y_label: "QBER" },
        primary: vec![SeriesModel {
            name: "QBER vs Natural Noise".to_string(),
            points: paired_points(&sweep.x, &sweep.qber),
            color: Color32::from_rgb(75, 192, 192),
        }],
        secondary: Vec::new(),
    }
}

/// Dual-axis chart of QBER and detection rate against eavesdropper
/// probability.
pub fn eve_chart(sweep: &EveSweep) -> ChartModel {
    ChartModel {
        title: "Effect of Eavesdropping on QBER and Detection Rate",
        x_label: "Eavesdropper Probability (%)",
        layout: AxisLayout::Dual {
            primary_label: "QBER",
            secondary_label: "Detection Rate",
        },
        primary: vec![SeriesModel {
            name: "QBER".to_string(),
            points: paired_points(&sweep.x, &sweep.qber),
            color: Color32::from_rgb(255, 99, 132),
        }],
        secondary: vec![SeriesModel {
            name: "Detection Rate".to_string(),
            points: paired_points(&sweep.x, &sweep.detection_rate),
            color: Color32::from_rgb(54, 162, 235),
        }],
    }
}

fn paired_points(x: &[f64], y: &[f64]) -> Vec<[f64; 2]> {
    x.iter().zip(y).map(|(&x, &y)| [x, y]).collect()
}
