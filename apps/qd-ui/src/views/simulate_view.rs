//! Single-simulation panel: parameter form plus the latest result.

use crate::forms::SimulationForm;
use crate::render::SimulationDisplay;

#[derive(Default)]
pub struct SimulateView;

impl SimulateView {
    /// Returns true when the form was submitted this frame.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        form: &mut SimulationForm,
        display: Option<&SimulationDisplay>,
    ) -> bool {
        ui.heading("Single Simulation");
        ui.separator();

        egui::Grid::new("sim_form")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label("Number of qubits");
                ui.text_edit_singleline(&mut form.n_qubits);
                ui.end_row();

                ui.label("Noise probability (0 to 1)");
                ui.text_edit_singleline(&mut form.noise_prob);
                ui.end_row();

                ui.label("Eve interception probability (0 to 1)");
                ui.text_edit_singleline(&mut form.eve_prob);
                ui.end_row();
            });

        let submitted = ui.button("Run Simulation").clicked();

        if let Some(display) = display {
            ui.separator();
            ui.heading("Results");

            egui::Grid::new("sim_results")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label("QBER");
                    ui.monospace(&display.qber);
                    ui.end_row();

                    ui.label("Sifted key length");
                    ui.monospace(&display.sifted_length);
                    ui.end_row();

                    ui.label("Final key length");
                    ui.monospace(&display.key_length);
                    ui.end_row();

                    ui.label("Eve detected");
                    ui.colored_label(display.detection_color, display.detection_label);
                    ui.end_row();

                    ui.label("Alice's key (first 20 bits)");
                    ui.monospace(&display.alice_key);
                    ui.end_row();

                    ui.label("Bob's key (first 20 bits)");
                    ui.monospace(&display.bob_key);
                    ui.end_row();
                });
        }

        submitted
    }
}
