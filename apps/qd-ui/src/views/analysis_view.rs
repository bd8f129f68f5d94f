//! Batch-analysis panel: sweep form plus the two retained charts.

use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::charts::{AxisLayout, ChartModel, ChartRegistry, EVE_SURFACE, NOISE_SURFACE, SeriesModel};
use crate::forms::AnalysisForm;

#[derive(Default)]
pub struct AnalysisView;

impl AnalysisView {
    /// Returns true when the form was submitted this frame.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        form: &mut AnalysisForm,
        charts: &ChartRegistry,
        charts_visible: bool,
    ) -> bool {
        ui.heading("Batch Analysis");
        ui.separator();

        egui::Grid::new("analysis_form")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label("Runs per sweep point");
                ui.text_edit_singleline(&mut form.n_runs);
                ui.end_row();

                ui.label("Number of qubits");
                ui.text_edit_singleline(&mut form.n_qubits);
                ui.end_row();
            });

        let submitted = ui.button("Run Analysis").clicked();

        if charts_visible {
            ui.separator();
            for surface in [NOISE_SURFACE, EVE_SURFACE] {
                if let Some(model) = charts.model(surface) {
                    Self::draw_chart(ui, surface, model);
                    ui.add_space(16.0);
                }
            }
        }

        submitted
    }

    fn draw_chart(ui: &mut egui::Ui, surface: &str, model: &ChartModel) {
        ui.heading(model.title);
        match &model.layout {
            AxisLayout::Single { y_label } => {
                Self::draw_plot(
                    ui,
                    format!("{surface}_plot"),
                    model.x_label,
                    y_label,
                    &model.primary,
                    true,
                );
            }
            AxisLayout::Dual {
                primary_label,
                secondary_label,
            } => {
                // Secondary series get a stacked plot of their own with the
                // grid suppressed, standing in for a right-hand axis.
                Self::draw_plot(
                    ui,
                    format!("{surface}_primary"),
                    model.x_label,
                    primary_label,
                    &model.primary,
                    true,
                );
                Self::draw_plot(
                    ui,
                    format!("{surface}_secondary"),
                    model.x_label,
                    secondary_label,
                    &model.secondary,
                    false,
                );
            }
        }
    }

    fn draw_plot(
        ui: &mut egui::Ui,
        id: String,
        x_label: &str,
        y_label: &str,
        series: &[SeriesModel],
        grid: bool,
    ) {
        Plot::new(id)
            .legend(Legend::default())
            .height(220.0)
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .show_grid(grid)
            .show(ui, |plot_ui| {
                for s in series {
                    let points: PlotPoints = s.points.clone().into();
                    plot_ui.line(Line::new(points).name(&s.name).color(s.color));
                }
            });
    }
}
