//! Dashboard application state and the submit/fetch/render orchestration.
//!
//! Each submit spawns an independent worker flow; the update loop polls all
//! in-flight flows every frame and settles whichever completed. Completion
//! order, not submission order, decides what ends up on screen.

use std::time::Duration;

use qd_client::SimulatorClient;
use qd_wire::{AnalysisResult, SimulationResult};
use tracing::debug;

use crate::charts::{self, ChartError, ChartRegistry};
use crate::forms::{AnalysisForm, SimulationForm};
use crate::render::SimulationDisplay;
use crate::request_worker::{FlowMessage, RequestWorker};
use crate::tabs::{DashTab, TabController};
use crate::views::{AnalysisView, SimulateView};

pub struct DashboardApp {
    client: SimulatorClient,
    tabs: TabController,
    sim_view: SimulateView,
    analysis_view: AnalysisView,
    sim_form: SimulationForm,
    analysis_form: AnalysisForm,
    sim_flows: Vec<RequestWorker<SimulationResult>>,
    analysis_flows: Vec<RequestWorker<AnalysisResult>>,
    sim_display: Option<SimulationDisplay>,
    charts: ChartRegistry,
    charts_visible: bool,
    error_dialog: Option<String>,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, client: SimulatorClient) -> Self {
        Self::with_client(client)
    }

    fn with_client(client: SimulatorClient) -> Self {
        Self {
            client,
            tabs: TabController::new(),
            sim_view: SimulateView,
            analysis_view: AnalysisView,
            sim_form: SimulationForm::default(),
            analysis_form: AnalysisForm::default(),
            sim_flows: Vec::new(),
            analysis_flows: Vec::new(),
            sim_display: None,
            charts: ChartRegistry::new(),
            charts_visible: false,
            error_dialog: None,
        }
    }

    fn busy(&self) -> bool {
        !self.sim_flows.is_empty() || !self.analysis_flows.is_empty()
    }

    fn submit_simulation(&mut self) {
        let params = self.sim_form.to_params();
        let client = self.client.clone();
        debug!(?params, "submitting simulation");
        self.sim_flows
            .push(RequestWorker::spawn("simulate", move || {
                client.simulate(&params)
            }));
    }

    fn submit_analysis(&mut self) {
        let params = self.analysis_form.to_params();
        let client = self.client.clone();
        debug!(?params, "submitting analysis");
        self.analysis_flows
            .push(RequestWorker::spawn("analyze", move || {
                client.analyze(&params)
            }));
    }

    /// Settle every flow whose worker has sent its completion message.
    /// Removing the worker is what clears the flow's busy state, so it
    /// happens before the outcome is rendered.
    fn poll_flows(&mut self) {
        let mut i = 0;
        while i < self.sim_flows.len() {
            match self.sim_flows[i].try_take() {
                Some(outcome) => {
                    self.sim_flows.remove(i);
                    self.apply_sim_outcome(outcome);
                }
                None => i += 1,
            }
        }

        let mut i = 0;
        while i < self.analysis_flows.len() {
            match self.analysis_flows[i].try_take() {
                Some(outcome) => {
                    self.analysis_flows.remove(i);
                    self.apply_analysis_outcome(outcome);
                }
                None => i += 1,
            }
        }
    }

    /// A later completion overwrites an earlier one; a failure leaves
    /// whatever is already on screen alone.
    fn apply_sim_outcome(&mut self, outcome: FlowMessage<SimulationResult>) {
        match outcome {
            FlowMessage::Done(result) => {
                self.sim_display = Some(SimulationDisplay::project(&result));
            }
            FlowMessage::Failed { message } => {
                self.error_dialog = Some(format!("Error running simulation: {message}"));
            }
        }
    }

    fn apply_analysis_outcome(&mut self, outcome: FlowMessage<AnalysisResult>) {
        match outcome {
            FlowMessage::Done(result) => match self.install_charts(&result) {
                Ok(()) => self.charts_visible = true,
                Err(err) => {
                    self.error_dialog = Some(format!("Error running analysis: {err}"));
                }
            },
            FlowMessage::Failed { message } => {
                self.error_dialog = Some(format!("Error running analysis: {message}"));
            }
        }
    }

    fn install_charts(&mut self, result: &AnalysisResult) -> Result<(), ChartError> {
        self.charts
            .install(charts::NOISE_SURFACE, charts::noise_chart(&result.noise))?;
        self.charts
            .install(charts::EVE_SURFACE, charts::eve_chart(&result.eve))?;
        Ok(())
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_flows();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("BB84 Quantum Key Distribution");
            ui.horizontal(|ui| {
                for tab in DashTab::ALL {
                    let selected = self.tabs.active() == tab;
                    if ui.selectable_label(selected, tab.label()).clicked() {
                        self.tabs.activate_by_name(tab.name());
                    }
                }
            });
        });

        if self.busy() {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Talking to the simulator...");
                });
            });
            // Workers complete without producing input events, so keep the
            // loop ticking while anything is in flight.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let mut submit_sim = false;
        let mut submit_analysis = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            let active = self.tabs.active();
            egui::ScrollArea::vertical()
                .id_salt(active.panel_id())
                .show(ui, |ui| match active {
                    DashTab::Simulation => {
                        submit_sim =
                            self.sim_view
                                .show(ui, &mut self.sim_form, self.sim_display.as_ref());
                    }
                    DashTab::Analysis => {
                        submit_analysis = self.analysis_view.show(
                            ui,
                            &mut self.analysis_form,
                            &self.charts,
                            self.charts_visible,
                        );
                    }
                });
        });

        if submit_sim {
            self.submit_simulation();
        }
        if submit_analysis {
            self.submit_analysis();
        }

        let mut dismissed = false;
        if let Some(message) = &self.error_dialog {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
        }
        if dismissed {
            self.error_dialog = None;
        }
    }
}
