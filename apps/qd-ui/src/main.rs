#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod charts;
mod forms;
mod render;
mod request_worker;
mod tabs;
mod views;

use app::DashboardApp;
use qd_client::SimulatorClient;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let client = match SimulatorClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("failed to set up simulator client: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_title("BB84 QKD Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "BB84 QKD Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, client)))),
    )
}
