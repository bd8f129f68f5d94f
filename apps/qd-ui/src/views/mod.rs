pub mod analysis_view;
pub mod simulate_view;

pub use analysis_view::AnalysisView;
pub use simulate_view::SimulateView;
