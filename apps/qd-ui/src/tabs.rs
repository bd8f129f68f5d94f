//! Tab selection for the dashboard's two panels.

/// The fixed set of dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTab {
    Simulation,
    Analysis,
}

impl DashTab {
    pub const ALL: [DashTab; 2] = [DashTab::Simulation, DashTab::Analysis];

    /// Stable name a control declares as its target.
    pub fn name(self) -> &'static str {
        match self {
            DashTab::Simulation => "simulation",
            DashTab::Analysis => "analysis",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DashTab::Simulation => "Single Simulation",
            DashTab::Analysis => "Batch Analysis",
        }
    }

    /// Panel identifier, `{name}-tab` by convention.
    pub fn panel_id(self) -> String {
        format!("{}-tab", self.name())
    }

    pub fn from_name(name: &str) -> Option<DashTab> {
        Self::ALL.into_iter().find(|tab| tab.name() == name)
    }
}

/// Holds which panel is active. Activation is resolved purely from the
/// declared tab name, never from whatever interaction happens to be in
/// flight.
pub struct TabController {
    active: DashTab,
}

impl TabController {
    pub fn new() -> Self {
        Self {
            active: DashTab::Simulation,
        }
    }

    pub fn active(&self) -> DashTab {
        self.active
    }

    pub fn activate(&mut self, tab: DashTab) {
        self.active = tab;
    }

    /// Activate the panel a control points at. Unknown names leave the
    /// active panel unchanged; returns whether anything matched.
    pub fn activate_by_name(&mut self, name: &str) -> bool {
        match DashTab::from_name(name) {
            Some(tab) => {
                self.activate(tab);
                true
            }
            None => false,
        }
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new()
    }
}
