pub mod parallax;
pub mod types;

pub use parallax::{AnimationHandle, ParallaxAnimator, Point};
pub use types::*;

use serde::{Deserialize, Serialize};

/// Which workspace tab and sub-tab are showing. Transient per page visit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewState {
    active_main_tab: MainTab,
    active_sub_tab: SubTab,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_main_tab: MainTab::App,
            active_sub_tab: SubTab::Summary,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_main_tab(&self) -> MainTab {
        self.active_main_tab
    }

    pub fn active_sub_tab(&self) -> SubTab {
        self.active_sub_tab
    }

    /// Entering a tab that shows sub-tabs always starts from `summary`; other
    /// tabs leave the sub-tab alone.
    pub fn set_main_tab(&mut self, tab: MainTab) {
        self.active_main_tab = tab;
        if tab.has_sub_tabs() {
            self.active_sub_tab = SubTab::Summary;
        }
    }

    /// Not checked against the main tab.
    pub fn set_sub_tab(&mut self, tab: SubTab) {
        self.active_sub_tab = tab;
    }

    /// The sub-tab, if the current main tab renders one.
    pub fn visible_sub_tab(&self) -> Option<SubTab> {
        self.active_main_tab
            .has_sub_tabs()
            .then_some(self.active_sub_tab)
    }
}
