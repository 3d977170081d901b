use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MainTab {
    Dash,
    App,
    Website,
    Database,
    Settings,
}

impl MainTab {
    pub const ALL: [MainTab; 5] = [
        MainTab::Dash,
        MainTab::App,
        MainTab::Website,
        MainTab::Database,
        MainTab::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MainTab::Dash => "dash",
            MainTab::App => "app",
            MainTab::Website => "website",
            MainTab::Database => "database",
            MainTab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Dash => "Dashboard",
            MainTab::App => "App",
            MainTab::Website => "Website",
            MainTab::Database => "Database",
            MainTab::Settings => "Settings",
        }
    }

    pub fn has_sub_tabs(&self) -> bool {
        matches!(self, MainTab::App | MainTab::Website)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SubTab {
    Dash,
    Summary,
    Design,
    Code,
    Resources,
    Performance,
}

impl SubTab {
    pub const ALL: [SubTab; 6] = [
        SubTab::Dash,
        SubTab::Summary,
        SubTab::Design,
        SubTab::Code,
        SubTab::Resources,
        SubTab::Performance,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SubTab::Dash => "dash",
            SubTab::Summary => "summary",
            SubTab::Design => "design",
            SubTab::Code => "code",
            SubTab::Resources => "resources",
            SubTab::Performance => "performance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubTab::Dash => "Dashboard",
            SubTab::Summary => "PRD",
            SubTab::Design => "Design",
            SubTab::Code => "Code",
            SubTab::Resources => "Resources",
            SubTab::Performance => "Performance",
        }
    }
}

impl fmt::Display for MainTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Display for SubTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MainTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MainTab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| format!("Unknown tab: {}", s))
    }
}

impl FromStr for SubTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubTab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| format!("Unknown sub-tab: {}", s))
    }
}
