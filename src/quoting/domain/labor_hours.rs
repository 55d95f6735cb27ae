use serde::{Deserialize, Serialize};
use std::ops::Add;

/// One of the four labor buckets, each billed at its own hourly rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaborCategory {
    Install,
    Configuration,
    Programming,
    Management,
}

impl LaborCategory {
    /// All categories in display order
    pub const ALL: [LaborCategory; 4] = [
        LaborCategory::Install,
        LaborCategory::Configuration,
        LaborCategory::Programming,
        LaborCategory::Management,
    ];

    /// Row label used when rendering hour lines, e.g. "Installation Hours"
    pub fn label(self) -> &'static str {
        match self {
            LaborCategory::Install => "Installation Hours",
            LaborCategory::Configuration => "Configuration Hours",
            LaborCategory::Programming => "Programming Hours",
            LaborCategory::Management => "Management Hours",
        }
    }
}

/// Labor hours split across the four categories
///
/// Serialized with the catalog's field names. Missing fields read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LaborHours {
    #[serde(rename = "installHours", default)]
    pub install: f64,
    #[serde(rename = "configHours", default)]
    pub configuration: f64,
    #[serde(rename = "programingHours", default)]
    pub programming: f64,
    #[serde(rename = "managementHours", default)]
    pub management: f64,
}

impl LaborHours {
    pub const ZERO: LaborHours = LaborHours {
        install: 0.0,
        configuration: 0.0,
        programming: 0.0,
        management: 0.0,
    };

    pub fn new(install: f64, configuration: f64, programming: f64, management: f64) -> Self {
        Self {
            install,
            configuration,
            programming,
            management,
        }
    }

    pub fn get(&self, category: LaborCategory) -> f64 {
        match category {
            LaborCategory::Install => self.install,
            LaborCategory::Configuration => self.configuration,
            LaborCategory::Programming => self.programming,
            LaborCategory::Management => self.management,
        }
    }

    /// Iterates `(category, hours)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (LaborCategory, f64)> + '_ {
        LaborCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn total(&self) -> f64 {
        self.install + self.configuration + self.programming + self.management
    }
}

impl Add for LaborHours {
    type Output = LaborHours;

    fn add(self, rhs: LaborHours) -> LaborHours {
        LaborHours {
            install: self.install + rhs.install,
            configuration: self.configuration + rhs.configuration,
            programming: self.programming + rhs.programming,
            management: self.management + rhs.management,
        }
    }
}
