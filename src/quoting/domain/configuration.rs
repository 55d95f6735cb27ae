use super::labor_hours::LaborHours;
use super::option_group::{OptionGroup, OptionGroupKind};
use super::selections::Selections;
use serde::{Deserialize, Serialize};

/// The configuration tag(s) of a record: the catalog stores either a
/// single string or a list of strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigurationTag {
    Single(String),
    Multiple(Vec<String>),
}

impl ConfigurationTag {
    /// Membership for a list, equality for a single tag
    pub fn contains(&self, tag: &str) -> bool {
        match self {
            ConfigurationTag::Single(value) => value == tag,
            ConfigurationTag::Multiple(values) => values.iter().any(|v| v == tag),
        }
    }

    pub fn tags(&self) -> Vec<&str> {
        match self {
            ConfigurationTag::Single(value) => vec![value.as_str()],
            ConfigurationTag::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for ConfigurationTag {
    fn default() -> Self {
        ConfigurationTag::Multiple(Vec::new())
    }
}

/// One hardware bundle in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    #[serde(rename = "UCHardware")]
    pub name: String,
    #[serde(rename = "baseprice")]
    pub base_price: f64,
    #[serde(rename = "basehours", default)]
    pub base_hours: LaborHours,
    #[serde(rename = "imageSource", default)]
    pub image_source: String,
    #[serde(default)]
    pub platform: Vec<String>,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub configuration: ConfigurationTag,
    #[serde(
        rename = "mediaSources",
        default,
        deserialize_with = "OptionGroup::deserialize_nullable"
    )]
    pub media_sources: OptionGroup,
    #[serde(default, deserialize_with = "OptionGroup::deserialize_nullable")]
    pub displays: OptionGroup,
    #[serde(default, deserialize_with = "OptionGroup::deserialize_nullable")]
    pub camera: OptionGroup,
    #[serde(default, deserialize_with = "OptionGroup::deserialize_nullable")]
    pub audio: OptionGroup,
}

impl ConfigurationRecord {
    /// Creates a record with no tags and empty option groups
    pub fn new(name: impl Into<String>, base_price: f64, base_hours: LaborHours) -> Self {
        Self {
            name: name.into(),
            base_price,
            base_hours,
            image_source: String::new(),
            platform: Vec::new(),
            manufacturer: String::new(),
            configuration: ConfigurationTag::default(),
            media_sources: OptionGroup::new(),
            displays: OptionGroup::new(),
            camera: OptionGroup::new(),
            audio: OptionGroup::new(),
        }
    }

    pub fn option_group(&self, kind: OptionGroupKind) -> &OptionGroup {
        match kind {
            OptionGroupKind::MediaSource => &self.media_sources,
            OptionGroupKind::Display => &self.displays,
            OptionGroupKind::Camera => &self.camera,
            OptionGroupKind::Audio => &self.audio,
        }
    }

    /// The first option of every non-empty group
    pub fn default_selections(&self) -> Selections {
        let mut selections = Selections::none();
        for kind in OptionGroupKind::ALL {
            if let Some(key) = self.option_group(kind).first_key() {
                selections.set(kind, Some(key.to_string()));
            }
        }
        selections
    }
}

/// The immutable set of records loaded at startup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    records: Vec<ConfigurationRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ConfigurationRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ConfigurationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
