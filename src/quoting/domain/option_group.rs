use super::product_option::ProductOption;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The four swappable component categories of a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionGroupKind {
    MediaSource,
    Display,
    Camera,
    Audio,
}

impl OptionGroupKind {
    /// All groups in the order they are itemized on a quote
    pub const ALL: [OptionGroupKind; 4] = [
        OptionGroupKind::MediaSource,
        OptionGroupKind::Display,
        OptionGroupKind::Camera,
        OptionGroupKind::Audio,
    ];

    /// Row label shown next to the selected option
    pub fn label(self) -> &'static str {
        match self {
            OptionGroupKind::MediaSource => "Media Sources:",
            OptionGroupKind::Display => "Displays:",
            OptionGroupKind::Camera => "Camera Options:",
            OptionGroupKind::Audio => "Audio Options:",
        }
    }
}

impl FromStr for OptionGroupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "display" | "displays" => Ok(OptionGroupKind::Display),
            "audio" => Ok(OptionGroupKind::Audio),
            "camera" => Ok(OptionGroupKind::Camera),
            "source" | "media-source" | "media_source" | "mediasources" => {
                Ok(OptionGroupKind::MediaSource)
            }
            _ => Err(format!(
                "Invalid option group: {}. Please specify 'display', 'audio', 'camera' or 'source'",
                s
            )),
        }
    }
}

impl fmt::Display for OptionGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionGroupKind::MediaSource => write!(f, "source"),
            OptionGroupKind::Display => write!(f, "display"),
            OptionGroupKind::Camera => write!(f, "camera"),
            OptionGroupKind::Audio => write!(f, "audio"),
        }
    }
}

/// Ordered mapping from option key to option
///
/// Keeps the catalog's entry order: the first entry is the option a fresh
/// product card starts with. Groups are a handful of entries, so lookup is
/// a linear scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionGroup {
    entries: Vec<(String, ProductOption)>,
}

impl OptionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, replacing any existing entry with the same key in place
    pub fn insert(&mut self, key: impl Into<String>, option: ProductOption) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = option,
            None => self.entries.push((key, option)),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, option: ProductOption) -> Self {
        self.insert(key, option);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ProductOption> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, option)| option)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn first_key(&self) -> Option<&str> {
        self.entries.first().map(|(k, _)| k.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductOption)> {
        self.entries.iter().map(|(k, o)| (k.as_str(), o))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deserializes a group that may be `null` in the catalog
    pub fn deserialize_nullable<'de, D>(deserializer: D) -> Result<OptionGroup, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<OptionGroup>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}

impl<K: Into<String>> FromIterator<(K, ProductOption)> for OptionGroup {
    fn from_iter<I: IntoIterator<Item = (K, ProductOption)>>(iter: I) -> Self {
        let mut group = OptionGroup::new();
        for (key, option) in iter {
            group.insert(key, option);
        }
        group
    }
}

impl Serialize for OptionGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, option) in &self.entries {
            map.serialize_entry(key, option)?;
        }
        map.end()
    }
}

struct OptionGroupVisitor;

impl<'de> Visitor<'de> for OptionGroupVisitor {
    type Value = OptionGroup;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of option keys to { name, price, optionHours }")
    }

    fn visit_map<A>(self, mut access: A) -> Result<OptionGroup, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut group = OptionGroup::new();
        while let Some((key, option)) = access.next_entry::<String, ProductOption>()? {
            group.insert(key, option);
        }
        Ok(group)
    }
}

impl<'de> Deserialize<'de> for OptionGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OptionGroupVisitor)
    }
}
