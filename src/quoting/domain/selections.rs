use super::option_group::OptionGroupKind;
use serde::{Deserialize, Serialize};

/// The option key chosen in each group; `None` means nothing selected
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selections {
    #[serde(default)]
    pub media_source: Option<String>,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub camera: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

impl Selections {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: OptionGroupKind) -> Option<&str> {
        match kind {
            OptionGroupKind::MediaSource => self.media_source.as_deref(),
            OptionGroupKind::Display => self.display.as_deref(),
            OptionGroupKind::Camera => self.camera.as_deref(),
            OptionGroupKind::Audio => self.audio.as_deref(),
        }
    }

    pub fn set(&mut self, kind: OptionGroupKind, key: Option<String>) {
        let slot = match kind {
            OptionGroupKind::MediaSource => &mut self.media_source,
            OptionGroupKind::Display => &mut self.display,
            OptionGroupKind::Camera => &mut self.camera,
            OptionGroupKind::Audio => &mut self.audio,
        };
        *slot = key;
    }

    pub fn with(mut self, kind: OptionGroupKind, key: impl Into<String>) -> Self {
        self.set(kind, Some(key.into()));
        self
    }

    /// `(group, key)` pairs for every group that has a selection
    pub fn chosen(&self) -> Vec<(OptionGroupKind, &str)> {
        OptionGroupKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|key| (kind, key)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut selections = Selections::none();
        selections.set(OptionGroupKind::Camera, Some("ptz".to_string()));
        assert_eq!(selections.get(OptionGroupKind::Camera), Some("ptz"));
        assert_eq!(selections.get(OptionGroupKind::Display), None);

        selections.set(OptionGroupKind::Camera, None);
        assert!(selections.is_empty());
    }

    #[test]
    fn test_with_and_chosen_order() {
        let selections = Selections::none()
            .with(OptionGroupKind::Audio, "bar")
            .with(OptionGroupKind::Display, "d1");
        assert_eq!(
            selections.chosen(),
            vec![
                (OptionGroupKind::Display, "d1"),
                (OptionGroupKind::Audio, "bar")
            ]
        );
    }
}
