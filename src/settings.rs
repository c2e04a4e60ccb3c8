//! Host-facing settings record
//!
//! A flat key-value snapshot of solver-adjacent preferences, round-tripped
//! to and from a string-keyed store. The solver core never reads this; it
//! exists so a host can persist preferences wherever it likes (file, platform
//! store) without the crate caring how.

use crate::dictionary::DictionarySelection;
use rustc_hash::FxHashMap;

/// User-adjustable settings
///
/// `preprocessing_mode`, `scaling_mode`, and `show_debug` belong to the
/// host's image-extraction pipeline; they are carried opaquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dict_type: DictionarySelection,
    pub min_length: usize,
    pub preprocessing_mode: String,
    pub scaling_mode: String,
    pub show_debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dict_type: DictionarySelection::Both,
            min_length: 2,
            preprocessing_mode: "default".to_string(),
            scaling_mode: "default".to_string(),
            show_debug: false,
        }
    }
}

impl Settings {
    /// Serialize to a flat string-keyed map
    #[must_use]
    pub fn to_map(&self) -> FxHashMap<String, String> {
        let mut map = FxHashMap::default();
        map.insert("dictType".to_string(), self.dict_type.as_str().to_string());
        map.insert("minLength".to_string(), self.min_length.to_string());
        map.insert(
            "preprocessingMode".to_string(),
            self.preprocessing_mode.clone(),
        );
        map.insert("scalingMode".to_string(), self.scaling_mode.clone());
        map.insert("showDebug".to_string(), self.show_debug.to_string());
        map
    }

    /// Deserialize from a flat string-keyed map
    ///
    /// Missing or unparsable values fall back to their defaults, so a stale
    /// or partial store never blocks startup.
    #[must_use]
    pub fn from_map(map: &FxHashMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            dict_type: map
                .get("dictType")
                .map_or(defaults.dict_type, |v| DictionarySelection::from_name(v)),
            min_length: map
                .get("minLength")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_length),
            preprocessing_mode: map
                .get("preprocessingMode")
                .cloned()
                .unwrap_or(defaults.preprocessing_mode),
            scaling_mode: map
                .get("scalingMode")
                .cloned()
                .unwrap_or(defaults.scaling_mode),
            show_debug: map
                .get("showDebug")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.show_debug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_settings() {
        let settings = Settings {
            dict_type: DictionarySelection::Twl06,
            min_length: 6,
            preprocessing_mode: "adaptive".to_string(),
            scaling_mode: "2x".to_string(),
            show_debug: true,
        };

        let restored = Settings::from_map(&settings.to_map());
        assert_eq!(restored, settings);
    }

    #[test]
    fn empty_map_yields_defaults() {
        let restored = Settings::from_map(&FxHashMap::default());
        assert_eq!(restored, Settings::default());
        assert_eq!(restored.dict_type, DictionarySelection::Both);
        assert_eq!(restored.min_length, 2);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let mut map = FxHashMap::default();
        map.insert("minLength".to_string(), "a lot".to_string());
        map.insert("showDebug".to_string(), "maybe".to_string());

        let restored = Settings::from_map(&map);
        assert_eq!(restored.min_length, 2);
        assert!(!restored.show_debug);
    }

    #[test]
    fn partial_map_merges_with_defaults() {
        let mut map = FxHashMap::default();
        map.insert("dictType".to_string(), "enable".to_string());

        let restored = Settings::from_map(&map);
        assert_eq!(restored.dict_type, DictionarySelection::Enable);
        assert_eq!(restored.min_length, 2);
    }
}
