use serde::{Deserialize, Serialize};

pub const MIN_COLUMNS: u8 = 1;
pub const MAX_COLUMNS: u8 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Cozy,
    Compact,
}

/// Card image aspect ratio. Wire spellings match the stored preference
/// tokens of the storefront ("1/1", "4/3", "3/4").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1/1")]
    Square,
    #[serde(rename = "4/3")]
    FourThree,
    #[serde(rename = "3/4")]
    ThreeFour,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
}

/// Presentation preferences, independent of filtering. Persisted best-effort
/// as a convenience cache; never a correctness requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    pub view_mode: ViewMode,
    /// Grid column count, relevant only when `view_mode` is grid.
    pub columns: u8,
    pub density: Density,
    pub ratio: AspectRatio,
    pub image_fit: ImageFit,
    pub show_description: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Grid,
            columns: 3,
            density: Density::Cozy,
            ratio: AspectRatio::Square,
            image_fit: ImageFit::Cover,
            show_description: true,
        }
    }
}

impl DisplayOptions {
    /// Overlay `patch` onto `self`, leaving unnamed fields untouched.
    /// Restored values are taken as-is except `columns`, which is clamped
    /// to the supported range.
    pub fn merged(self, patch: &DisplayPatch) -> Self {
        Self {
            view_mode: patch.view_mode.unwrap_or(self.view_mode),
            columns: patch
                .columns
                .map(|c| c.clamp(MIN_COLUMNS, MAX_COLUMNS))
                .unwrap_or(self.columns),
            density: patch.density.unwrap_or(self.density),
            ratio: patch.ratio.unwrap_or(self.ratio),
            image_fit: patch.image_fit.unwrap_or(self.image_fit),
            show_description: patch.show_description.unwrap_or(self.show_description),
        }
    }
}

/// All-optional overlay for [`DisplayOptions`]. Doubles as the tolerant
/// deserialization target for stored state: a field added after an old save
/// simply comes back `None` and keeps its default on merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_mode: Option<ViewMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<Density>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<AspectRatio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_fit: Option<ImageFit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_description: Option<bool>,
}

impl DisplayPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_updates_only_named_fields() {
        let base = DisplayOptions {
            view_mode: ViewMode::List,
            columns: 2,
            density: Density::Compact,
            ratio: AspectRatio::FourThree,
            image_fit: ImageFit::Contain,
            show_description: false,
        };

        let merged = base.merged(&DisplayPatch {
            columns: Some(4),
            ..Default::default()
        });

        assert_eq!(merged.columns, 4);
        assert_eq!(merged.view_mode, base.view_mode);
        assert_eq!(merged.density, base.density);
        assert_eq!(merged.ratio, base.ratio);
        assert_eq!(merged.image_fit, base.image_fit);
        assert_eq!(merged.show_description, base.show_description);
    }

    #[test]
    fn merge_clamps_columns() {
        let merged = DisplayOptions::default().merged(&DisplayPatch {
            columns: Some(9),
            ..Default::default()
        });
        assert_eq!(merged.columns, MAX_COLUMNS);

        let merged = DisplayOptions::default().merged(&DisplayPatch {
            columns: Some(0),
            ..Default::default()
        });
        assert_eq!(merged.columns, MIN_COLUMNS);
    }

    #[test]
    fn empty_patch_is_identity() {
        let base = DisplayOptions::default();
        assert_eq!(base.merged(&DisplayPatch::default()), base);
    }

    #[test]
    fn stored_shape_uses_storefront_tokens() {
        let json = serde_json::to_value(DisplayOptions::default()).unwrap();
        assert_eq!(json["viewMode"], "grid");
        assert_eq!(json["ratio"], "1/1");
        assert_eq!(json["imageFit"], "cover");

        let patch: DisplayPatch =
            serde_json::from_str(r#"{"ratio": "3/4", "density": "compact"}"#).unwrap();
        assert_eq!(patch.ratio, Some(AspectRatio::ThreeFour));
        assert_eq!(patch.density, Some(Density::Compact));
        assert!(patch.view_mode.is_none());
    }

    #[test]
    fn partial_save_from_older_version_keeps_new_defaults() {
        // A save made before `showDescription` existed must not poison the
        // merged state.
        let patch: DisplayPatch =
            serde_json::from_str(r#"{"viewMode": "list", "columns": 2}"#).unwrap();
        let merged = DisplayOptions::default().merged(&patch);

        assert_eq!(merged.view_mode, ViewMode::List);
        assert_eq!(merged.columns, 2);
        assert_eq!(merged.show_description, DisplayOptions::default().show_description);
    }
}
