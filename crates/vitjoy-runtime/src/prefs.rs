use std::path::{Path, PathBuf};

use tracing::debug;
use vitjoy_types::{DisplayOptions, DisplayPatch};

/// File name of the persisted display preferences under the data directory.
pub const DISPLAY_FILE: &str = "display.json";

/// Persisted display preferences.
///
/// Loading merges the stored overlay over defaults, so a field introduced
/// after an old save still gets its default instead of poisoning the state.
/// Every failure mode (missing file, malformed JSON, unwritable directory)
/// degrades to defaults or an in-memory-only update; nothing here is allowed
/// to surface an error, because this store is a cosmetic cache.
#[derive(Debug, Clone)]
pub struct DisplayStore {
    path: PathBuf,
    options: DisplayOptions,
}

impl DisplayStore {
    /// Load preferences from the data directory, falling back to defaults.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(DISPLAY_FILE);
        let options = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<DisplayPatch>(&content) {
                Ok(patch) => DisplayOptions::default().merged(&patch),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "malformed display state, using defaults");
                    DisplayOptions::default()
                }
            },
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no stored display state, using defaults");
                DisplayOptions::default()
            }
        };

        Self { path, options }
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    /// Merge a partial update onto the current state and persist best-effort.
    /// The in-memory update always applies, even when the write fails.
    pub fn update(&mut self, patch: &DisplayPatch) -> DisplayOptions {
        self.options = self.options.merged(patch);
        self.save();
        self.options
    }

    /// Drop back to defaults and persist best-effort.
    pub fn reset(&mut self) -> DisplayOptions {
        self.options = DisplayOptions::default();
        self.save();
        self.options
    }

    /// Best-effort persistence of the full current state.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            debug!(path = %self.path.display(), error = %e, "failed to persist display state");
        }
    }

    fn try_save(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.options)
            .map_err(std::io::Error::other)?;
        std::fs::write(&self.path, content)
    }
}
