use std::path::{Path, PathBuf};

/// Extensions tried, in order, when an image reference has no extension.
pub const CANDIDATE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Finite, restartable sequence of candidate paths for an image reference.
///
/// A reference that already carries an extension yields exactly one
/// candidate; a bare stem yields one candidate per known extension, in
/// declaration order. Consumers walk the sequence until the first hit or
/// exhaustion; exhaustion means "no image", never an error.
pub fn candidates(assets_root: &Path, src: &str) -> Vec<PathBuf> {
    let relative = src.trim_start_matches('/');
    let base = assets_root.join(relative);

    if base.extension().is_some() {
        return vec![base];
    }

    CANDIDATE_EXTENSIONS
        .iter()
        .map(|ext| base.with_extension(ext))
        .collect()
}

/// First existing candidate for an image reference, or None.
pub fn resolve(assets_root: &Path, src: &str) -> Option<PathBuf> {
    candidates(assets_root, src).into_iter().find(|p| p.is_file())
}
