use std::path::{Path, PathBuf};
use crate::models::{BestPairView, PairResult, Portrait};

/// Resolves bird image references into displayable portraits
///
/// Resolution never fails: an empty reference, a missing file or an image
/// that cannot be decoded all yield a text label with the bird's id.
#[derive(Debug, Clone, Default)]
pub struct PortraitResolver {
    image_root: Option<PathBuf>,
}

impl PortraitResolver {
    pub fn new(image_root: Option<PathBuf>) -> Self {
        Self { image_root }
    }

    fn locate(&self, image_ref: &str) -> PathBuf {
        let path = Path::new(image_ref);
        match &self.image_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn resolve(&self, bird_id: &str, image_ref: &str) -> Portrait {
        let label = || Portrait::Label {
            text: bird_id.to_string(),
        };

        let image_ref = image_ref.trim();
        if image_ref.is_empty() {
            return label();
        }

        let path = self.locate(image_ref);
        if !path.is_file() {
            tracing::debug!("Portrait for {} not found at {}", bird_id, path.display());
            return label();
        }

        match image::image_dimensions(&path) {
            Ok((width, height)) => Portrait::Image {
                path: path.display().to_string(),
                width,
                height,
                caption: bird_id.to_string(),
            },
            Err(e) => {
                tracing::warn!("Failed to decode portrait for {} ({}): {}", bird_id, path.display(), e);
                label()
            }
        }
    }

    /// Build the highlighted view of a pair with both portraits resolved
    pub fn best_pair_view(&self, pair: &PairResult) -> BestPairView {
        BestPairView {
            sire_id: pair.sire_id.clone(),
            dam_id: pair.dam_id.clone(),
            compatibility: pair.compatibility,
            sire: self.resolve(&pair.sire_id, &pair.sire_image),
            dam: self.resolve(&pair.dam_id, &pair.dam_image),
        }
    }
}
