use std::collections::HashMap;

use crate::catalog::ImageRef;

/// Which source a record image is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStage {
    Primary,
    /// The primary failed; `loaded` flips once the fallback arrives
    Fallback { loaded: bool },
    /// Both sources failed. The primary is never retried.
    Exhausted,
}

/// Two-step image source selection for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback {
    image: ImageRef,
    stage: ImageStage,
}

impl ImageFallback {
    pub const fn new(image: ImageRef) -> Self {
        Self {
            image,
            stage: ImageStage::Primary,
        }
    }

    pub const fn stage(&self) -> ImageStage {
        self.stage
    }

    pub fn src(&self) -> &str {
        match self.stage {
            ImageStage::Primary => &self.image.primary,
            ImageStage::Fallback { .. } | ImageStage::Exhausted => &self.image.fallback,
        }
    }

    /// True while the fallback has not (or could not) render.
    pub const fn shows_placeholder(&self) -> bool {
        matches!(
            self.stage,
            ImageStage::Fallback { loaded: false } | ImageStage::Exhausted
        )
    }

    /// Record a load error for the current source.
    pub fn on_error(&mut self) {
        self.stage = match self.stage {
            ImageStage::Primary => ImageStage::Fallback { loaded: false },
            ImageStage::Fallback { .. } | ImageStage::Exhausted => ImageStage::Exhausted,
        };
    }

    pub fn on_load(&mut self) {
        if let ImageStage::Fallback { loaded: false } = self.stage {
            self.stage = ImageStage::Fallback { loaded: true };
        }
    }

    /// Start over if the record now points at a different image.
    pub fn sync(&mut self, image: &ImageRef) {
        if &self.image != image {
            *self = Self::new(image.clone());
        }
    }
}

/// Per-view map of record id to its image state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageFallbacks {
    by_id: HashMap<u32, ImageFallback>,
}

impl ImageFallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for a record, creating it (or resetting it if the image changed).
    pub fn entry(&mut self, id: u32, image: &ImageRef) -> &mut ImageFallback {
        let state = self
            .by_id
            .entry(id)
            .or_insert_with(|| ImageFallback::new(image.clone()));
        state.sync(image);
        state
    }

    /// Read-only view of a record's state; a record never seen shows its primary.
    pub fn get(&self, id: u32, image: &ImageRef) -> ImageFallback {
        match self.by_id.get(&id) {
            Some(state) if &state.image == image => state.clone(),
            _ => ImageFallback::new(image.clone()),
        }
    }

    pub fn on_error(&mut self, id: u32, image: &ImageRef) {
        let state = self.entry(id, image);
        state.on_error();
        tracing::debug!(id, stage = ?state.stage(), "image failed to load");
    }

    pub fn on_load(&mut self, id: u32, image: &ImageRef) {
        self.entry(id, image).on_load();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> ImageRef {
        ImageRef::new("https://img/primary.jpg", "https://img/fallback.jpg")
    }

    #[test]
    fn test_starts_on_primary() {
        let state = ImageFallback::new(image());
        assert_eq!(state.src(), "https://img/primary.jpg");
        assert!(!state.shows_placeholder());
    }

    #[test]
    fn test_primary_error_switches_to_fallback_with_placeholder() {
        let mut state = ImageFallback::new(image());
        state.on_error();
        assert_eq!(state.src(), "https://img/fallback.jpg");
        assert!(state.shows_placeholder());

        state.on_load();
        assert_eq!(state.stage(), ImageStage::Fallback { loaded: true });
        assert!(!state.shows_placeholder());
    }

    #[test]
    fn test_fallback_error_never_retries_primary() {
        let mut state = ImageFallback::new(image());
        state.on_error();
        state.on_error();
        assert_eq!(state.stage(), ImageStage::Exhausted);
        assert_eq!(state.src(), "https://img/fallback.jpg");
        assert!(state.shows_placeholder());

        state.on_error();
        state.on_load();
        assert_eq!(state.stage(), ImageStage::Exhausted);
        assert_eq!(state.src(), "https://img/fallback.jpg");
    }

    #[test]
    fn test_load_of_primary_keeps_primary() {
        let mut state = ImageFallback::new(image());
        state.on_load();
        assert_eq!(state.stage(), ImageStage::Primary);
    }

    #[test]
    fn test_changed_reference_resets() {
        let mut state = ImageFallback::new(image());
        state.on_error();
        let replacement = ImageRef::new("https://img/new.jpg", "https://img/fallback.jpg");
        state.sync(&replacement);
        assert_eq!(state.stage(), ImageStage::Primary);
        assert_eq!(state.src(), "https://img/new.jpg");
    }

    #[test]
    fn test_exhausted_entry_still_renders_fallback_under_placeholder() {
        let mut map = ImageFallbacks::new();
        map.on_error(7, &image());
        map.on_error(7, &image());

        let state = map.get(7, &image());
        assert_eq!(state.stage(), ImageStage::Exhausted);
        assert_eq!(state.src(), "https://img/fallback.jpg");
        assert!(state.shows_placeholder());
    }

    #[test]
    fn test_map_tracks_records_independently() {
        let mut map = ImageFallbacks::new();
        map.on_error(1, &image());
        assert_eq!(map.get(1, &image()).src(), "https://img/fallback.jpg");
        assert_eq!(map.get(2, &image()).src(), "https://img/primary.jpg");
    }
}
