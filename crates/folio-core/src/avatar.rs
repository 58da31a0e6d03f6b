//! Avatar rotation for the profile card.

use std::time::Duration;

/// Time between avatar swaps (one full CSS animation cycle)
pub const AVATAR_ROTATION_INTERVAL: Duration = Duration::from_secs(15);

/// Images the card rotates through: the configured list, or the profile
/// picture alone when none are configured.
pub fn avatar_sources(configured: &[String], picture: Option<&str>) -> Vec<String> {
    if configured.is_empty() {
        picture.map(str::to_string).into_iter().collect()
    } else {
        configured.to_vec()
    }
}

/// Cycles through avatar images.
///
/// `animation_key` changes on every advance so the host can re-key the
/// avatar element and restart its entrance animation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AvatarRotator {
    images: Vec<String>,
    index: usize,
    animation_key: u64,
}

impl AvatarRotator {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            index: 0,
            animation_key: 0,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn animation_key(&self) -> u64 {
        self.animation_key
    }

    /// Nothing to rotate with fewer than two images
    pub fn rotates(&self) -> bool {
        self.images.len() > 1
    }

    pub fn advance(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.images.len();
        self.animation_key = self.animation_key.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_prefer_configured_images() {
        let configured = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        assert_eq!(avatar_sources(&configured, Some("me.jpg")), configured);
    }

    #[test]
    fn test_sources_follow_profile_picture() {
        // the picture is localised; switching language swaps the fallback
        assert_eq!(avatar_sources(&[], Some("en.jpg")), vec!["en.jpg".to_string()]);
        assert_eq!(avatar_sources(&[], Some("de.jpg")), vec!["de.jpg".to_string()]);
        assert!(avatar_sources(&[], None).is_empty());
    }

    #[test]
    fn test_wraps_around() {
        let mut rotator = AvatarRotator::new(vec!["a.jpg".into(), "b.jpg".into()]);
        assert_eq!(rotator.current(), Some("a.jpg"));
        rotator.advance();
        assert_eq!(rotator.current(), Some("b.jpg"));
        rotator.advance();
        assert_eq!(rotator.current(), Some("a.jpg"));
        assert_eq!(rotator.animation_key(), 2);
    }

    #[test]
    fn test_empty_is_noop() {
        let mut rotator = AvatarRotator::default();
        rotator.advance();
        assert_eq!(rotator.current(), None);
        assert_eq!(rotator.animation_key(), 0);
        assert!(!rotator.rotates());
    }

    #[test]
    fn test_single_image_still_restarts_animation() {
        let mut rotator = AvatarRotator::new(vec!["a.jpg".into()]);
        rotator.advance();
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.animation_key(), 1);
    }
}
