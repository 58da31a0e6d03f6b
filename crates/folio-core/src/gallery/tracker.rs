//! Image Load Tracker
//!
//! Gates the gallery spinner: the gallery stays `Loading` until every image
//! of the current target has reported either a load or an error.
//!
//! Signals are tagged with the [`Generation`] handed out by
//! [`LoadTracker::reset`]. A signal from an earlier generation belongs to a
//! target that is no longer shown and is dropped.
//!
//! ```
//! use folio_core::gallery::LoadTracker;
//!
//! let images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
//! let mut tracker = LoadTracker::new();
//! let generation = tracker.reset(Some(images.as_slice()));
//!
//! tracker.mark_complete(generation, 1);
//! assert!(!tracker.is_ready());
//! tracker.mark_complete(generation, 0); // load errors count too
//! assert!(tracker.is_ready());
//! ```

use std::fmt;

/// Identifies one target lifetime inside a [`LoadTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen-{}", self.0)
    }
}

/// Coarse state of the current target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting on at least one image (or no images at all)
    Loading,
    /// Every image has reported
    Ready,
}

/// Per-image completion bookkeeping for the gallery modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadTracker {
    generation: Generation,
    loaded: Vec<bool>,
    ready: bool,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a new image set.
    ///
    /// Clears all marks and readiness. `None` or an empty slice is valid
    /// input: the tracker stays `Loading` and expects no signals.
    pub fn reset(&mut self, images: Option<&[String]>) -> Generation {
        let len = images.map_or(0, <[String]>::len);
        self.generation = self.generation.next();
        self.loaded = vec![false; len];
        self.ready = false;
        tracing::debug!(generation = %self.generation, images = len, "gallery tracker reset");
        self.generation
    }

    /// Whether `mark_complete(generation, index)` would change anything.
    ///
    /// Reactive hosts check this against a non-subscribing read before
    /// taking a write borrow, so duplicate signals never dirty the state.
    pub fn accepts(&self, generation: Generation, index: usize) -> bool {
        generation == self.generation && matches!(self.loaded.get(index), Some(false))
    }

    /// Record that image `index` finished loading, successfully or not.
    ///
    /// Returns `true` when the mark was new. Duplicate marks, stale
    /// generations and out-of-range indices leave the tracker untouched and
    /// return `false`.
    pub fn mark_complete(&mut self, generation: Generation, index: usize) -> bool {
        if generation != self.generation {
            tracing::trace!(%generation, current = %self.generation, index, "stale load signal dropped");
            return false;
        }
        match self.loaded.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            Some(_) => return false,
            None => {
                tracing::warn!(index, len = self.loaded.len(), "load signal for unknown image index");
                return false;
            }
        }

        self.ready = Self::all_loaded(&self.loaded);
        if self.ready {
            tracing::debug!(generation = %self.generation, images = self.loaded.len(), "gallery ready");
        }
        true
    }

    fn all_loaded(loaded: &[bool]) -> bool {
        !loaded.is_empty() && loaded.iter().all(|&done| done)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn state(&self) -> LoadState {
        if self.ready {
            LoadState::Ready
        } else {
            LoadState::Loading
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of images in the current set
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    pub fn is_complete(&self, index: usize) -> bool {
        self.loaded.get(index).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.loaded.iter().filter(|&&done| done).count()
    }
}
