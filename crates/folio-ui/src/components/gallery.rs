//! Gallery Modal
//!
//! Full-screen image gallery. Images render through one of two layout
//! strategies; both report every load or error to the same [`LoadTracker`],
//! and the spinner stays up until the tracker is ready.

use dioxus::prelude::*;
use folio_core::gallery::{select_layout, Direction, GalleryTarget, Generation, LoadTracker};

use super::{ModalBody, ModalWrapper};
use crate::context::{use_path_resolver, use_viewport};

/// The two interchangeable ways to lay out gallery images
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayoutStrategy {
    /// Horizontally paged strip with pagination dots
    Strip,
    /// Vertically stacked list
    Stack,
}

impl From<Direction> for LayoutStrategy {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Horizontal => LayoutStrategy::Strip,
            Direction::Vertical => LayoutStrategy::Stack,
        }
    }
}

impl LayoutStrategy {
    pub fn container_class(&self, suffix: &str) -> String {
        match self {
            LayoutStrategy::Strip => format!("gallery-strip gallery-strip-{}", suffix),
            LayoutStrategy::Stack => "gallery-stack".to_string(),
        }
    }

    pub fn item_class(&self) -> &'static str {
        match self {
            LayoutStrategy::Strip => "gallery-strip-slide",
            LayoutStrategy::Stack => "gallery-stack-item",
        }
    }

    pub fn has_pagination(&self) -> bool {
        matches!(self, LayoutStrategy::Strip)
    }
}

/// Overlay classes: loading state plus layout direction
pub fn gallery_modal_class(ready: bool, direction: Direction) -> String {
    if ready {
        format!("gallery-modal-{}", direction)
    } else {
        format!("gallery-modal-loading gallery-modal-{}", direction)
    }
}

/// Readiness as shown for `images`.
///
/// The tracker is reset in an effect, after the first render of a new
/// target. Until then its state belongs to the previous image set and must
/// read as loading.
pub fn shown_ready(tracker_ready: bool, tracked: Option<&[String]>, images: &[String]) -> bool {
    tracker_ready && tracked == Some(images)
}

/// Images stay laid out but hidden while loading so they keep their size
pub fn visibility_class(ready: bool) -> &'static str {
    if ready {
        "visible"
    } else {
        "invisible"
    }
}

/// Gallery modal bound to the current target.
///
/// # Example
///
/// ```rust,ignore
/// let mut target = use_signal(|| None::<GalleryTarget>);
///
/// rsx! {
///     GalleryModal {
///         target: target(),
///         on_dismiss: move |_| target.set(None),
///     }
/// }
/// ```
#[component]
pub fn GalleryModal(
    /// Gallery to show; `None` renders nothing
    target: Option<GalleryTarget>,
    /// Called after the modal finished closing
    on_dismiss: EventHandler<()>,
) -> Element {
    let viewport = use_viewport();
    let resolver = use_path_resolver();
    let mut tracker = use_signal(LoadTracker::new);
    let mut tracked_images = use_signal(|| None::<Vec<String>>);
    let mut should_dismiss = use_signal(|| false);

    // A new target starts a new tracker generation; signals still in flight
    // for the old images carry the old generation and are dropped.
    use_effect(use_reactive((&target,), move |(target,)| {
        tracker
            .write()
            .reset(target.as_ref().map(|t| t.images.as_slice()));
        tracked_images.set(target.map(|t| t.images));
        should_dismiss.set(false);
    }));

    let Some(target) = target else {
        return VNode::empty();
    };

    let (ready, in_sync, generation) = {
        let state = tracker.read();
        let tracked = tracked_images.read();
        (
            shown_ready(state.is_ready(), tracked.as_deref(), &target.images),
            tracked.as_deref() == Some(target.images.as_slice()),
            state.generation(),
        )
    };
    let layout = select_layout(target.kind.as_deref(), viewport.read().is_mobile());
    let strategy = LayoutStrategy::from(layout.direction);
    let sources: Vec<String> = target.images.iter().map(|raw| resolver.src(raw)).collect();

    let on_item_complete = move |index: usize| {
        // Before the reset effect ran, `generation` still belongs to the
        // previous target
        if !in_sync {
            return;
        }
        // Check without subscribing so duplicate signals never dirty the signal
        if tracker.peek().accepts(generation, index) {
            tracker.write().mark_complete(generation, index);
        }
    };

    rsx! {
        ModalWrapper {
            id: "gallery-modal".to_string(),
            class: gallery_modal_class(ready, layout.direction),
            dialog_class: "modal-fullscreen".to_string(),
            title: target.title.clone(),
            icon: Some("\u{1F5BC}".to_string()),
            should_dismiss: should_dismiss(),
            on_close: move |_| should_dismiss.set(true),
            on_dismiss: on_dismiss,

            ModalBody { class: "gallery-modal-body".to_string(),
                GalleryImages {
                    strategy: strategy,
                    sources: sources,
                    suffix: layout.suffix().to_string(),
                    class: visibility_class(ready).to_string(),
                    generation: generation,
                    on_item_complete: on_item_complete,
                }

                if !ready {
                    GallerySpinner {}
                }
            }
        }
    }
}

/// Renders every image through the chosen strategy.
#[component]
pub fn GalleryImages(
    strategy: LayoutStrategy,
    /// Already resolved and encoded `src` values
    sources: Vec<String>,
    /// Layout preset suffix, used by the strip's CSS
    suffix: String,
    #[props(default)] class: String,
    /// Keys items so a new target remounts every image
    generation: Generation,
    /// Called with the image index on load and on error
    on_item_complete: EventHandler<usize>,
) -> Element {
    let container_class = strategy.container_class(&suffix);
    let item_class = strategy.item_class();
    let page_count = sources.len();

    rsx! {
        div { class: "{container_class} {class}",
            div { class: "gallery-track",
                for (index, src) in sources.iter().enumerate() {
                    div {
                        key: "{generation}-{index}",
                        id: "gallery-item-{index}",
                        class: "{item_class}",
                        GalleryImage {
                            index: index,
                            src: src.clone(),
                            on_complete: on_item_complete,
                        }
                    }
                }
            }

            if strategy.has_pagination() && page_count > 1 {
                GalleryPagination { count: page_count }
            }
        }
    }
}

/// Clickable dots under the strip; each scrolls its slide into view.
#[component]
fn GalleryPagination(count: usize) -> Element {
    let mut active_page = use_signal(|| 0usize);

    let mut go_to = move |page: usize| {
        active_page.set(page);
        let script = format!(
            "document.getElementById('gallery-item-{}')?.scrollIntoView({{behavior:'smooth',inline:'center',block:'nearest'}});",
            page
        );
        let _ = dioxus::document::eval(&script);
    };

    rsx! {
        div { class: "gallery-pagination",
            for page in 0..count {
                button {
                    key: "{page}",
                    r#type: "button",
                    class: if active_page() == page { "gallery-dot active" } else { "gallery-dot" },
                    "aria-label": format!("Go to image {}", page + 1),
                    onclick: move |_| go_to(page),
                }
            }
        }
    }
}

/// A single gallery image wired to the completion callback.
///
/// Load and error are reported the same way: a broken image must not keep
/// the gallery loading forever.
#[component]
pub fn GalleryImage(index: usize, src: String, on_complete: EventHandler<usize>) -> Element {
    rsx! {
        img {
            class: "gallery-image",
            alt: "img-{index}",
            src: "{src}",
            draggable: "false",
            onload: move |_| on_complete.call(index),
            onerror: move |_| {
                tracing::debug!(index, "gallery image failed to load");
                on_complete.call(index);
            },
        }
    }
}

#[component]
pub fn GallerySpinner() -> Element {
    rsx! {
        div { class: "gallery-modal-spinner",
            div { class: "loading-spinner", role: "status", "aria-label": "Loading" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_follows_direction() {
        assert_eq!(LayoutStrategy::from(Direction::Horizontal), LayoutStrategy::Strip);
        assert_eq!(LayoutStrategy::from(Direction::Vertical), LayoutStrategy::Stack);
    }

    #[test]
    fn strategy_classes() {
        assert_eq!(
            LayoutStrategy::Strip.container_class("portrait"),
            "gallery-strip gallery-strip-portrait"
        );
        assert_eq!(LayoutStrategy::Stack.container_class("portrait"), "gallery-stack");
        assert!(LayoutStrategy::Strip.has_pagination());
        assert!(!LayoutStrategy::Stack.has_pagination());
    }

    #[test]
    fn modal_class_tracks_readiness() {
        assert_eq!(
            gallery_modal_class(false, Direction::Vertical),
            "gallery-modal-loading gallery-modal-vertical"
        );
        assert_eq!(
            gallery_modal_class(true, Direction::Horizontal),
            "gallery-modal-horizontal"
        );
        assert_eq!(visibility_class(false), "invisible");
        assert_eq!(visibility_class(true), "visible");
    }

    fn paths(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn ready_tracker_for_previous_target_reads_as_loading() {
        let a = paths(&["a0.jpg", "a1.jpg"]);
        let b = paths(&["b0.jpg"]);

        // first render of B, reset effect not yet run
        assert!(!shown_ready(true, Some(a.as_slice()), &b));
        assert!(!shown_ready(true, None, &b));

        // after the reset
        assert!(!shown_ready(false, Some(b.as_slice()), &b));
        assert!(shown_ready(true, Some(b.as_slice()), &b));
    }

    #[test]
    fn tracker_state_for_reset_images_is_shown() {
        let mut tracker = LoadTracker::new();
        let a = paths(&["a0.jpg"]);
        let b = paths(&["b0.jpg", "b1.jpg"]);

        let gen = tracker.reset(Some(a.as_slice()));
        tracker.mark_complete(gen, 0);
        assert!(shown_ready(tracker.is_ready(), Some(a.as_slice()), &a));
        assert!(!shown_ready(tracker.is_ready(), Some(a.as_slice()), &b));

        let gen = tracker.reset(Some(b.as_slice()));
        tracker.mark_complete(gen, 0);
        tracker.mark_complete(gen, 1);
        assert!(shown_ready(tracker.is_ready(), Some(b.as_slice()), &b));
    }
}
