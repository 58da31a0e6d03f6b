//! End-to-end flows over the demo site: open a gallery, pick its layout,
//! resolve its sources and drive the tracker the way the modal does.

use folio_core::gallery::{select_layout, Direction, LoadTracker};
use folio_core::paths::{resolve_src, BasePathResolver};
use folio_core::{SiteConfig, Viewport};

#[test]
fn test_open_portrait_gallery_on_desktop() {
    let site = SiteConfig::demo();
    let target = site.gallery("mobile-app").unwrap();

    let viewport = Viewport::new(1440.0, 900.0);
    let layout = select_layout(target.kind.as_deref(), viewport.is_mobile());
    assert_eq!(layout.direction, Direction::Horizontal);
    assert_eq!(layout.suffix(), "portrait");

    let mut tracker = LoadTracker::new();
    let generation = tracker.reset(Some(target.images.as_slice()));

    // images report in reverse
    for index in (0..target.len()).rev() {
        assert!(!tracker.is_ready());
        tracker.mark_complete(generation, index);
    }
    assert!(tracker.is_ready());
}

#[test]
fn test_switching_galleries_mid_load() {
    let site = SiteConfig::demo();
    let first = site.gallery("dashboard").unwrap();
    let second = site.gallery("travel").unwrap();

    let mut tracker = LoadTracker::new();
    let first_gen = tracker.reset(Some(first.images.as_slice()));
    tracker.mark_complete(first_gen, 0);

    let second_gen = tracker.reset(Some(second.images.as_slice()));
    // late signal from the dashboard gallery
    tracker.mark_complete(first_gen, 1);
    assert_eq!(tracker.completed_count(), 0);

    // the broken image still counts
    tracker.mark_complete(second_gen, 1);
    tracker.mark_complete(second_gen, 0);
    assert!(tracker.is_ready());
}

#[test]
fn test_sources_are_attribute_safe() {
    let site = SiteConfig::demo();
    let resolver = BasePathResolver::new(site.base_path.clone());
    let target = site.gallery("travel").unwrap();

    let sources: Vec<String> = target
        .images
        .iter()
        .map(|raw| resolve_src(&resolver, raw))
        .collect();

    assert_eq!(sources[0], "assets/images/gallery/l%27%C3%A9t%C3%A9.jpg");
    assert!(sources.iter().all(|src| !src.contains('\'') && !src.contains('"')));
}

#[test]
fn test_mobile_landscape_stacks() {
    let site = SiteConfig::demo();
    let target = site.gallery("dashboard").unwrap();
    let layout = select_layout(target.kind.as_deref(), Viewport::new(390.0, 844.0).is_mobile());
    assert_eq!(layout.direction, Direction::Vertical);
}
