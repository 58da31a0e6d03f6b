//! Layout-selection policy for the gallery modal.
//!
//! A target's type tag picks one of three presets; the preset's direction
//! then picks the rendering strategy (paged strip or stacked list).

use std::fmt;

/// Which way the gallery lays its images out
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Direction {
    /// Horizontally paged strip
    #[default]
    Horizontal,
    /// Vertically stacked list
    Vertical,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named layout presets, keyed by aspect ratio
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum LayoutPreset {
    /// 9:16
    Portrait,
    /// 16:9
    Landscape,
    /// 1:1, and anything unrecognised
    #[default]
    Default,
}

impl LayoutPreset {
    pub const ALL: [LayoutPreset; 3] = [
        LayoutPreset::Portrait,
        LayoutPreset::Landscape,
        LayoutPreset::Default,
    ];

    /// Aspect-ratio id
    pub fn id(&self) -> &'static str {
        match self {
            LayoutPreset::Portrait => "9:16",
            LayoutPreset::Landscape => "16:9",
            LayoutPreset::Default => "1:1",
        }
    }

    /// Suffix used in CSS classes (`gallery-swiper-{suffix}`)
    pub fn suffix(&self) -> &'static str {
        match self {
            LayoutPreset::Portrait => "portrait",
            LayoutPreset::Landscape => "landscape",
            LayoutPreset::Default => "default",
        }
    }

    /// Resolve a type tag, matching either the id or the suffix.
    pub fn from_tag(tag: Option<&str>) -> Self {
        let Some(tag) = tag.map(str::trim) else {
            return LayoutPreset::Default;
        };
        Self::ALL
            .into_iter()
            .find(|preset| preset.id() == tag || preset.suffix().eq_ignore_ascii_case(tag))
            .unwrap_or_default()
    }

    pub fn direction(&self, is_mobile: bool) -> Direction {
        match self {
            LayoutPreset::Portrait => Direction::Horizontal,
            LayoutPreset::Landscape | LayoutPreset::Default => {
                if is_mobile {
                    Direction::Vertical
                } else {
                    Direction::Horizontal
                }
            }
        }
    }
}

/// The parameter set chosen for one render
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LayoutParameters {
    pub preset: LayoutPreset,
    pub direction: Direction,
}

impl LayoutParameters {
    pub fn suffix(&self) -> &'static str {
        self.preset.suffix()
    }
}

/// Pick the layout for a type tag at the current breakpoint.
pub fn select_layout(tag: Option<&str>, is_mobile: bool) -> LayoutParameters {
    let preset = LayoutPreset::from_tag(tag);
    LayoutParameters {
        preset,
        direction: preset.direction(is_mobile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_always_horizontal() {
        for mobile in [false, true] {
            let params = select_layout(Some("portrait"), mobile);
            assert_eq!(params.preset, LayoutPreset::Portrait);
            assert_eq!(params.direction, Direction::Horizontal);
        }
    }

    #[test]
    fn test_landscape_follows_breakpoint() {
        assert_eq!(select_layout(Some("landscape"), false).direction, Direction::Horizontal);
        assert_eq!(select_layout(Some("landscape"), true).direction, Direction::Vertical);
    }

    #[test]
    fn test_default_follows_breakpoint() {
        assert_eq!(select_layout(Some("default"), false).direction, Direction::Horizontal);
        assert_eq!(select_layout(Some("default"), true).direction, Direction::Vertical);
    }

    #[test]
    fn test_ids_match_too() {
        assert_eq!(LayoutPreset::from_tag(Some("9:16")), LayoutPreset::Portrait);
        assert_eq!(LayoutPreset::from_tag(Some("16:9")), LayoutPreset::Landscape);
        assert_eq!(LayoutPreset::from_tag(Some("1:1")), LayoutPreset::Default);
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        assert_eq!(LayoutPreset::from_tag(Some("panorama")), LayoutPreset::Default);
        assert_eq!(LayoutPreset::from_tag(None), LayoutPreset::Default);
        let params = select_layout(Some("panorama"), true);
        assert_eq!(params.suffix(), "default");
        assert_eq!(params.direction, Direction::Vertical);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Horizontal.to_string(), "horizontal");
        assert_eq!(Direction::Vertical.to_string(), "vertical");
    }
}
