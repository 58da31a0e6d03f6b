//! Morphing Shapes
//!
//! Decorative background: four blurred blobs whose border-radius and
//! position are animated entirely in CSS (see `.morphing-shape`).

use dioxus::prelude::*;

pub const SHAPE_COUNT: usize = 4;

pub fn morphing_wrapper_class(class: &str, hidden: bool) -> String {
    let mut full = String::from("morphing-shapes-wrapper");
    if !class.is_empty() {
        full.push(' ');
        full.push_str(class);
    }
    if hidden {
        full.push_str(" morphing-shapes-wrapper-hidden");
    }
    full
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "relative",
///         MorphingShapes { hidden: gallery_open() }
///         // Content goes on top
///     }
/// }
/// ```
#[component]
pub fn MorphingShapes(#[props(default)] class: String, #[props(default = false)] hidden: bool) -> Element {
    let wrapper_class = morphing_wrapper_class(&class, hidden);

    rsx! {
        div { class: "{wrapper_class}", "aria-hidden": "true",
            div { class: "morphing-shapes-container",
                for n in 1..=SHAPE_COUNT {
                    div { key: "{n}", class: "morphing-shape shape-{n}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_classes() {
        assert_eq!(morphing_wrapper_class("", false), "morphing-shapes-wrapper");
        assert_eq!(
            morphing_wrapper_class("nav-bg", true),
            "morphing-shapes-wrapper nav-bg morphing-shapes-wrapper-hidden"
        );
    }
}
