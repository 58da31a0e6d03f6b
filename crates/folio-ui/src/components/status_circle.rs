//! Status Circle Component
//!
//! Small coloured dot on the profile card with an optional hover message.

use dioxus::prelude::*;
use folio_core::StatusCircleSize;

/// Variant to CSS class; unknown variants fall back to the neutral dot
pub fn status_variant_class(variant: &str) -> &'static str {
    match variant {
        "success" => "status-circle-success",
        "warning" => "status-circle-warning",
        "danger" => "status-circle-danger",
        "info" => "status-circle-info",
        _ => "status-circle-neutral",
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct StatusCircleProps {
    pub variant: String,
    #[props(default)]
    pub message: Option<String>,
    #[props(default)]
    pub size: StatusCircleSize,
    #[props(default)]
    pub class: String,
    pub onclick: EventHandler<()>,
}

#[component]
pub fn StatusCircle(props: StatusCircleProps) -> Element {
    let variant_class = status_variant_class(&props.variant);
    let size_class = props.size.class();

    rsx! {
        button {
            r#type: "button",
            class: "status-circle {variant_class} {size_class} {props.class}",
            title: props.message.clone(),
            "aria-label": props.message.clone().unwrap_or_else(|| "Status".to_string()),
            onclick: move |_| props.onclick.call(()),
            span { class: "status-circle-pulse" }
        }
    }
}
