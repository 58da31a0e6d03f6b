//! Modal shell used by the gallery.
//!
//! Closing is two-step: the host flips `should_dismiss`, the shell plays its
//! exit transition, then reports `on_dismiss`.

use std::time::Duration;

use dioxus::prelude::*;

use super::CloseButton;

/// Length of the `.modal-closing` fade in the stylesheet
pub const MODAL_EXIT_DURATION: Duration = Duration::from_millis(200);

#[derive(Clone, PartialEq, Props)]
pub struct ModalWrapperProps {
    pub id: String,
    /// Extra classes on the overlay
    #[props(default)]
    pub class: String,
    /// Extra classes on the dialog box (e.g. "modal-fullscreen")
    #[props(default)]
    pub dialog_class: String,
    pub title: String,
    /// Icon glyph shown before the title
    #[props(default)]
    pub icon: Option<String>,
    /// Set by the host to start the exit transition
    pub should_dismiss: bool,
    /// Close request from the title bar, overlay or Escape key
    pub on_close: EventHandler<()>,
    /// Fired once the exit transition finished
    pub on_dismiss: EventHandler<()>,
    pub children: Element,
}

#[component]
pub fn ModalWrapper(props: ModalWrapperProps) -> Element {
    let on_dismiss = props.on_dismiss;
    let on_close = props.on_close;
    let should_dismiss = props.should_dismiss;

    use_effect(use_reactive!(|(should_dismiss,)| {
        if should_dismiss {
            spawn(async move {
                tokio::time::sleep(MODAL_EXIT_DURATION).await;
                on_dismiss.call(());
            });
        }
    }));

    let closing_class = if should_dismiss { "modal-closing" } else { "" };

    rsx! {
        div {
            id: "{props.id}",
            class: "modal-overlay {props.class} {closing_class}",
            tabindex: "-1",
            // Focus the overlay so Escape reaches `onkeydown`
            onmounted: move |e| async move {
                if let Err(err) = e.set_focus(true).await {
                    tracing::debug!("Modal overlay focus failed: {:?}", err);
                }
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div {
                class: "modal-dialog {props.dialog_class}",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                ModalTitle {
                    title: props.title.clone(),
                    icon: props.icon.clone(),
                    on_close: on_close,
                }

                {props.children}
            }
        }
    }
}

#[component]
pub fn ModalTitle(title: String, icon: Option<String>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-header",
            h2 { class: "modal-title",
                if let Some(icon) = icon {
                    span { class: "modal-title-icon", "aria-hidden": "true", "{icon}" }
                }
                span { "{title}" }
            }
            CloseButton { onclick: on_close }
        }
    }
}

#[component]
pub fn ModalBody(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "modal-body {class}", {children} }
    }
}
