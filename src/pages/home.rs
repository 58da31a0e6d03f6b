//! Portfolio page: profile card, gallery list and the gallery modal route.

use dioxus::prelude::*;
use folio_core::Viewport;
use folio_ui::{
    use_language, use_viewport, Button, ButtonVariant, GalleryModal, MorphingShapes,
    NavProfileCard, ToastStack,
};

use crate::app::Route;
use crate::context::{site_config, take_initial_gallery};

fn scroll_to_section(id: &str) {
    let script = format!(
        "document.getElementById('{}')?.scrollIntoView({{behavior:'smooth',block:'start'}});",
        id
    );
    let _ = dioxus::document::eval(&script);
}

/// Layout shared by every route; the gallery modal renders in the outlet.
#[component]
pub fn Portfolio() -> Element {
    let site = site_config();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let mut viewport = use_viewport();
    let mut language = use_language();

    let gallery_open = matches!(route, Route::Gallery { .. });
    let (section_title, languages, selected) = {
        let lang = language.read();
        (
            lang.get_string("open_gallery"),
            lang.available(),
            lang.selected().to_string(),
        )
    };

    rsx! {
        div {
            class: "portfolio-root",
            onresize: move |e| {
                if let Ok(size) = e.get_border_box_size() {
                    viewport.set(Viewport::new(size.width, size.height));
                }
            },

            MorphingShapes { hidden: gallery_open }

            nav { class: "portfolio-nav",
                NavProfileCard {
                    profile: site.profile.clone(),
                    expanded: !viewport.read().is_mobile(),
                    avatar_images: site.avatar_images.clone(),
                    on_navigate: move |section: String| scroll_to_section(&section),
                }

                if languages.len() > 1 {
                    div { class: "language-switch",
                        for code in languages {
                            {
                                let variant = if code == selected {
                                    ButtonVariant::Primary
                                } else {
                                    ButtonVariant::Ghost
                                };
                                let label = code.to_uppercase();
                                let key = code.clone();
                                rsx! {
                                    Button {
                                        key: "{key}",
                                        variant: variant,
                                        onclick: move |_| language.write().set_selected(code.clone()),
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            main { class: "portfolio-main",
                section { id: "galleries", class: "portfolio-section",
                    h2 { class: "section-title", "{section_title}" }
                    div { class: "gallery-list",
                        for entry in site.galleries.iter() {
                            {
                                let id = entry.id.clone();
                                let key = entry.id.clone();
                                let title = entry.target.title.clone();
                                let count = entry.target.len();
                                rsx! {
                                    Button {
                                        key: "{key}",
                                        variant: ButtonVariant::Outline,
                                        class: "gallery-list-item".to_string(),
                                        onclick: move |_| {
                                            navigator.push(Route::Gallery { id: id.clone() });
                                        },
                                        span { class: "gallery-list-title", "{title}" }
                                        span { class: "gallery-list-count", "{count}" }
                                    }
                                }
                            }
                        }
                    }
                }

                section { id: "contact", class: "portfolio-section",
                    h2 { class: "section-title", "Contact" }
                    p { class: "section-text", "{site.profile.name}" }
                }
            }

            Outlet::<Route> {}

            ToastStack {}
        }
    }
}

/// Nothing beyond the layout; forwards a `--gallery` launch option once.
#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        if let Some(id) = take_initial_gallery() {
            navigator.replace(Route::Gallery { id });
        }
    });

    VNode::empty()
}

#[component]
pub fn Gallery(id: String) -> Element {
    let navigator = use_navigator();
    let target = match site_config().gallery(&id) {
        Ok(target) => Some(target.clone()),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    };

    rsx! {
        GalleryModal {
            target: target,
            on_dismiss: move |_| {
                navigator.push(Route::Home {});
            },
        }
    }
}
