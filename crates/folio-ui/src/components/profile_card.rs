//! Navigation Profile Card
//!
//! Avatar (rotating every [`AVATAR_ROTATION_INTERVAL`]), status circle,
//! stylised name with optional pronunciation, role line and the resume
//! download button.

use dioxus::prelude::*;
use folio_core::profile::{ProfileView, ResumeAction, RoleDisplay, CONTACT_SECTION_ID};
use folio_core::{
    avatar_sources, AvatarRotator, NotificationKind, Profile, AVATAR_ROTATION_INTERVAL,
};

use super::{AudioButton, StatusCircle, TextTyper};
use crate::context::{use_display_settings, use_language, use_notifications, use_path_resolver};

#[derive(Clone, PartialEq, Props)]
pub struct NavProfileCardProps {
    pub profile: Profile,
    /// Collapsed cards shrink the avatar and status circle
    #[props(default = true)]
    pub expanded: bool,
    /// Avatar images to rotate through; falls back to the profile picture
    #[props(default)]
    pub avatar_images: Vec<String>,
    /// Navigation request to a page section (e.g. "contact")
    pub on_navigate: EventHandler<String>,
}

#[component]
pub fn NavProfileCard(props: NavProfileCardProps) -> Element {
    let language = use_language();
    let resolver = use_path_resolver();
    let settings = use_display_settings();
    let mut notifications = use_notifications();

    let view = ProfileView::build(
        &props.profile,
        &language.read(),
        props.expanded,
        settings.suspend_animations,
    );

    let avatar_images = avatar_sources(&props.avatar_images, view.picture_url.as_deref());
    let mut rotator = use_signal(|| AvatarRotator::new(avatar_images.clone()));

    // The fallback picture is localised, so a language switch changes the set
    use_effect(use_reactive!(|(avatar_images,)| {
        if rotator.peek().images() != avatar_images.as_slice() {
            rotator.set(AvatarRotator::new(avatar_images));
        }
    }));

    use_future(move || async move {
        if settings.suspend_animations {
            return;
        }
        loop {
            tokio::time::sleep(AVATAR_ROTATION_INTERVAL).await;
            if rotator.peek().rotates() {
                rotator.write().advance();
            }
        }
    });

    let (avatar_src, animation_key) = {
        let rotator = rotator.read();
        (
            rotator.current().map(|raw| resolver.src(raw)),
            rotator.animation_key(),
        )
    };

    let resume = ResumeAction::for_profile(&props.profile);
    let download_label = language.read().get_string("download_resume");

    let mut report_missing_resume = move || {
        let lang = language.read();
        notifications.write().push(
            lang.get_string("error"),
            lang.get_string("error_file_not_found"),
            NotificationKind::Error,
        );
    };

    let on_resume = move |_| match &resume {
        ResumeAction::Open(url) => {
            let location = resolver.resolve(url);
            tracing::info!(%location, "opening resume");
            if let Err(e) = open::that_detached(&location) {
                tracing::error!("Failed to open resume: {}", e);
                report_missing_resume();
            }
        }
        ResumeAction::Missing => report_missing_resume(),
    };

    let on_navigate = props.on_navigate;
    let status = view.status_circle.clone();
    let card_class = view.card_class();
    let name_class = view.name_class();

    let role_line = match view.roles.clone() {
        RoleDisplay::Typed(roles) => rsx! {
            TextTyper {
                strings: roles,
                id: "role-typer".to_string(),
                class: "nav-profile-card-role".to_string(),
            }
        },
        RoleDisplay::Static(role) => rsx! {
            div { class: "nav-profile-card-role", dangerous_inner_html: "{role}" }
        },
        RoleDisplay::None => VNode::empty(),
    };

    rsx! {
        div { class: "{card_class}",
            div {
                key: "{animation_key}",
                class: "nav-profile-card-avatar-container",
                if let Some(src) = avatar_src {
                    img {
                        class: "nav-profile-card-avatar animated-avatar",
                        src: "{src}",
                        alt: "{view.name}",
                    }
                }
            }

            if status.visible {
                StatusCircle {
                    class: "nav-profile-card-status-circle".to_string(),
                    variant: status.variant.clone(),
                    message: status.hover_message.clone(),
                    size: status.size,
                    onclick: move |_| on_navigate.call(CONTACT_SECTION_ID.to_string()),
                }
            }

            div { class: "nav-profile-card-info",
                h1 { class: "{name_class}",
                    span { dangerous_inner_html: "{view.stylized_name}" }
                    if view.pronunciation.is_visible() {
                        AudioButton {
                            url: view.pronunciation.audio_url.clone(),
                            tooltip: view.pronunciation.ipa.clone(),
                        }
                    }
                }

                {role_line}

                div { class: "nav-profile-card-mobile-resume",
                    button {
                        r#type: "button",
                        class: "nav-profile-card-resume-btn",
                        title: "{download_label}",
                        onclick: on_resume,
                        span { "aria-hidden": "true", "\u{2913}" }
                        span { "{download_label}" }
                    }
                }
            }
        }
    }
}
