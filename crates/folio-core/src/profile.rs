//! Profile model and the derived view for the navigation profile card.

use serde::{Deserialize, Serialize};

use crate::language::{Language, LocalizedText, Locales};

/// Section the status circle links to
pub const CONTACT_SECTION_ID: &str = "contact";

/// Owner profile as stored in the site config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub locales: Locales,
    pub profile_picture_url: LocalizedText,
    pub status_circle_visible: bool,
    pub status_circle_variant: String,
    /// Translation key for the hover text
    pub status_circle_hover_message: Option<String>,
    pub resume_pdf_url: Option<String>,
}

/// Status circle size, tied to the card's expanded state
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StatusCircleSize {
    #[default]
    Default,
    Small,
}

impl StatusCircleSize {
    pub fn class(&self) -> &'static str {
        match self {
            StatusCircleSize::Default => "status-circle-default",
            StatusCircleSize::Small => "status-circle-small",
        }
    }
}

/// How the role line renders
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RoleDisplay {
    /// Nothing to show
    None,
    /// One role, shown as-is
    Static(String),
    /// Several roles, cycled by the typewriter
    Typed(Vec<String>),
}

impl RoleDisplay {
    pub fn from_roles(mut roles: Vec<String>) -> Self {
        match roles.len() {
            0 => RoleDisplay::None,
            1 => RoleDisplay::Static(roles.remove(0)),
            _ => RoleDisplay::Typed(roles),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct StatusCircleView {
    pub visible: bool,
    /// Empty when hidden
    pub variant: String,
    pub hover_message: Option<String>,
    pub size: StatusCircleSize,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PronunciationView {
    pub ipa: Option<String>,
    pub audio_url: Option<String>,
}

impl PronunciationView {
    /// The audio button shows when either piece is present
    pub fn is_visible(&self) -> bool {
        self.ipa.is_some() || self.audio_url.is_some()
    }
}

/// Everything the profile card needs, already localised.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProfileView {
    pub name: String,
    /// May contain inline HTML
    pub stylized_name: String,
    pub roles: RoleDisplay,
    pub picture_url: Option<String>,
    pub status_circle: StatusCircleView,
    pub pronunciation: PronunciationView,
    pub expanded: bool,
}

impl ProfileView {
    pub fn build(
        profile: &Profile,
        language: &Language,
        expanded: bool,
        suspend_animations: bool,
    ) -> Self {
        let locales = &profile.locales;

        let stylized_name = language
            .get_translated_string(locales, "localized_name_stylized")
            .or_else(|| language.get_translated_string(locales, "localized_name"))
            .unwrap_or_else(|| profile.name.clone());

        let mut roles = language.get_translated_strings(locales, "roles");
        if suspend_animations && roles.len() > 2 {
            roles.truncate(1);
        }

        let visible = profile.status_circle_visible;
        let status_circle = StatusCircleView {
            visible,
            variant: if visible {
                profile.status_circle_variant.clone()
            } else {
                String::new()
            },
            hover_message: profile
                .status_circle_hover_message
                .as_deref()
                .filter(|_| visible)
                .and_then(|key| language.get_translated_string(locales, key)),
            size: if expanded {
                StatusCircleSize::Default
            } else {
                StatusCircleSize::Small
            },
        };

        let pronunciation = PronunciationView {
            ipa: language.get_translated_string(locales, "name_pronunciation_ipa"),
            audio_url: language.get_translated_string(locales, "name_pronunciation_audio_url"),
        };

        Self {
            name: profile.name.clone(),
            stylized_name,
            roles: RoleDisplay::from_roles(roles),
            picture_url: language.parse_localized(&profile.profile_picture_url),
            status_circle,
            pronunciation,
            expanded,
        }
    }

    pub fn card_class(&self) -> &'static str {
        if self.expanded {
            "nav-profile-card"
        } else {
            "nav-profile-card nav-profile-card-shrink"
        }
    }

    pub fn name_class(&self) -> &'static str {
        if self.pronunciation.is_visible() {
            "nav-profile-card-name nav-profile-card-name-with-audio-button"
        } else {
            "nav-profile-card-name"
        }
    }
}

/// What the resume button should do
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ResumeAction {
    Open(String),
    /// No resume configured; surface an error notification
    Missing,
}

impl ResumeAction {
    pub fn for_profile(profile: &Profile) -> Self {
        match profile.resume_pdf_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => ResumeAction::Open(url.to_string()),
            _ => ResumeAction::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile() -> Profile {
        serde_json::from_value(json!({
            "name": "Ada",
            "locales": {
                "en": {
                    "localized_name": "Ada L.",
                    "roles": ["Engineer", "Speaker", "Writer"],
                    "status_open": "Open to work",
                    "name_pronunciation_ipa": "/ˈeɪdə/"
                }
            },
            "profilePictureUrl": "images/me.jpg",
            "statusCircleVisible": true,
            "statusCircleVariant": "success",
            "statusCircleHoverMessage": "status_open",
            "resumePdfUrl": "docs/cv.pdf"
        }))
        .unwrap()
    }

    fn english() -> Language {
        Language::new("en", Locales::new())
    }

    #[test]
    fn test_name_fallback_chain() {
        let view = ProfileView::build(&profile(), &english(), true, false);
        assert_eq!(view.stylized_name, "Ada L.");

        let bare = Profile {
            name: "Bare".into(),
            ..Profile::default()
        };
        let view = ProfileView::build(&bare, &english(), true, false);
        assert_eq!(view.stylized_name, "Bare");
    }

    #[test]
    fn test_roles_typed_or_static() {
        let view = ProfileView::build(&profile(), &english(), true, false);
        assert!(matches!(view.roles, RoleDisplay::Typed(ref r) if r.len() == 3));

        let view = ProfileView::build(&profile(), &english(), true, true);
        assert_eq!(view.roles, RoleDisplay::Static("Engineer".into()));
    }

    #[test]
    fn test_two_roles_kept_when_suspended() {
        let mut p = profile();
        p.locales
            .get_mut("en")
            .unwrap()
            .insert("roles".into(), json!(["A", "B"]));
        let view = ProfileView::build(&p, &english(), true, true);
        assert_eq!(view.roles, RoleDisplay::Typed(vec!["A".into(), "B".into()]));
    }

    #[test]
    fn test_status_circle() {
        let view = ProfileView::build(&profile(), &english(), false, false);
        assert!(view.status_circle.visible);
        assert_eq!(view.status_circle.variant, "success");
        assert_eq!(view.status_circle.hover_message.as_deref(), Some("Open to work"));
        assert_eq!(view.status_circle.size, StatusCircleSize::Small);
        assert_eq!(view.card_class(), "nav-profile-card nav-profile-card-shrink");

        let mut hidden = profile();
        hidden.status_circle_visible = false;
        let view = ProfileView::build(&hidden, &english(), true, false);
        assert!(view.status_circle.variant.is_empty());
        assert!(view.status_circle.hover_message.is_none());
        assert_eq!(view.status_circle.size, StatusCircleSize::Default);
    }

    #[test]
    fn test_pronunciation_visibility() {
        let view = ProfileView::build(&profile(), &english(), true, false);
        assert!(view.pronunciation.is_visible());
        assert!(view.name_class().contains("with-audio-button"));

        let view = ProfileView::build(&Profile::default(), &english(), true, false);
        assert!(!view.pronunciation.is_visible());
    }

    #[test]
    fn test_picture_url() {
        let view = ProfileView::build(&profile(), &english(), true, false);
        assert_eq!(view.picture_url.as_deref(), Some("images/me.jpg"));
    }

    #[test]
    fn test_resume_action() {
        assert_eq!(
            ResumeAction::for_profile(&profile()),
            ResumeAction::Open("docs/cv.pdf".into())
        );
        let mut p = profile();
        p.resume_pdf_url = Some("  ".into());
        assert_eq!(ResumeAction::for_profile(&p), ResumeAction::Missing);
        p.resume_pdf_url = None;
        assert_eq!(ResumeAction::for_profile(&p), ResumeAction::Missing);
    }
}
