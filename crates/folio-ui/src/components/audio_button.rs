//! Audio Button - plays the name pronunciation clip.

use dioxus::prelude::*;

use super::IconButton;

#[component]
pub fn AudioButton(
    /// Clip URL; without one the button only shows the IPA tooltip
    url: Option<String>,
    /// IPA transcription, shown as the tooltip
    tooltip: Option<String>,
) -> Element {
    let mut playing = use_signal(|| false);
    let has_audio = url.is_some();

    let play = move |_| {
        if !has_audio {
            return;
        }
        playing.set(true);
        spawn(async move {
            let mut eval = dioxus::document::eval(
                r#"
                const audio = document.getElementById('name-pronunciation-audio');
                if (audio) {
                    audio.currentTime = 0;
                    audio.onended = () => dioxus.send(true);
                    audio.onerror = () => dioxus.send(false);
                    audio.play().catch(() => dioxus.send(false));
                } else {
                    dioxus.send(false);
                }
                "#,
            );
            match eval.recv::<bool>().await {
                Ok(true) => {}
                Ok(false) => tracing::warn!("pronunciation clip could not be played"),
                Err(e) => tracing::warn!("pronunciation playback failed: {:?}", e),
            }
            playing.set(false);
        });
    };

    rsx! {
        span { class: "audio-button-wrapper",
            if let Some(url) = url.clone() {
                audio { id: "name-pronunciation-audio", src: "{url}", preload: "auto" }
            }
            IconButton {
                onclick: play,
                aria_label: "Play name pronunciation".to_string(),
                title: tooltip.clone(),
                class: if playing() { "audio-btn playing".to_string() } else { "audio-btn".to_string() },
                "\u{1F50A}"
            }
        }
    }
}
