//! Text Typer - typewriter effect over a list of strings.

use dioxus::prelude::*;
use folio_core::Typewriter;

#[component]
pub fn TextTyper(strings: Vec<String>, id: String, #[props(default)] class: String) -> Element {
    let mut typewriter = use_signal(|| Typewriter::new(strings.clone()));

    // Restart when the role list changes (language switch)
    use_effect(use_reactive!(|(strings,)| {
        typewriter.set(Typewriter::new(strings));
    }));

    // Runs for the component's lifetime; dropped on unmount
    use_future(move || async move {
        loop {
            let delay = typewriter.write().tick();
            tokio::time::sleep(delay).await;
        }
    });

    let text = typewriter.read().text();

    rsx! {
        div { id: "{id}", class: "text-typer {class}",
            span { class: "text-typer-text", dangerous_inner_html: "{text}" }
            span { class: "text-typer-cursor", "aria-hidden": "true", "|" }
        }
    }
}
