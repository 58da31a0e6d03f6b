use dioxus::prelude::*;
use folio_core::BasePathResolver;
use folio_ui::{provide_folio_context, FolioContext, SharedResolver};

use crate::context::{launch_options, site_config};
use crate::pages::{Gallery, Home, Portfolio};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Profile card and gallery list
/// - `/gallery/:id` - Same page with the gallery modal open
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Portfolio)]
        #[route("/")]
        Home {},
        #[route("/gallery/:id")]
        Gallery { id: String },
}

/// Root application component.
///
/// Provides global styles, shared services and routing.
#[component]
pub fn App() -> Element {
    let site = site_config();
    let options = launch_options();

    provide_folio_context(FolioContext::new(
        site.language(),
        SharedResolver::new(BasePathResolver::new(site.base_path.clone())),
        options.suspend_animations,
    ));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
