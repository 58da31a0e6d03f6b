//! Reusable portfolio components.

mod audio_button;
mod button;
mod gallery;
mod modal;
mod morphing_shapes;
mod profile_card;
mod status_circle;
mod text_typer;
mod toast;

pub use audio_button::*;
pub use button::*;
pub use gallery::*;
pub use modal::*;
pub use morphing_shapes::*;
pub use profile_card::*;
pub use status_circle::*;
pub use text_typer::*;
pub use toast::*;
