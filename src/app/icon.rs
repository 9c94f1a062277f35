use leptos::prelude::*;

use crate::content::{Glyph, Icon};

/// Renders an icon-font glyph. `size` is a Tailwind text size class.
#[component]
pub fn IconView(icon: Icon, #[prop(default = "text-2xl")] size: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {size}", icon.class()) aria-hidden="true"></i> }
}

/// A glyph that takes its color from the surrounding text.
#[component]
pub fn GlyphView(
    glyph: Glyph,
    #[prop(default = "text-xl")] size: &'static str,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! { <i class=format!("{} {size} {class}", glyph.class()) aria-hidden="true"></i> }
}
