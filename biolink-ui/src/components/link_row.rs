use biolink_api_protocol::Link;
use leptos::{
    component,
    view,
    IntoView,
};

use super::icon::BootstrapIcon;
use crate::icon_style::{
    Background,
    IconStyle,
};

stylance::import_crate_style!(style, "src/components/link_row.module.scss");

/// What a link row shows, resolved from a [`Link`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub href: String,
    pub title: String,
    pub glyph: Option<&'static str>,
    pub background: Background,
}

impl Row {
    pub fn new(link: &Link) -> Self {
        let IconStyle { glyph, background } = IconStyle::for_icon_type(&link.icon_type);
        Self {
            href: link.url.clone(),
            title: link.title.clone(),
            glyph,
            background,
        }
    }
}

/// One link, opening in a new tab.
///
/// The opened page gets neither the referrer nor a handle to this window.
#[component]
pub fn LinkRow(link: Link) -> impl IntoView {
    let Row {
        href,
        title,
        glyph,
        background,
    } = Row::new(&link);

    view! {
        <a
            class=style::row
            href=href
            target="_blank"
            rel="noopener noreferrer"
            style=background.css()
        >
            {glyph.map(|glyph| view! { <BootstrapIcon icon=glyph /> })}
            <span class=style::title>{title}</span>
        </a>
    }
}
