use leptos::{
    component,
    view,
    IntoView,
    Oco,
};

/// A glyph from the Bootstrap icon font.
///
/// Decorative unless `label` is given.
#[component]
pub fn BootstrapIcon(
    icon: &'static str,
    #[prop(into, optional)] label: Option<Oco<'static, str>>,
) -> impl IntoView {
    let hidden = label.is_none().then_some("true");
    view! {
        <i class=format!("bi bi-{icon}") aria-label=label aria-hidden=hidden></i>
    }
}
