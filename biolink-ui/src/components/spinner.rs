use leptos::{
    component,
    view,
    IntoView,
};

stylance::import_crate_style!(style, "src/components/spinner.module.scss");

#[component]
pub fn Spinner(#[prop(optional)] small: bool) -> impl IntoView {
    view! {
        <div class=style::spinner data-small=small role="status"></div>
    }
}
