mod card;

use biolink_api_client::Client;
use leptos::{
    component,
    view,
    DynAttrs,
    IntoView,
};
use leptos_meta::{
    provide_meta_context,
    Html,
};

use self::card::BioLinkCard;

#[derive(Clone, Debug)]
pub struct Context {
    pub client: Client,
}

impl Context {
    pub fn provide(client: Client) -> Self {
        let context = Self { client };
        leptos::provide_context(context.clone());
        context
    }

    pub fn get() -> Self {
        leptos::expect_context()
    }
}

#[component]
pub fn App(client: Client) -> impl IntoView {
    provide_meta_context();
    Context::provide(client);

    view! {
        <Html attr:data-bs-theme="dark" />
        <BioLinkCard />
    }
}
