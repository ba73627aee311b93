use biolink_api_client::Snapshot;
use biolink_api_protocol::{
    Link,
    Profile,
};
use biolink_util::{
    cancel,
    error::ResultExt,
};
use leptos::{
    component,
    create_rw_signal,
    on_cleanup,
    spawn_local,
    view,
    For,
    IntoView,
    RwSignal,
    SignalGet,
    SignalUpdate,
    SignalWith,
};
use leptos_meta::Title;

use super::Context;
use crate::{
    components::{
        avatar::Avatar,
        link_row::LinkRow,
        spinner::Spinner,
    },
    view_state::{
        AvatarImage,
        ViewState,
    },
};

stylance::import_crate_style!(style, "src/app/card.module.scss");

/// The bio page.
///
/// Loads profile and links once when mounted, and shows a spinner until
/// they're there.
#[component]
pub fn BioLinkCard() -> impl IntoView {
    let Context { client } = Context::get();

    let state = create_rw_signal(ViewState::Loading);
    let avatar = create_rw_signal(AvatarImage::default());

    // drop the result if we're unmounted before the load finishes.
    let (canceler, canceled) = cancel::new();
    on_cleanup(move || canceler.cancel());

    spawn_local(async move {
        tracing::debug!(api_url = %client.api_url(), "loading profile and links");
        if let Some(result) = client.load_until(canceled).await {
            let result = result.log_error("Error fetching data");
            state.update(|state| state.settle(result));
        }
    });

    let title = move || {
        state.with(|state| {
            state.snapshot().map(|snapshot| {
                let name = snapshot.profile.name.clone();
                view! { <Title text=name /> }
            })
        })
    };

    view! {
        {title}
        <Card state avatar />
    }
}

/// Whatever `state` currently calls for.
#[component]
fn Card(state: RwSignal<ViewState>, avatar: RwSignal<AvatarImage>) -> impl IntoView {
    move || {
        match state.get() {
            ViewState::Loading => view! { <Loading /> }.into_view(),
            ViewState::NotFound => view! { <NotFound /> }.into_view(),
            ViewState::Populated(snapshot) => view! { <Populated snapshot avatar /> }.into_view(),
        }
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class=style::page>
            <Spinner />
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class=style::page>
            <p class=style::not_found>"Profile not found"</p>
        </div>
    }
}

#[component]
fn Populated(snapshot: Snapshot, avatar: RwSignal<AvatarImage>) -> impl IntoView {
    let Snapshot { profile, links } = snapshot;
    tracing::debug!(?profile, "profile data");

    let Profile {
        name,
        description,
        profile_image,
    } = profile;
    let footer = format!("{name} Bio © 2025");
    let alt = name.clone();

    view! {
        <div class=style::page>
            <div class=style::column>
                <div class=style::profile>
                    <Avatar src=profile_image alt image=avatar />
                    <h1 class=style::name>{name}</h1>
                    <p class=style::description>{description}</p>
                </div>
                <div class=style::links>
                    <For
                        each=move || links.clone()
                        key=|link: &Link| link.id.clone()
                        children=|link: Link| view! { <LinkRow link /> }
                    />
                </div>
                <footer class=style::footer>
                    <p>{footer}</p>
                </footer>
            </div>
        </div>
    }
}
