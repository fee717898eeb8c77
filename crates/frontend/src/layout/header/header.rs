use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">
                {icon("speaker")}
                <span>{"Audio Alchemy"}</span>
            </A>

            <nav class="navbar__links">
                <A href="/">{"Home"}</A>
                <A href="/speakers">{"Speakers"}</A>
                <Show when=move || session.is_authenticated()>
                    <A href="/requests">{"Requests"}</A>
                </Show>
            </nav>

            <div class="navbar__session">
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| view! {
                        <A href="/auth" attr:class="button button--primary">{"Sign In"}</A>
                    }
                >
                    <SessionControls />
                </Show>
            </div>
        </header>
    }
}

/// Username link plus the sign-out button. Split out so the logout handler
/// (which navigates) lives in its own component scope.
#[component]
fn SessionControls() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let handle_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            session.logout().await;
            navigate("/auth", NavigateOptions::default());
        });
    };

    view! {
        <A href="/profile" attr:class="navbar__user">
            {icon("user")}
            <span>
                {move || session.current_user().map(|u| u.username).unwrap_or_default()}
            </span>
        </A>
        <button
            class="button button--secondary navbar__logout"
            title="Sign out"
            on:click=handle_logout
        >
            {icon("logout")}
        </button>
    }
}
