use leptos::prelude::*;
use leptos_router::components::A;

use super::context::use_session;

/// Component that requires authentication.
/// Shows a sign-in prompt if the visitor is anonymous.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! {
                <div class="guard-fallback">
                    <p>"Please sign in to view this page."</p>
                    <A href="/auth">"Go to sign in"</A>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

/// Component that requires admin privileges.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_admin()
            fallback=|| view! {
                <div class="guard-fallback">
                    <p>"Access denied. Admin privileges required."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
