use leptos::prelude::*;

use crate::domain::requests::context::RequestsProvider;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toasts sit above everything: both context providers report through
    // them.
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <RequestsProvider>
                <ToastHost />
                <AppRoutes />
            </RequestsProvider>
        </SessionProvider>
    }
}
