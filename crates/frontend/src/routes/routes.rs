use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::requests::ui::list::RequestsPage;
use crate::domain::speakers::ui::details::SpeakerDetailPage;
use crate::domain::speakers::ui::list::SpeakersPage;
use crate::layout::Shell;
use crate::pages::home::HomePage;
use crate::system::pages::auth::SignInUpForm;
use crate::system::pages::profile::ProfilePage;

/// URL → page table. Everything renders inside the shared shell.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! {
                    <div class="page">
                        <h1>{"Page not found"}</h1>
                    </div>
                }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/home") view=HomePage />
                    <Route path=path!("/speakers") view=SpeakersPage />
                    <Route path=path!("/speakers/:id") view=SpeakerDetailPage />
                    <Route path=path!("/requests") view=RequestsPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("/auth") view=SignInUpForm />
                </Routes>
            </Shell>
        </Router>
    }
}
