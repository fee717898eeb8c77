pub mod footer;
pub mod header;

use leptos::prelude::*;

use self::footer::Footer;
use self::header::Header;

/// Application shell: top navigation, routed content, status footer.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |                 Content                   |
/// +------------------------------------------+
/// |                 Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">{children()}</main>
            <Footer />
        </div>
    }
}
