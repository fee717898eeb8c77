use contracts::domain::speakers::SpeakerSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::speakers::api;
use crate::system::auth::context::use_session;

const FEATURED_LIMIT: u32 = 3;

/// Landing page: hero, a featured strip pulled from the catalog, and the
/// brand blurb.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let (featured, set_featured) = signal::<Vec<SpeakerSummary>>(Vec::new());

    spawn_local(async move {
        let token = session.state.with_untracked(|s| s.token.clone());
        match api::fetch_speakers(token.as_deref(), Some(FEATURED_LIMIT)).await {
            Ok(items) => set_featured.set(items),
            // The hero still stands on its own; just log and move on.
            Err(e) => log::warn!("featured speakers fetch failed: {}", e),
        }
    });

    view! {
        <div class="home">
            <section class="home__hero">
                <div class="home__hero-content">
                    <h1>{"AUDIO ALCHEMY"}</h1>
                    <p>{"Transforming sound into pure emotion through precision engineering"}</p>
                    <A href="/speakers" attr:class="button button--primary home__hero-cta">
                        {"EXPLORE COLLECTIONS"}
                    </A>
                </div>
            </section>

            <section class="home__featured">
                <h2>{"CRAFTED FOR PERFECTION"}</h2>
                <div class="card-grid">
                    {move || featured.get().into_iter().map(|speaker| {
                        let id = speaker.id;
                        let image = speaker
                            .image_url
                            .clone()
                            .unwrap_or_else(|| "https://via.placeholder.com/300".to_string());
                        let price = speaker
                            .price
                            .map(|p| format!("${:.2}", p))
                            .unwrap_or_else(|| "Price not available".to_string());
                        view! {
                            <div class="home__featured-item">
                                <img src=image alt=speaker.model_name.clone()/>
                                <div class="home__featured-overlay">
                                    <h3>{speaker.model_name.clone()}</h3>
                                    <p>{price}</p>
                                    <A
                                        href=format!("/speakers/{}", id)
                                        attr:class="button button--primary"
                                    >
                                        {"DISCOVER"}
                                    </A>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>

            <section class="home__story">
                <h2>{"THE ALCHEMY OF SOUND"}</h2>
                <p class="home__quote">
                    {"\"We don't manufacture speakers - we forge instruments that reveal the hidden dimensions of music.\""}
                </p>
                <p class="home__attribution">{"— Master Audio Alchemist"}</p>
            </section>

            <section class="home__tech">
                <h2>{"OUR ALCHEMICAL SECRETS"}</h2>
                <div class="home__tech-grid">
                    {[
                        ("🧪", "PURE MATERIALS", "Only the finest acoustic materials"),
                        ("⚡", "POWER TRANSFORMATION", "Efficient energy conversion"),
                        ("🎚️", "PRECISION TUNING", "Hand-tuned by our masters"),
                        ("🌌", "SOUNDSTAGE", "Holographic imaging"),
                    ].into_iter().map(|(glyph, title, blurb)| view! {
                        <div class="home__tech-card">
                            <div class="home__tech-glyph">{glyph}</div>
                            <h3>{title}</h3>
                            <p>{blurb}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
