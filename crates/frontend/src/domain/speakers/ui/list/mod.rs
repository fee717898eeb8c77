pub mod new_speaker;
pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::speakers::api;
use crate::shared::components::rating_stars::RatingStars;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAdmin;

use self::new_speaker::NewSpeakerModal;
use self::state::create_state;

#[component]
pub fn SpeakersPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (show_add_modal, set_show_add_modal) = signal(false);

    let fetch = move || {
        spawn_local(async move {
            set_loading.set(true);
            let token = session.state.with_untracked(|s| s.token.clone());
            let result = api::fetch_speakers(token.as_deref(), None).await;
            set_loading.set(false);
            match result {
                Ok(items) => state.update(|s| {
                    s.items = items;
                    s.is_loaded = true;
                }),
                Err(e) => {
                    log::warn!("speaker list fetch failed: {}", e);
                    toasts.error("We couldn't load the speaker list. Please refresh the page.");
                }
            }
        });
    };

    fetch();

    let visible = move || state.with(|s| s.visible());
    let filter = Signal::derive(move || state.with(|s| s.filter.clone()));
    let set_filter = Callback::new(move |value: String| {
        state.update(|s| s.filter = value);
    });

    view! {
        <div class="page speakers-page">
            <h1 class="page__title">{"Our Speaker Collection"}</h1>

            <div class="speakers-page__toolbar">
                <SearchInput
                    value=filter
                    on_change=set_filter
                    placeholder="Search speakers..."
                />
                <Show when=move || session.is_admin()>
                    <button
                        class="button button--primary"
                        on:click=move |_| set_show_add_modal.set(true)
                    >
                        {icon("plus")}
                        {"Add Speaker"}
                    </button>
                </Show>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__spinner"><Spinner /></div> }
            >
                <div class="card-grid">
                    {move || visible().into_iter().map(|speaker| {
                        let id = speaker.id;
                        let rating = speaker.avg_rating;
                        let image = speaker
                            .image_url
                            .clone()
                            .unwrap_or_else(|| "https://via.placeholder.com/300".to_string());
                        let price = speaker
                            .price
                            .map(|p| format!("${:.2}", p))
                            .unwrap_or_else(|| "Price not available".to_string());
                        view! {
                            <A href=format!("/speakers/{}", id) attr:class="card-grid__item">
                                <Card>
                                    <img
                                        class="speaker-card__image"
                                        src=image
                                        alt=speaker.model_name.clone()
                                    />
                                    <div class="speaker-card__body">
                                        <h3 class="speaker-card__title">{speaker.model_name.clone()}</h3>
                                        <p class="speaker-card__maker">{speaker.manufacturer.clone()}</p>
                                        <div class="speaker-card__rating">
                                            <RatingStars value=Signal::derive(move || rating) />
                                            <span>{format!("({:.1})", rating)}</span>
                                        </div>
                                        <p class="speaker-card__price">{price}</p>
                                        {speaker.short_description.clone().map(|d| view! {
                                            <p class="speaker-card__blurb">{d}</p>
                                        })}
                                    </div>
                                </Card>
                            </A>
                        }
                    }).collect_view()}
                </div>
            </Show>

            <Show when=move || show_add_modal.get()>
                <RequireAdmin>
                    <NewSpeakerModal
                        on_saved=Callback::new(move |_| {
                            set_show_add_modal.set(false);
                            fetch();
                        })
                        on_close=Callback::new(move |_| set_show_add_modal.set(false))
                    />
                </RequireAdmin>
            </Show>
        </div>
    }
}
