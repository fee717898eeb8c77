use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::shared::components::rating_stars::{RatingInput, RatingStars};
use crate::shared::date_utils::format_date;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

use super::view_model::SpeakerDetailsViewModel;

#[component]
pub fn SpeakerDetailPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let params = use_params_map();

    let vm = SpeakerDetailsViewModel::new();

    // Reload whenever the :id segment changes; navigating between related
    // speakers reuses this component instance.
    let speaker_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });
    Effect::new(move |_| match speaker_id.get() {
        Some(id) => vm.load(session, toasts, id),
        None => vm.missing.set(true),
    });

    let handle_review_submit = move |_| {
        if let Some(id) = speaker_id.get_untracked() {
            vm.submit_review(session, toasts, id);
        }
    };

    view! {
        <div class="page speaker-detail">
            <Show when=move || vm.loading.get()>
                <div class="page__spinner"><Spinner /></div>
            </Show>

            <Show when=move || vm.missing.get() && !vm.loading.get()>
                <div class="speaker-detail__missing">
                    <p>{"Speaker not found"}</p>
                    <A href="/speakers">{"Back to the collection"}</A>
                </div>
            </Show>

            {move || vm.speaker.get().map(|speaker| {
                let image = speaker
                    .image_url
                    .clone()
                    .unwrap_or_else(|| "https://via.placeholder.com/600".to_string());
                let price = speaker
                    .price
                    .map(|p| format!("${:.2}", p))
                    .unwrap_or_else(|| "Price not available".to_string());
                let rating = speaker.avg_rating;
                let review_count = speaker.reviews.len();

                view! {
                    <div class="speaker-detail__top">
                        <img class="speaker-detail__image" src=image alt=speaker.model_name.clone()/>
                        <div class="speaker-detail__summary">
                            <h1>{speaker.model_name.clone()}</h1>
                            <div class="speaker-detail__rating">
                                <RatingStars value=Signal::derive(move || rating) />
                                <span>{format!("({} reviews)", review_count)}</span>
                            </div>
                            <h3>{format!("by {}", speaker.manufacturer)}</h3>
                            <p class="speaker-detail__price">{price}</p>

                            <div class="speaker-detail__about">
                                <h3>{"About This Speaker"}</h3>
                                <p>{speaker.specs.description.clone()}</p>

                                <Show when={
                                    let has_features = !speaker.specs.features.is_empty();
                                    move || has_features
                                }>
                                    <h4>{"Key Features:"}</h4>
                                </Show>
                                <ul class="speaker-detail__features">
                                    {speaker.specs.features.iter().map(|feature| view! {
                                        <li>{feature.clone()}</li>
                                    }).collect_view()}
                                </ul>

                                <Show when={
                                    let has_dims = !speaker.specs.dimensions.is_empty()
                                        || !speaker.specs.weight.is_empty();
                                    move || has_dims
                                }>
                                    <p class="speaker-detail__dims">
                                        {format!(
                                            "Dimensions: {} · Weight: {}",
                                            speaker.specs.dimensions, speaker.specs.weight
                                        )}
                                    </p>
                                </Show>
                            </div>
                        </div>
                    </div>

                    <div class="speaker-detail__reviews">
                        <h2>{"Customer Reviews"}</h2>

                        <Show when=move || session.is_authenticated()>
                            <div class="review-form">
                                <h3>{"Write a Review"}</h3>
                                <RatingInput value=vm.rating />
                                <textarea
                                    rows="4"
                                    prop:value=move || vm.comment.get()
                                    on:input=move |ev| vm.comment.set(event_target_value(&ev))
                                    placeholder="Share your thoughts about this speaker..."
                                />
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || !vm.can_submit_review())
                                    on_click=handle_review_submit
                                >
                                    {move || if vm.submitting.get() { "Submitting..." } else { "Submit Review" }}
                                </Button>
                            </div>
                        </Show>

                        <Show when={
                            let has_reviews = review_count > 0;
                            move || !has_reviews
                        }>
                            <p>{"No reviews yet. Be the first to review!"}</p>
                        </Show>

                        <ul class="review-list">
                            {speaker.reviews.iter().map(|review| {
                                let stars = review.rating as f64;
                                view! {
                                    <li class="review-list__item">
                                        <div class="review-list__head">
                                            <span class="review-list__author">{review.username.clone()}</span>
                                            <RatingStars value=Signal::derive(move || stars) />
                                        </div>
                                        <p class="review-list__date">{format_date(&review.date)}</p>
                                        <p class="review-list__comment">{review.comment.clone()}</p>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    </div>

                    <Show when={
                        let has_related = !speaker.related_speakers.is_empty();
                        move || has_related
                    }>
                        <h2>{"Related Products"}</h2>
                    </Show>
                    <div class="card-grid card-grid--related">
                        {speaker.related_speakers.iter().map(|related| {
                            let id = related.id;
                            let image = related
                                .image_url
                                .clone()
                                .unwrap_or_else(|| "https://via.placeholder.com/300".to_string());
                            let price = related
                                .price
                                .map(|p| format!("${:.2}", p))
                                .unwrap_or_else(|| "Price not available".to_string());
                            let model_name = related.model_name.clone();
                            view! {
                                <A href=format!("/speakers/{}", id) attr:class="card-grid__item">
                                    <Card>
                                        <img
                                            class="speaker-card__image speaker-card__image--related"
                                            src=image
                                            alt=model_name.clone()
                                        />
                                        <div class="speaker-card__body">
                                            <h3 class="speaker-card__title">{model_name.clone()}</h3>
                                            <p class="speaker-card__price">{price}</p>
                                        </div>
                                    </Card>
                                </A>
                            }
                        }).collect_view()}
                    </div>
                }
            })}
        </div>
    }
}
