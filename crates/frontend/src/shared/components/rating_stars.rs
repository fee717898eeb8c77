use leptos::prelude::*;

/// Read-only star row for an average rating. Renders five stars, filling
/// them by the rounded half-step of `value`.
#[component]
pub fn RatingStars(#[prop(into)] value: Signal<f64>) -> impl IntoView {
    view! {
        <span class="rating-stars" aria-hidden="true">
            {move || {
                // Round to half-steps: 4.3 -> 4.5 stars shows as 4 full + 1 half.
                let half_steps = (value.get() * 2.0).round() as i32;
                (1..=5)
                    .map(|slot| {
                        let filled = half_steps - (slot - 1) * 2;
                        let class = if filled >= 2 {
                            "rating-stars__star rating-stars__star--full"
                        } else if filled == 1 {
                            "rating-stars__star rating-stars__star--half"
                        } else {
                            "rating-stars__star"
                        };
                        view! { <span class=class>"★"</span> }
                    })
                    .collect_view()
            }}
        </span>
    }
}

/// Clickable 1-5 star input for the review form. Zero means "not rated
/// yet"; clicking the current value keeps it (there is no way back to zero,
/// matching the usual rating widgets).
#[component]
pub fn RatingInput(value: RwSignal<u8>) -> impl IntoView {
    view! {
        <span class="rating-input" role="radiogroup" aria-label="Rating">
            {(1..=5u8)
                .map(|slot| {
                    let class = move || {
                        if value.get() >= slot {
                            "rating-input__star rating-input__star--active"
                        } else {
                            "rating-input__star"
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            on:click=move |_| value.set(slot)
                        >
                            "★"
                        </button>
                    }
                })
                .collect_view()}
        </span>
    }
}
