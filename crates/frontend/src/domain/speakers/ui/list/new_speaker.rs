use contracts::domain::speakers::{CreateSpeakerDto, SpeakerSpecs};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::speakers::api;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

/// Admin dialog for adding a speaker to the catalog. Features are entered
/// comma-separated and split client-side.
#[component]
pub fn NewSpeakerModal(on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let model_name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let manufacturer_name = RwSignal::new(String::new());
    let manufacturer_logo_url = RwSignal::new(String::new());
    let category_name = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let features = RwSignal::new(String::new());
    let dimensions = RwSignal::new(String::new());
    let weight = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let optional = |value: String| {
        let trimmed = value.trim().to_string();
        (!trimmed.is_empty()).then_some(trimmed)
    };

    let handle_submit = move |_| {
        if submitting.get() {
            return;
        }

        let dto = CreateSpeakerDto {
            model_name: model_name.get_untracked().trim().to_string(),
            price: price.get_untracked().trim().parse::<f64>().ok(),
            manufacturer_name: manufacturer_name.get_untracked().trim().to_string(),
            manufacturer_logo_url: optional(manufacturer_logo_url.get_untracked()),
            category_name: category_name.get_untracked().trim().to_string(),
            image_url: optional(image_url.get_untracked()),
            specs: SpeakerSpecs {
                description: description.get_untracked(),
                features: features
                    .get_untracked()
                    .split(',')
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty())
                    .collect(),
                dimensions: dimensions.get_untracked(),
                weight: weight.get_untracked(),
            },
        };

        if let Err(message) = dto.validate() {
            toasts.error(message);
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            let token = session.state.with_untracked(|s| s.token.clone());
            let Some(token) = token else {
                submitting.set(false);
                return;
            };

            let result = api::create_speaker(&token, &dto).await;
            submitting.set(false);
            match result {
                Ok(msg) => {
                    toasts.success(msg.text().unwrap_or("Speaker added successfully!").to_string());
                    on_saved.run(());
                }
                Err(e) => toasts.error(e.message),
            }
        });
    };

    view! {
        <Modal
            title="Add New Speaker"
            on_close=on_close
            surface_style="max-width: min(800px, 95vw); width: min(800px, 95vw);"
        >
            <div class="details-form details-form--two-column">
                <div class="form-group">
                    <label>{"Model name"}</label>
                    <Input value=model_name placeholder="Enter model name"/>
                </div>
                <div class="form-group">
                    <label>{"Price"}</label>
                    <Input value=price placeholder="Enter price"/>
                </div>
                <div class="form-group">
                    <label>{"Manufacturer name"}</label>
                    <Input value=manufacturer_name placeholder="Enter manufacturer name"/>
                </div>
                <div class="form-group">
                    <label>{"Manufacturer logo URL"}</label>
                    <Input value=manufacturer_logo_url placeholder="Enter logo URL"/>
                </div>
                <div class="form-group">
                    <label>{"Category name"}</label>
                    <Input value=category_name placeholder="Enter category name"/>
                </div>
                <div class="form-group">
                    <label>{"Speaker image URL"}</label>
                    <Input value=image_url placeholder="Enter image URL"/>
                </div>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="speaker-description">{"Description"}</label>
                    <textarea
                        id="speaker-description"
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                        placeholder="Enter speaker description"
                    />
                </div>
                <div class="form-group">
                    <label>{"Features (comma separated)"}</label>
                    <Input value=features placeholder="Enter features separated by commas"/>
                </div>
            </div>

            <div class="details-form details-form--two-column">
                <div class="form-group">
                    <label>{"Dimensions"}</label>
                    <Input value=dimensions placeholder="Enter dimensions"/>
                </div>
                <div class="form-group">
                    <label>{"Weight"}</label>
                    <Input value=weight placeholder="Enter weight"/>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || submitting.get())
                    on_click=handle_submit
                >
                    {move || if submitting.get() { "Saving..." } else { "Add Speaker" }}
                </Button>
                <Button on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
            </div>
        </Modal>
    }
}
