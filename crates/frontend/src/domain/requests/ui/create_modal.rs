use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::requests::context::use_requests;
use crate::shared::modal::Modal;

/// "New request" dialog. Stays open when the submission fails so the user
/// can fix the input and retry.
#[component]
pub fn CreateRequestModal(on_close: Callback<()>) -> impl IntoView {
    let requests = use_requests();

    let speaker_name = RwSignal::new(String::new());
    let manufacturer = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let is_valid = move || {
        !speaker_name.get().trim().is_empty()
            && !manufacturer.get().trim().is_empty()
            && !reason.get().trim().is_empty()
    };

    let handle_submit = move |_| {
        if submitting.get() {
            return;
        }
        submitting.set(true);
        spawn_local(async move {
            let result = requests
                .create_request(
                    speaker_name.get_untracked(),
                    manufacturer.get_untracked(),
                    reason.get_untracked(),
                )
                .await;
            submitting.set(false);
            if result.is_ok() {
                on_close.run(());
            }
        });
    };

    view! {
        <Modal title="New Speaker Request" on_close=on_close>
            <div class="details-form">
                <div class="form-group">
                    <label for="request-speaker-name">{"Speaker name"}</label>
                    <Input value=speaker_name placeholder="Which speaker should we stock?"/>
                </div>

                <div class="form-group">
                    <label for="request-manufacturer">{"Manufacturer"}</label>
                    <Input value=manufacturer placeholder="Who makes it?"/>
                </div>

                <div class="form-group">
                    <label for="request-reason">{"Reason"}</label>
                    <textarea
                        id="request-reason"
                        rows="3"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                        placeholder="Why should we carry it?"
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !is_valid() || submitting.get())
                    on_click=handle_submit
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Request" }}
                </Button>
                <Button on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
            </div>
        </Modal>
    }
}
