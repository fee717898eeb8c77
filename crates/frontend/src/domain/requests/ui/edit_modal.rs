use contracts::domain::requests::SpeakerRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::requests::context::use_requests;
use crate::shared::modal::Modal;

/// Edit dialog for one of the user's own requests. Only the reason is
/// editable; everything else is fixed once submitted.
#[component]
pub fn EditRequestModal(request: SpeakerRequest, on_close: Callback<()>) -> impl IntoView {
    let requests = use_requests();

    let id = request.id;
    let reason = RwSignal::new(request.reason.clone());
    let submitting = RwSignal::new(false);

    let handle_submit = move |_| {
        if submitting.get() || reason.get().trim().is_empty() {
            return;
        }
        submitting.set(true);
        spawn_local(async move {
            let result = requests.update_request(id, reason.get_untracked()).await;
            submitting.set(false);
            if result.is_ok() {
                on_close.run(());
            }
        });
    };

    view! {
        <Modal title="Edit Request" on_close=on_close>
            <div class="details-form">
                <div class="form-group">
                    <label>{"Speaker"}</label>
                    <p class="form-group__static">
                        {format!("{} by {}", request.speaker_name, request.manufacturer)}
                    </p>
                </div>

                <div class="form-group">
                    <label for="edit-request-reason">{"Reason"}</label>
                    <textarea
                        id="edit-request-reason"
                        rows="3"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || {
                        reason.get().trim().is_empty() || submitting.get()
                    })
                    on_click=handle_submit
                >
                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
            </div>
        </Modal>
    }
}
