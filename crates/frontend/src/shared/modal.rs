use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal dialog (overlay + titled surface + close button).
///
/// Visibility is owned by the embedding page: render the modal inside a
/// `Show` driven by a local signal and flip the signal in `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    /// Called when the modal should close (X button, overlay click).
    on_close: Callback<()>,
    /// Extra style for the modal surface (width overrides and the like).
    #[prop(optional, into)]
    surface_style: String,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Only close when both press and release land on the overlay itself, so
    // selecting text inside the dialog and releasing outside does not
    // dismiss it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let deferred_close = move || {
        // Defer to the next tick: removing the overlay synchronously during
        // its own click dispatch trips Leptos event delegation.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            deferred_close();
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class="modal" style=surface_style on:click=stop_propagation>
                <div class="modal__header">
                    <h3 class="modal__title">{title}</h3>
                    <button
                        class="modal__close"
                        title="Close"
                        on:click=move |_| deferred_close()
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
