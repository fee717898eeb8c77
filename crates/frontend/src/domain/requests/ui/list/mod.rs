use contracts::domain::requests::{RequestStatus, SpeakerRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::requests::context::use_requests;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAuth;

use super::create_modal::CreateRequestModal;
use super::edit_modal::EditRequestModal;

fn status_badge(status: RequestStatus) -> impl IntoView {
    let color = match status {
        RequestStatus::Approved => BadgeColor::Success,
        RequestStatus::Rejected => BadgeColor::Danger,
        RequestStatus::Pending => BadgeColor::Warning,
    };
    view! {
        <Badge appearance=BadgeAppearance::Filled color=color>
            {status.as_str().to_uppercase()}
        </Badge>
    }
}

#[component]
pub fn RequestsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <RequestsTable />
        </RequireAuth>
    }
}

#[component]
fn RequestsTable() -> impl IntoView {
    let session = use_session();
    let requests = use_requests();

    let (show_create, set_show_create) = signal(false);
    let (editing, set_editing) = signal::<Option<SpeakerRequest>>(None);

    let items = move || requests.store.with(|s| s.items().to_vec());
    let is_admin = move || session.is_admin();
    let my_id = move || session.current_user().map(|u| u.id);

    let handle_status = move |id: i64, status: RequestStatus| {
        spawn_local(async move {
            let _ = requests.update_request_status(id, status).await;
        });
    };

    let handle_delete = move |id: i64, own: bool| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this request?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            if own {
                let _ = requests.delete_own_request(id).await;
            } else {
                let _ = requests.delete_request(id).await;
            }
        });
    };

    view! {
        <div class="page requests-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {move || if is_admin() { "All Requests" } else { "My Requests" }}
                    </h1>
                </div>
                <div class="header__actions">
                    <Show when=move || !is_admin()>
                        <button
                            class="button button--primary"
                            on:click=move |_| set_show_create.set(true)
                        >
                            {icon("plus")}
                            {"New Request"}
                        </button>
                    </Show>
                    <button class="button button--secondary" on:click=move |_| requests.refresh()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || requests.error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || requests.loading.get()>
                <div class="page__spinner"><Spinner /></div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Speaker"}</th>
                            <th class="table__header-cell">{"Manufacturer"}</th>
                            <th class="table__header-cell">{"Reason"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Date"}</th>
                            <Show when=is_admin>
                                <th class="table__header-cell">{"User"}</th>
                            </Show>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items().into_iter().map(|row| {
                            let id = row.id;
                            let status = row.status;
                            let own = my_id() == Some(row.user_id);
                            let row_for_edit = StoredValue::new(row.clone());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.speaker_name.clone()}</td>
                                    <td class="table__cell">{row.manufacturer.clone()}</td>
                                    <td class="table__cell">{row.reason.clone()}</td>
                                    <td class="table__cell">{status_badge(status)}</td>
                                    <td class="table__cell">{format_date(&row.request_date)}</td>
                                    <Show when=is_admin>
                                        <td class="table__cell">{format!("User {}", row.user_id)}</td>
                                    </Show>
                                    <td class="table__cell table__cell--actions">
                                        <Show when=is_admin>
                                            <Space>
                                                <Button
                                                    appearance=ButtonAppearance::Primary
                                                    disabled=Signal::derive(move || status == RequestStatus::Approved)
                                                    on_click=move |_| handle_status(id, RequestStatus::Approved)
                                                >
                                                    "Approve"
                                                </Button>
                                                <Button
                                                    disabled=Signal::derive(move || status == RequestStatus::Rejected)
                                                    on_click=move |_| handle_status(id, RequestStatus::Rejected)
                                                >
                                                    "Reject"
                                                </Button>
                                                <Button on_click=move |_| handle_delete(id, false)>
                                                    "Delete"
                                                </Button>
                                            </Space>
                                        </Show>
                                        <Show when=move || own && !is_admin()>
                                            <Space>
                                                <Button on_click=move |_| set_editing.set(Some(row_for_edit.get_value()))>
                                                    "Edit"
                                                </Button>
                                                <Button on_click=move |_| handle_delete(id, true)>
                                                    "Delete"
                                                </Button>
                                            </Space>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                {move || items().is_empty().then(|| view! {
                    <p class="table__empty">{"No requests yet."}</p>
                })}
            </div>

            <Show when=move || show_create.get()>
                <CreateRequestModal on_close=Callback::new(move |_| set_show_create.set(false)) />
            </Show>

            {move || editing.get().map(|req| view! {
                <EditRequestModal
                    request=req
                    on_close=Callback::new(move |_| set_editing.set(None))
                />
            })}
        </div>
    }
}
