use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use crate::shared::form_validation::{
    validate_email, validate_new_password, validate_required,
};
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAuth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ProfileForm />
        </RequireAuth>
    }
}

#[component]
fn ProfileForm() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (editing, set_editing) = signal(false);

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let (form_error, set_form_error) = signal::<Option<String>>(None);

    // Mirror the signed-in user into the form, including after an update
    // merges new values into the session.
    Effect::new(move |_| {
        if let Some(user) = session.current_user() {
            username.set(user.username);
            email.set(user.email);
        }
    });

    let reset_passwords = move || {
        current_password.set(String::new());
        new_password.set(String::new());
        confirm_password.set(String::new());
    };

    let validate = move || -> bool {
        let checks = [
            validate_required(&username.get_untracked(), "Username"),
            validate_email(&email.get_untracked()),
            validate_required(&current_password.get_untracked(), "Current password"),
            validate_new_password(
                &new_password.get_untracked(),
                &confirm_password.get_untracked(),
            ),
        ];
        for check in checks {
            if let Err(e) = check {
                set_form_error.set(Some(e));
                return false;
            }
        }
        set_form_error.set(None);
        true
    };

    let handle_save = move |_| {
        if !validate() {
            return;
        }
        spawn_local(async move {
            let new_pw = new_password.get_untracked();
            let result = session
                .update_profile(
                    username.get_untracked(),
                    email.get_untracked(),
                    current_password.get_untracked(),
                    (!new_pw.is_empty()).then_some(new_pw),
                )
                .await;
            if result.is_ok() {
                set_editing.set(false);
                reset_passwords();
            }
        });
    };

    let handle_cancel = move |_| {
        set_editing.set(false);
        set_form_error.set(None);
        reset_passwords();
        if let Some(user) = session.current_user() {
            username.set(user.username);
            email.set(user.email);
        }
    };

    let handle_logout = {
        let navigate = navigate.clone();
        move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                session.logout().await;
                navigate("/auth", NavigateOptions::default());
            });
        }
    };

    let handle_delete = move |_| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(
                    "Delete your account? This cannot be undone.",
                )
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            if session.delete_profile().await.is_ok() {
                navigate("/auth", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="page profile-page">
            <div class="profile-card">
                <div class="profile-card__header">
                    <h2>{"Your Profile"}</h2>
                    <div class="profile-card__actions">
                        <Show
                            when=move || editing.get()
                            fallback=move || view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| set_editing.set(true)
                                >
                                    "Edit Profile"
                                </Button>
                            }
                        >
                            <Space>
                                <Button on_click=handle_cancel>"Cancel"</Button>
                                <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                                    "Save Changes"
                                </Button>
                            </Space>
                        </Show>
                    </div>
                </div>

                {move || form_error.get().map(|e| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="details-form">
                    <div class="form-group">
                        <label>{"Username"}</label>
                        <Show
                            when=move || editing.get()
                            fallback=move || view! {
                                <p class="form-group__static">{move || username.get()}</p>
                            }
                        >
                            <Input value=username />
                        </Show>
                    </div>

                    <div class="form-group">
                        <label>{"Email"}</label>
                        <Show
                            when=move || editing.get()
                            fallback=move || view! {
                                <p class="form-group__static">{move || email.get()}</p>
                            }
                        >
                            <Input value=email />
                        </Show>
                    </div>

                    <Show when=move || editing.get()>
                        <div class="form-group">
                            <label for="profile-current-password">
                                {"Current Password (required for changes)"}
                            </label>
                            <input
                                type="password"
                                id="profile-current-password"
                                prop:value=move || current_password.get()
                                on:input=move |ev| current_password.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="profile-new-password">{"New Password"}</label>
                            <input
                                type="password"
                                id="profile-new-password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="profile-confirm-password">{"Confirm New Password"}</label>
                            <input
                                type="password"
                                id="profile-confirm-password"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>
                </div>

                <div class="profile-card__footer">
                    <button class="button button--secondary" on:click=handle_logout>
                        {"Sign Out"}
                    </button>
                    <button class="button button--danger" on:click=handle_delete>
                        {"Delete Account"}
                    </button>
                </div>
            </div>
        </div>
    }
}
