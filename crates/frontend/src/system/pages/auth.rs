use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::form_validation::{validate_email, validate_password, validate_required};
use crate::system::auth::context::use_session;

/// Combined sign-in / sign-up screen with a sliding panel toggle. Both
/// panels share the field state, like the page this replaces.
#[component]
pub fn SignInUpForm() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (sign_up_active, set_sign_up_active) = signal(false);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let (name_error, set_name_error) = signal::<Option<String>>(None);
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);

    let busy = move || session.busy.get();

    let validate = move |sign_up: bool| -> bool {
        let mut ok = true;

        match validate_email(&email.get_untracked()) {
            Ok(()) => set_email_error.set(None),
            Err(e) => {
                set_email_error.set(Some(e));
                ok = false;
            }
        }
        match validate_password(&password.get_untracked()) {
            Ok(()) => set_password_error.set(None),
            Err(e) => {
                set_password_error.set(Some(e));
                ok = false;
            }
        }
        if sign_up {
            match validate_required(&name.get_untracked(), "Name") {
                Ok(()) => set_name_error.set(None),
                Err(e) => {
                    set_name_error.set(Some(e));
                    ok = false;
                }
            }
        }

        ok
    };

    let handle_sign_in = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if !validate(false) {
                return;
            }
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = session
                    .login(email.get_untracked(), password.get_untracked())
                    .await;
                if result.is_ok() {
                    navigate("/", NavigateOptions::default());
                }
            });
        }
    };

    let handle_sign_up = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !validate(true) {
            return;
        }
        spawn_local(async move {
            let result = session
                .register(
                    name.get_untracked(),
                    email.get_untracked(),
                    password.get_untracked(),
                )
                .await;
            if result.is_ok() {
                // Account created: clear the form and land on sign-in.
                name.set(String::new());
                password.set(String::new());
                set_sign_up_active.set(false);
            }
        });
    };

    let field_error = |error: ReadSignal<Option<String>>| {
        move || error.get().map(|e| view! { <span class="form-error">{e}</span> })
    };

    view! {
        <div class="auth-page">
            <div
                class="auth-panels"
                class:auth-panels--sign-up=move || sign_up_active.get()
            >
                <div class="auth-panel auth-panel--sign-up">
                    <form on:submit=handle_sign_up>
                        <h1>{"Create Account"}</h1>

                        <input
                            type="text"
                            placeholder="Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        {field_error(name_error)}

                        <input
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        {field_error(email_error)}

                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        {field_error(password_error)}

                        <button type="submit" class="button button--primary" disabled=busy>
                            {move || if busy() { "Processing..." } else { "Sign Up" }}
                        </button>
                    </form>
                </div>

                <div class="auth-panel auth-panel--sign-in">
                    <form on:submit=handle_sign_in>
                        <h1>{"Sign in"}</h1>

                        <input
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        {field_error(email_error)}

                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        {field_error(password_error)}

                        <button type="submit" class="button button--primary" disabled=busy>
                            {move || if busy() { "Signing In..." } else { "Sign In" }}
                        </button>
                    </form>
                </div>

                <div class="auth-overlay">
                    <div class="auth-overlay__panel auth-overlay__panel--left">
                        <h1>{"Welcome Back!"}</h1>
                        <p>{"To keep connected with us please login with your personal info"}</p>
                        <button
                            class="button button--ghost"
                            disabled=busy
                            on:click=move |_| set_sign_up_active.set(false)
                        >
                            {"Sign In"}
                        </button>
                    </div>
                    <div class="auth-overlay__panel auth-overlay__panel--right">
                        <h1>{"Hello, Friend!"}</h1>
                        <p>{"Enter your personal details and start your journey with us"}</p>
                        <button
                            class="button button--ghost"
                            disabled=busy
                            on:click=move |_| set_sign_up_active.set(true)
                        >
                            {"Sign Up"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
