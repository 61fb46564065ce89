//! Registration Page
//!
//! Account creation form; a successful registration navigates back to the
//! login screen.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::GlobalState;

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();

        if user.is_empty() {
            state.show_error("Username is required");
            return;
        }
        // The backend enforces the same minimum
        if pass.len() < 8 {
            state.show_error("Password must be at least 8 characters long");
            return;
        }
        if pass != confirm.get() {
            state.show_error("Passwords do not match");
            return;
        }

        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&user, &pass).await {
                Ok(created) => {
                    if let Some(id) = created.user_id {
                        web_sys::console::log_1(&format!("Registered user {}", id).into());
                    }
                    state.show_success("Account created, you can sign in now");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    state.show_error(&format!("Registration failed: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-[70vh]">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold">"Create Account"</h1>
                    <p class="text-gray-400 mt-1">"Join Execute and start tracking tasks"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <p class="text-xs text-gray-500 mt-1">"At least 8 characters"</p>
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Confirm Password"</label>
                        <input
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || if submitting.get() { "Creating..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-400">
                    "Already registered? "
                    <A href="/" class="text-primary-400 hover:underline">
                        "Sign in"
                    </A>
                </p>
            </div>
        </div>
    }
}
