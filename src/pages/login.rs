//! Login Page
//!
//! Username/password form; a successful login stores the session cookie and
//! navigates to the dashboard.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            state.show_error("Username and password are required");
            return;
        }

        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(()) => {
                    state.session_user.set(Some(user));
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    state.show_error(&format!("Login failed: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-[70vh]">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold">"Execute"</h1>
                    <p class="text-gray-400 mt-1">"Sign in to your team board"</p>
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
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors flex items-center justify-center space-x-2"
                    >
                        {move || if submitting.get() {
                            view! {
                                <div class="loading-spinner w-5 h-5" />
                                <span>"Signing in..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Sign In"</span>
                            }.into_view()
                        }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-400">
                    "No account yet? "
                    <A href="/register" class="text-primary-400 hover:underline">
                        "Register"
                    </A>
                </p>
            </div>
        </div>
    }
}
