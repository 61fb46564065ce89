//! User Info Page
//!
//! Session details and API connection settings.

use leptos::*;

use crate::api;
use crate::state::GlobalState;

/// User info page component
#[component]
pub fn UserInfo() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Probe the session on mount
    create_effect(move |_| {
        let state = state.clone();
        spawn_local(async move {
            match api::validate_session().await {
                Ok(username) => {
                    state.session_user.set(Some(username));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Session check failed: {}", e).into());
                    state.session_user.set(None);
                }
            }
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Account"</h1>
                <p class="text-gray-400 mt-1">"Your session and connection settings"</p>
            </div>

            <SessionCard />
            <ApiSettings />
        </div>
    }
}

/// Current session details
#[component]
fn SessionCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let session_user = state.session_user;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Session"</h2>

            {move || {
                match session_user.get() {
                    Some(username) => view! {
                        <div class="flex items-center space-x-3">
                            <span class="w-2 h-2 bg-green-400 rounded-full" />
                            <span>
                                "Signed in as "
                                <span class="font-semibold">{username}</span>
                            </span>
                        </div>
                    }.into_view(),
                    None => view! {
                        <div class="flex items-center space-x-3">
                            <span class="w-2 h-2 bg-red-400 rounded-full" />
                            <span class="text-gray-400">"No active session"</span>
                        </div>
                    }.into_view(),
                }
            }}
        </section>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let url = api_url.get();
        api::set_api_base(&url);

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            // The session probe doubles as a connectivity check
            match api::validate_session().await {
                Ok(_) => {
                    set_test_result.set(Some(true));
                    state_clone.show_success("Connection successful!");
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state_clone.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state;
    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        state_for_save.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Execute API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}
