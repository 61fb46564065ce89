//! Calendar Page
//!
//! Team meeting display and scheduling.

use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::state::GlobalState;

/// Calendar page component
#[component]
pub fn Calendar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (loaded, set_loaded) = create_signal(false);

    // Refresh the group snapshot on mount; the meeting lives there
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_team_info().await {
                Ok(info) => {
                    state.team.set(info);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch team info: {}", e).into());
                }
            }
            set_loaded.set(true);
        });
    });

    let team = state.team;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Calendar"</h1>
                <p class="text-gray-400 mt-1">"Your team's next meeting"</p>
            </div>

            // Meeting display
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Next Meeting"</h2>

                {move || {
                    if !loaded.get() {
                        return view! { <Loading /> }.into_view();
                    }
                    match team.get().meeting {
                        Some(meeting) => {
                            let local = meeting.with_timezone(&chrono::Local);
                            view! {
                                <div class="flex items-center space-x-4">
                                    <span class="text-4xl">"📅"</span>
                                    <div>
                                        <div class="text-2xl font-bold">
                                            {local.format("%A, %B %e").to_string()}
                                        </div>
                                        <div class="text-gray-400">
                                            {local.format("%H:%M").to_string()}
                                        </div>
                                    </div>
                                </div>
                            }.into_view()
                        }
                        None => view! {
                            <p class="text-gray-400">"No meeting scheduled."</p>
                        }.into_view(),
                    }
                }}
            </section>

            // Scheduling form
            <MeetingForm />
        </div>
    }
}

/// Meeting scheduling form; the backend only accepts this from the group
/// creator
#[component]
fn MeetingForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (when, set_when) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let time = match parse_meeting_time(&when.get()) {
            Some(t) => t,
            None => {
                state.show_error("Pick a date and time");
                return;
            }
        };

        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            match api::set_meeting(time).await {
                Ok(()) => {
                    state.show_success("Meeting time updated");
                    match api::fetch_team_info().await {
                        Ok(info) => state.team.set(info),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch team info: {}", e).into(),
                            );
                        }
                    }
                }
                Err(e) => {
                    state.show_error(&format!("Failed to set meeting: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 max-w-xl">
            <h2 class="text-xl font-semibold mb-4">"Schedule a Meeting"</h2>

            <form on:submit=on_submit class="flex items-end space-x-3">
                <div class="flex-1">
                    <label class="block text-sm text-gray-400 mb-2">"Date and time"</label>
                    <input
                        type="datetime-local"
                        prop:value=move || when.get()
                        on:input=move |ev| set_when.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Saving..." } else { "Schedule" }}
                </button>
            </form>

            <p class="text-xs text-gray-500 mt-3">
                "Only the team creator can change the meeting time."
            </p>
        </section>
    }
}

/// Parse a `<input type="datetime-local">` value as local time in UTC
fn parse_meeting_time(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let naive = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()?;
    Some(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meeting_time() {
        let parsed = parse_meeting_time("2025-06-02T14:30").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-02T14:30:00+00:00");
    }

    #[test]
    fn test_parse_meeting_time_rejects_garbage() {
        assert!(parse_meeting_time("").is_none());
        assert!(parse_meeting_time("2025-06-02").is_none());
    }
}
