//! Dashboard Page
//!
//! The task board: three workflow columns, a new-task form, and the group's
//! points pool.

use leptos::*;

use crate::api;
use crate::board::{self, Step};
use crate::components::loading::ColumnSkeleton;
use crate::components::BoardColumn;
use crate::state::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch initial data on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            board::refresh_board(&state).await;
            state.loading.set(false);
        });
    });

    let team = state.team;
    let loading = state.loading;

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || {
                            let t = team.get();
                            if t.code.is_empty() {
                                "Join a team to see its board".to_string()
                            } else {
                                t.name
                            }
                        }}
                    </p>
                </div>

                // Points pool
                <div class="text-right">
                    <div class="text-sm text-gray-400">"Points pool"</div>
                    <div class="text-2xl font-bold text-primary-400">
                        {move || team.get().points}
                    </div>
                </div>
            </div>

            // Task board
            {move || {
                if loading.get() {
                    view! {
                        <div class="grid md:grid-cols-3 gap-6">
                            <ColumnSkeleton />
                            <ColumnSkeleton />
                            <ColumnSkeleton />
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-3 gap-6">
                            {Step::ALL.into_iter().map(|step| view! {
                                <BoardColumn step=step />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}

            // New task form
            <section class="bg-gray-800 rounded-xl p-6 max-w-2xl">
                <h2 class="text-xl font-semibold mb-4">"New Task"</h2>
                <TaskEntry />
            </section>
        </div>
    }
}

/// Form for creating a task
#[component]
fn TaskEntry() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (points, set_points) = create_signal(1i32);
    let (due, set_due) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let task_name = name.get();
        if task_name.is_empty() {
            state.show_error("Task name is required");
            return;
        }

        let due_date = match parse_due_date(&due.get()) {
            Some(d) => d,
            None => {
                state.show_error("A due date is required");
                return;
            }
        };

        set_submitting.set(true);

        let task_description = description.get();
        let points_value = points.get();
        let state = state.clone();
        spawn_local(async move {
            match api::create_task(&task_name, &task_description, points_value, due_date).await {
                Ok(created) => {
                    state.show_success(&format!("Task \"{}\" created", task_name));
                    web_sys::console::log_1(
                        &format!("Created task {} by {}", created.id, created.creator_username)
                            .into(),
                    );
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_points.set(1);
                    board::refresh_board(&state).await;
                }
                Err(e) => {
                    state.show_error(&format!("Failed to create task: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Due date"</label>
                    <input
                        type="date"
                        prop:value=move || due.get()
                        on:input=move |ev| set_due.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Description (optional)"</label>
                <input
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    "Points: "
                    <span class="text-white font-medium">{move || points.get()}</span>
                </label>
                <input
                    type="range"
                    min="1"
                    max="20"
                    step="1"
                    prop:value=move || points.get().to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse() {
                            set_points.set(v);
                        }
                    }
                    class="w-full"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors"
            >
                {move || if submitting.get() { "Creating..." } else { "Create Task" }}
            </button>
        </form>
    }
}

/// Parse a `<input type="date">` value into an end-of-day UTC timestamp
fn parse_due_date(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let date = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(23, 59, 59)?.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_due_date() {
        let parsed = parse_due_date("2025-06-01").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-01T23:59:59+00:00");
    }

    #[test]
    fn test_parse_due_date_rejects_garbage() {
        assert!(parse_due_date("").is_none());
        assert!(parse_due_date("tomorrow").is_none());
    }
}
