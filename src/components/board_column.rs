//! Board Column Component
//!
//! One workflow column of the task board, acting as a drop target.

use leptos::*;

use crate::board::{self, Step};
use crate::components::TaskCard;
use crate::state::GlobalState;

/// A workflow column listing its tasks and accepting drops
#[component]
pub fn BoardColumn(step: Step) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (drop_hover, set_drop_hover) = create_signal(false);

    let on_drag_over = move |ev: web_sys::DragEvent| {
        // Required for the browser to fire the drop event
        ev.prevent_default();
        set_drop_hover.set(true);
    };

    let state_for_drop = state.clone();
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drop_hover.set(false);

        let raw = match ev.data_transfer() {
            Some(dt) => dt.get_data("text/plain").unwrap_or_default(),
            None => return,
        };
        let task_id = match raw.parse::<i32>() {
            Ok(id) => id,
            Err(_) => return,
        };

        // Look up the task's current column before walking it to the target
        let current = state_for_drop
            .tasks
            .get_untracked()
            .iter()
            .find(|t| t.id == task_id)
            .and_then(|t| t.workflow_step());

        if let Some(current) = current {
            let state = state_for_drop.clone();
            spawn_local(async move {
                board::apply_drag(&state, task_id, current, step).await;
            });
        }
    };

    let state_for_count = state.clone();
    let state_for_list = state;

    view! {
        <div
            on:dragover=on_drag_over
            on:dragleave=move |_| set_drop_hover.set(false)
            on:drop=on_drop
            class=move || {
                let base = "bg-gray-800 rounded-xl p-4 min-h-[16rem] flex flex-col";
                if drop_hover.get() {
                    format!("{} drop-active", base)
                } else {
                    base.to_string()
                }
            }
        >
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold">{step.title()}</h2>
                <span class="text-sm text-gray-400">
                    {move || state_for_count.tasks_in_step(step).len()}
                </span>
            </div>

            <div class="space-y-3 flex-1">
                {move || {
                    let tasks = state_for_list.tasks_in_step(step);
                    if tasks.is_empty() {
                        view! {
                            <p class="text-sm text-gray-500 text-center py-6">"No tasks"</p>
                        }.into_view()
                    } else {
                        tasks.into_iter().map(|task| view! {
                            <TaskCard task=task />
                        }).collect_view()
                    }
                }}
            </div>
        </div>
    }
}
