//! Task Card Component
//!
//! A single draggable task on the board.

use leptos::*;

use crate::api;
use crate::board;
use crate::state::{GlobalState, Task};

/// Draggable task card with completion toggle and delete control
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let task_id = task.id;
    let completed = task.completed;
    let (dragging, set_dragging) = create_signal(false);

    let on_drag_start = move |ev: web_sys::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &task_id.to_string());
        }
        set_dragging.set(true);
    };

    let state_for_toggle = state.clone();
    let on_toggle = move |_| {
        let state = state_for_toggle.clone();
        spawn_local(async move {
            match api::toggle_completion(task_id, !completed).await {
                Ok(update) => {
                    // Patch the local copy; the refetch below settles the rest
                    state.tasks.update(|tasks| {
                        if let Some(t) = tasks.iter_mut().find(|t| t.id == update.task_id) {
                            t.completed = update.completed;
                        }
                    });
                    board::refresh_board(&state).await;
                }
                Err(e) => {
                    state.show_error(&format!("Failed to update completion: {}", e));
                }
            }
        });
    };

    let state_for_delete = state;
    let on_delete = move |_| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_task(task_id).await {
                Ok(()) => {
                    state.show_success("Task deleted");
                    board::refresh_board(&state).await;
                }
                Err(e) => {
                    state.show_error(&format!("Failed to delete task: {}", e));
                }
            }
        });
    };

    let due = task.due_date.format("%b %d").to_string();
    let name = task.name.clone();
    let description = task.description.clone();
    let creator = task.creator_username.clone();
    let points = task.points_value;

    view! {
        <div
            draggable="true"
            on:dragstart=on_drag_start
            on:dragend=move |_| set_dragging.set(false)
            class=move || {
                let base = "bg-gray-700 rounded-lg p-4 cursor-grab space-y-2";
                if dragging.get() {
                    format!("{} drag-ghost", base)
                } else {
                    base.to_string()
                }
            }
        >
            <div class="flex items-start justify-between">
                <div class="flex items-center space-x-2">
                    <input
                        type="checkbox"
                        checked=completed
                        on:change=on_toggle
                        class="w-4 h-4 accent-green-500"
                    />
                    <span class=move || {
                        if completed {
                            "font-medium line-through text-gray-400"
                        } else {
                            "font-medium"
                        }
                    }>
                        {name}
                    </span>
                </div>
                <button
                    on:click=on_delete
                    class="text-gray-400 hover:text-red-400 transition-colors"
                    title="Delete task"
                >
                    "×"
                </button>
            </div>

            {(!description.is_empty()).then(|| view! {
                <p class="text-sm text-gray-400">{description}</p>
            })}

            <div class="flex items-center justify-between text-xs text-gray-400">
                <span>{format!("{} pts", points)}</span>
                <span>{format!("due {}", due)}</span>
                <span>{creator}</span>
            </div>
        </div>
    }
}
