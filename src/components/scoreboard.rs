//! Scoreboard Component
//!
//! Ranked listing of all groups.

use leptos::*;

use crate::state::GlobalState;

/// Scoreboard table, displayed in server order
#[component]
pub fn ScoreboardTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let own_team = state.team;

    view! {
        <div class="overflow-hidden rounded-lg border border-gray-700">
            <table class="w-full text-left">
                <thead class="bg-gray-700 text-sm text-gray-300">
                    <tr>
                        <th class="px-4 py-3 w-16">"#"</th>
                        <th class="px-4 py-3">"Team"</th>
                        <th class="px-4 py-3 text-right">"Score"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let entries = state.scoreboard.get();
                        if entries.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="3" class="px-4 py-6 text-center text-gray-500">
                                        "No teams on the scoreboard yet"
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            entries.into_iter().enumerate().map(|(idx, entry)| {
                                let is_own = entry.name == own_team.get().name;
                                let row_class = if is_own {
                                    "bg-gray-700/50 text-white"
                                } else {
                                    "text-gray-300"
                                };
                                view! {
                                    <tr class=format!("border-t border-gray-700 {}", row_class)>
                                        <td class="px-4 py-3">{rank_label(idx)}</td>
                                        <td class="px-4 py-3">{entry.name}</td>
                                        <td class="px-4 py-3 text-right font-semibold">
                                            {entry.points_score}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Medal for the top three, plain rank otherwise
fn rank_label(idx: usize) -> String {
    match idx {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("{}", n + 1),
    }
}
