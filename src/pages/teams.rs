//! Teams Page
//!
//! Scoreboard, own team card, and group membership management.

use leptos::*;

use crate::api;
use crate::components::loading::ListSkeleton;
use crate::components::ScoreboardTable;
use crate::state::{GlobalState, TeamInfo};

/// Teams page component
#[component]
pub fn Teams() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch scoreboard, team snapshot, and roster on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_scoreboard().await {
                Ok(entries) => {
                    state.scoreboard.set(entries);
                }
                Err(e) => {
                    // The scoreboard resets on failure rather than keeping a
                    // stale ranking
                    web_sys::console::error_1(
                        &format!("Failed to fetch scoreboard: {}", e).into(),
                    );
                    state.scoreboard.set(Vec::new());
                }
            }

            match api::fetch_team_info().await {
                Ok(info) => {
                    state.team.set(info);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch team info: {}", e).into());
                }
            }

            match api::fetch_team_members().await {
                Ok(members) => {
                    state.roster.set(members);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch roster: {}", e).into());
                }
            }

            state.loading.set(false);
        });
    });

    let loading = state.loading;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Teams"</h1>
                <p class="text-gray-400 mt-1">"Scoreboard and your team"</p>
            </div>

            // Scoreboard
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Scoreboard"</h2>
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=4 /> }.into_view()
                    } else {
                        view! { <ScoreboardTable /> }.into_view()
                    }
                }}
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                // Own team card
                <TeamCard />

                // Join or create
                <Membership />
            </div>
        </div>
    }
}

/// Own team details and leave control
#[component]
fn TeamCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let team = state.team;
    let roster = state.roster;
    let (leaving, set_leaving) = create_signal(false);

    let state_for_leave = state;
    let on_leave = move |_| {
        set_leaving.set(true);

        let state = state_for_leave.clone();
        spawn_local(async move {
            match api::leave_group().await {
                Ok(()) => {
                    state.show_success("Left group");
                    // The old snapshot no longer applies
                    state.team.set(TeamInfo::default());
                    state.roster.set(Vec::new());
                    state.tasks.set(Vec::new());
                }
                Err(e) => {
                    state.show_error(&format!("Failed to leave group: {}", e));
                }
            }
            set_leaving.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            <h2 class="text-xl font-semibold">"Your Team"</h2>

            {move || {
                let t = team.get();
                if t.code.is_empty() {
                    view! {
                        <p class="text-gray-400">"You are not in a team yet."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="space-y-3">
                            <div class="flex items-center justify-between">
                                <span class="text-gray-400">"Name"</span>
                                <span class="font-medium">{t.name}</span>
                            </div>
                            <div class="flex items-center justify-between">
                                <span class="text-gray-400">"Join code"</span>
                                <span class="font-mono bg-gray-700 px-2 py-1 rounded">{t.code}</span>
                            </div>
                            <div class="flex items-center justify-between">
                                <span class="text-gray-400">"Points pool"</span>
                                <span class="font-medium">{t.points}</span>
                            </div>
                            <div class="flex items-center justify-between">
                                <span class="text-gray-400">"Score"</span>
                                <span class="font-medium">{t.points_score}</span>
                            </div>
                        </div>
                    }.into_view()
                }
            }}

            // Roster
            <div>
                <h3 class="text-sm text-gray-400 mb-2">"Members"</h3>
                <div class="flex flex-wrap gap-2">
                    {move || {
                        let members = roster.get();
                        if members.is_empty() {
                            view! {
                                <span class="text-sm text-gray-500">"Nobody here"</span>
                            }.into_view()
                        } else {
                            members.into_iter().map(|m| view! {
                                <span class="bg-gray-700 px-3 py-1 rounded-full text-sm">
                                    {m.username}
                                </span>
                            }).collect_view()
                        }
                    }}
                </div>
            </div>

            <button
                on:click=on_leave
                disabled=move || leaving.get()
                class="px-4 py-2 bg-red-700 hover:bg-red-600 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if leaving.get() { "Leaving..." } else { "Leave Team" }}
            </button>
        </section>
    }
}

/// Join-by-code and create-group forms
#[component]
fn Membership() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (join_code, set_join_code) = create_signal(String::new());
    let (new_name, set_new_name) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);

    let refresh_team = |state: GlobalState| async move {
        match api::fetch_team_info().await {
            Ok(info) => state.team.set(info),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch team info: {}", e).into());
            }
        }
    };

    let state_for_join = state.clone();
    let on_join = move |_| {
        let code = join_code.get();
        if code.is_empty() {
            state_for_join.show_error("Enter a join code");
            return;
        }

        set_busy.set(true);

        let state = state_for_join.clone();
        spawn_local(async move {
            match api::join_group(&code).await {
                Ok(()) => {
                    state.show_success("Joined group");
                    set_join_code.set(String::new());
                    refresh_team(state.clone()).await;
                }
                Err(e) => {
                    state.show_error(&format!("Failed to join group: {}", e));
                }
            }
            set_busy.set(false);
        });
    };

    let state_for_create = state;
    let on_create = move |_| {
        let name = new_name.get();
        if name.is_empty() {
            state_for_create.show_error("Enter a group name");
            return;
        }

        set_busy.set(true);

        let state = state_for_create.clone();
        spawn_local(async move {
            match api::create_group(&name).await {
                Ok(created) => {
                    web_sys::console::log_1(&format!("Created group {}", created.id).into());
                    state.show_success(&format!("Group created, join code {}", created.code));
                    set_new_name.set(String::new());
                    refresh_team(state.clone()).await;
                }
                Err(e) => {
                    state.show_error(&format!("Failed to create group: {}", e));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-6">
            <h2 class="text-xl font-semibold">"Join or Create"</h2>

            // Join by code
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Join with a code"</label>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        placeholder="Code"
                        prop:value=move || join_code.get()
                        on:input=move |ev| set_join_code.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3 font-mono
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=on_join
                        disabled=move || busy.get()
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "Join"
                    </button>
                </div>
            </div>

            // Create a new group
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Create a new team"</label>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        placeholder="Team name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=on_create
                        disabled=move || busy.get()
                        class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Create"
                    </button>
                </div>
            </div>
        </section>
    }
}
