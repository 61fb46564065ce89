//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for board columns
#[component]
pub fn ColumnSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 animate-pulse">
            <div class="h-5 bg-gray-700 rounded w-1/3 mb-4" />
            <div class="space-y-3">
                <div class="h-20 bg-gray-700 rounded" />
                <div class="h-20 bg-gray-700 rounded" />
            </div>
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-700 rounded h-12" />
            }).collect_view()}
        </div>
    }
}
