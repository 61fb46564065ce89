//! Execute Dashboard
//!
//! Frontend for the Execute team task tracker, built with Leptos (WASM).
//!
//! # Features
//!
//! - Three-column task board with drag-and-drop
//! - Group membership (create, join, leave)
//! - Scoreboard of all groups
//! - Meeting scheduling
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Execute REST backend over HTTP with
//! cookie-based sessions.

use leptos::*;

mod api;
mod app;
mod board;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
