//! State Management
//!
//! Global application state shared through Leptos context.

pub mod global;

pub use global::{provide_global_state, GlobalState, ScoreboardEntry, Task, TeamInfo, TeamMember};
