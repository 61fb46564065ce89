//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod board_column;
pub mod loading;
pub mod nav;
pub mod scoreboard;
pub mod task_card;
pub mod toast;

pub use board_column::BoardColumn;
pub use loading::Loading;
pub use nav::Nav;
pub use scoreboard::ScoreboardTable;
pub use task_card::TaskCard;
pub use toast::Toast;
