//! Pages
//!
//! Top-level page components for each route.

pub mod calendar;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod teams;
pub mod user_info;

pub use calendar::Calendar;
pub use dashboard::Dashboard;
pub use login::Login;
pub use register::Register;
pub use teams::Teams;
pub use user_info::UserInfo;
