//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::board::Step;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Tasks belonging to the user's group
    pub tasks: RwSignal<Vec<Task>>,
    /// Snapshot of the user's group
    pub team: RwSignal<TeamInfo>,
    /// Members of the user's group
    pub roster: RwSignal<Vec<TeamMember>>,
    /// Scoreboard rows, in server order
    pub scoreboard: RwSignal<Vec<ScoreboardEntry>>,
    /// Username of the authenticated user, if any
    pub session_user: RwSignal<Option<String>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Task as returned by the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i32,
    pub group_id: i32,
    pub creator_user_id: i32,
    pub creator_username: String,
    pub creation_date: chrono::DateTime<chrono::Utc>,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub name: String,
    pub description: String,
    pub points_value: i32,
    pub step: i32,
    pub completed: bool,
}

impl Task {
    /// Workflow column this task sits in, if the ordinal is valid
    pub fn workflow_step(&self) -> Option<Step> {
        Step::from_ordinal(self.step)
    }
}

/// Group snapshot from `/group/info`
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub points_score: i32,
    #[serde(default)]
    pub meeting: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for TeamInfo {
    fn default() -> Self {
        Self {
            name: "No data".to_string(),
            code: String::new(),
            points: 0,
            points_score: 0,
            meeting: None,
        }
    }
}

/// Group member from `/group`
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TeamMember {
    pub id: i32,
    pub username: String,
}

/// Scoreboard row from `/scoreboard`
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ScoreboardEntry {
    pub id: i32,
    pub name: String,
    pub points_score: i32,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        tasks: create_rw_signal(Vec::new()),
        team: create_rw_signal(TeamInfo::default()),
        roster: create_rw_signal(Vec::new()),
        scoreboard: create_rw_signal(Vec::new()),
        session_user: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Tasks in a given workflow column
    pub fn tasks_in_step(&self, step: Step) -> Vec<Task> {
        self.tasks
            .get()
            .into_iter()
            .filter(|t| t.step == step.ordinal())
            .collect()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i32, step: i32) -> Task {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "groupId": 1,
            "creatorUserId": 7,
            "creatorUsername": "ada",
            "creationDate": "2025-05-01T09:00:00Z",
            "dueDate": "2025-05-08T17:00:00Z",
            "name": "write report",
            "description": "",
            "pointsValue": 5,
            "step": step,
            "completed": false
        }))
        .unwrap()
    }

    #[test]
    fn test_task_wire_format() {
        let t = task(3, 2);
        assert_eq!(t.id, 3);
        assert_eq!(t.creator_username, "ada");
        assert_eq!(t.points_value, 5);
        assert_eq!(t.workflow_step(), Some(Step::InProgress));
    }

    #[test]
    fn test_team_info_defaults() {
        let info = TeamInfo::default();
        assert_eq!(info.name, "No data");
        assert!(info.code.is_empty());
        assert!(info.meeting.is_none());
    }

    #[test]
    fn test_team_info_optional_meeting() {
        let info: TeamInfo = serde_json::from_value(serde_json::json!({
            "name": "rustaceans",
            "code": "XK29",
            "points": 12,
            "pointsScore": 40
        }))
        .unwrap();
        assert_eq!(info.points_score, 40);
        assert!(info.meeting.is_none());
    }

    #[test]
    fn test_scoreboard_wire_format() {
        // Scoreboard rows use snake_case, unlike the task payloads.
        let rows: Vec<ScoreboardEntry> = serde_json::from_value(serde_json::json!([
            {"id": 1, "name": "alpha", "points_score": 30},
            {"id": 2, "name": "beta", "points_score": 10}
        ]))
        .unwrap();
        assert_eq!(rows[0].points_score, 30);
        assert_eq!(rows[1].name, "beta");
    }
}
