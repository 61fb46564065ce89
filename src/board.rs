//! Board Transitions
//!
//! Maps a drag-and-drop between workflow columns onto the single-step PATCH
//! calls the backend accepts. The backend only moves a task one column at a
//! time, so a drag across the board becomes a short walk of `"+1"`/`"-1"`
//! actions, applied in order and abandoned on the first failure.

use crate::api;
use crate::state::GlobalState;
use leptos::{SignalSet, SignalUpdate};

/// Workflow column of a task
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Todo,
    InProgress,
    Completed,
}

impl Step {
    /// Columns in board order
    pub const ALL: [Step; 3] = [Step::Todo, Step::InProgress, Step::Completed];

    /// Wire ordinal (1=todo, 2=in-progress, 3=completed)
    pub fn ordinal(self) -> i32 {
        match self {
            Step::Todo => 1,
            Step::InProgress => 2,
            Step::Completed => 3,
        }
    }

    pub fn from_ordinal(n: i32) -> Option<Step> {
        match n {
            1 => Some(Step::Todo),
            2 => Some(Step::InProgress),
            3 => Some(Step::Completed),
            _ => None,
        }
    }

    /// Column heading shown on the board
    pub fn title(self) -> &'static str {
        match self {
            Step::Todo => "To Do",
            Step::InProgress => "In Progress",
            Step::Completed => "Completed",
        }
    }
}

/// Direction of a single step move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepAction {
    Advance,
    Retreat,
}

impl StepAction {
    /// Wire value expected by `PATCH /task`
    pub fn as_str(self) -> &'static str {
        match self {
            StepAction::Advance => "+1",
            StepAction::Retreat => "-1",
        }
    }
}

/// Plan the single-step moves for a drag from `current` to `target`.
///
/// Dropping a task back onto its own column yields an empty plan. Otherwise
/// the plan holds exactly `|target - current|` copies of the same action,
/// one per column crossed.
pub fn plan_transition(current: Step, target: Step) -> Vec<StepAction> {
    let delta = target.ordinal() - current.ordinal();
    let action = if delta > 0 {
        StepAction::Advance
    } else {
        StepAction::Retreat
    };
    (0..delta.abs()).map(|_| action).collect()
}

/// Apply a drag by issuing one PATCH per planned step, stopping on the first
/// failure. Returns whether the task reached the target column.
pub async fn apply_drag(state: &GlobalState, task_id: i32, current: Step, target: Step) -> bool {
    for action in plan_transition(current, target) {
        match api::update_task_step(task_id, action).await {
            Ok(update) => {
                // Keep the local copy in sync while the walk is underway
                state.tasks.update(|tasks| {
                    if let Some(t) = tasks.iter_mut().find(|t| t.id == update.task_id) {
                        t.step = update.step;
                    }
                });
            }
            Err(e) => {
                state.show_error(&format!("Failed to move task: {}", e));
                // Resync with server truth after a partial walk
                refresh_board(state).await;
                return false;
            }
        }
    }

    refresh_board(state).await;
    true
}

/// Refetch the task list and group snapshot after a board mutation. Fetch
/// failures are logged and leave the previous state in place.
pub async fn refresh_board(state: &GlobalState) {
    match api::fetch_tasks().await {
        Ok(tasks) => state.tasks.set(tasks),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch tasks: {}", e).into());
        }
    }

    match api::fetch_team_info().await {
        Ok(info) => state.team.set(info),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch team info: {}", e).into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_column_is_noop() {
        for step in Step::ALL {
            assert!(plan_transition(step, step).is_empty());
        }
    }

    #[test]
    fn test_adjacent_moves() {
        assert_eq!(
            plan_transition(Step::Todo, Step::InProgress),
            vec![StepAction::Advance]
        );
        assert_eq!(
            plan_transition(Step::InProgress, Step::Completed),
            vec![StepAction::Advance]
        );
        assert_eq!(
            plan_transition(Step::InProgress, Step::Todo),
            vec![StepAction::Retreat]
        );
        assert_eq!(
            plan_transition(Step::Completed, Step::InProgress),
            vec![StepAction::Retreat]
        );
    }

    #[test]
    fn test_board_spanning_moves_traverse_middle_column() {
        assert_eq!(
            plan_transition(Step::Todo, Step::Completed),
            vec![StepAction::Advance, StepAction::Advance]
        );
        assert_eq!(
            plan_transition(Step::Completed, Step::Todo),
            vec![StepAction::Retreat, StepAction::Retreat]
        );
    }

    #[test]
    fn test_plan_length_matches_column_distance() {
        for current in Step::ALL {
            for target in Step::ALL {
                let plan = plan_transition(current, target);
                let distance = (target.ordinal() - current.ordinal()).unsigned_abs() as usize;
                assert_eq!(plan.len(), distance);
            }
        }
    }

    #[test]
    fn test_action_wire_values() {
        assert_eq!(StepAction::Advance.as_str(), "+1");
        assert_eq!(StepAction::Retreat.as_str(), "-1");
    }

    #[test]
    fn test_ordinal_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_ordinal(step.ordinal()), Some(step));
        }
        assert_eq!(Step::from_ordinal(0), None);
        assert_eq!(Step::from_ordinal(4), None);
    }
}
