//! HTTP API Client
//!
//! Functions for communicating with the Execute REST API. Every call carries
//! the session cookie, issues a single request, and returns the backend's
//! error text on a non-2xx status. No retry, no backoff.

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

use crate::board::StepAction;
use crate::state::{ScoreboardEntry, Task, TeamInfo, TeamMember};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8437/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("execute_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("execute_api_url", url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    #[serde(default)]
    pub user_id: Option<i32>,
}

#[derive(Debug, serde::Deserialize)]
pub struct SessionResponse {
    pub message: String,
    pub user: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTask {
    pub id: i32,
    pub creator_username: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepUpdate {
    pub task_id: i32,
    pub step: i32,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionUpdate {
    pub task_id: i32,
    pub completed: bool,
}

#[derive(Debug, serde::Deserialize)]
pub struct CreatedGroup {
    pub id: i32,
    pub code: String,
}

/// Attach the session cookie to a request
fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

/// Pull the backend's plain-text error out of a failed response
async fn error_text(response: Response) -> String {
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => body.trim().to_string(),
        _ => format!("HTTP {}", response.status()),
    }
}

// ============ Auth ============

/// Register a new account
pub async fn register(username: &str, password: &str) -> Result<RegisterResponse, String> {
    #[derive(serde::Serialize)]
    struct Credentials {
        username: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = with_session(Request::post(&format!("{}/register", api_base)))
        .json(&Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Log in; the backend answers with a session cookie
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct Credentials {
        username: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = with_session(Request::post(&format!("{}/login", api_base)))
        .json(&Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    Ok(())
}

/// Check whether the session cookie is still valid; returns the username
pub async fn validate_session() -> Result<String, String> {
    let api_base = get_api_base();

    let response = with_session(Request::get(&format!("{}/validate", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    let session: SessionResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(session.user)
}

// ============ Tasks ============

/// Fetch the group's tasks
pub async fn fetch_tasks() -> Result<Vec<Task>, String> {
    let api_base = get_api_base();

    let response = with_session(Request::get(&format!("{}/task", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    // The backend encodes an empty task list as JSON null
    let tasks: Option<Vec<Task>> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(tasks.unwrap_or_default())
}

/// Create a task; its points are debited from the group pool server-side
pub async fn create_task(
    name: &str,
    description: &str,
    points_value: i32,
    due_date: chrono::DateTime<chrono::Utc>,
) -> Result<CreatedTask, String> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct CreateTaskRequest {
        due_date: chrono::DateTime<chrono::Utc>,
        name: String,
        description: String,
        points_value: i32,
        step: i32,
    }

    let api_base = get_api_base();

    let response = with_session(Request::post(&format!("{}/task", api_base)))
        .json(&CreateTaskRequest {
            due_date,
            name: name.to_string(),
            description: description.to_string(),
            points_value,
            // New tasks always start in the todo column
            step: crate::board::Step::Todo.ordinal(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a task by id
pub async fn delete_task(task_id: i32) -> Result<(), String> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct DeleteRequest {
        task_id: i32,
    }

    let api_base = get_api_base();

    let response = with_session(Request::delete(&format!("{}/task", api_base)))
        .json(&DeleteRequest { task_id })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    Ok(())
}

/// Move a task one column in the given direction
pub async fn update_task_step(task_id: i32, action: StepAction) -> Result<StepUpdate, String> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct StepUpdateRequest {
        task_id: i32,
        action: &'static str,
    }

    let api_base = get_api_base();

    let response = with_session(Request::patch(&format!("{}/task", api_base)))
        .json(&StepUpdateRequest {
            task_id,
            action: action.as_str(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Set a task's completion flag; scores the group when completing
pub async fn toggle_completion(task_id: i32, completed: bool) -> Result<CompletionUpdate, String> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct CompletionRequest {
        task_id: i32,
        completed: bool,
    }

    let api_base = get_api_base();

    let response = with_session(Request::patch(&format!("{}/task/completion", api_base)))
        .json(&CompletionRequest { task_id, completed })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Groups ============

/// Fetch the scoreboard: all groups ordered by score
pub async fn fetch_scoreboard() -> Result<Vec<ScoreboardEntry>, String> {
    let api_base = get_api_base();

    let response = with_session(Request::get(&format!("{}/scoreboard", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    let entries: Option<Vec<ScoreboardEntry>> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(entries.unwrap_or_default())
}

/// Fetch the members of the user's group
pub async fn fetch_team_members() -> Result<Vec<TeamMember>, String> {
    let api_base = get_api_base();

    let response = with_session(Request::get(&format!("{}/group", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    let members: Option<Vec<TeamMember>> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(members.unwrap_or_default())
}

/// Fetch the group snapshot (name, join code, points, meeting)
pub async fn fetch_team_info() -> Result<TeamInfo, String> {
    let api_base = get_api_base();

    let response = with_session(Request::get(&format!("{}/group/info", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new group; returns its id and join code
pub async fn create_group(name: &str) -> Result<CreatedGroup, String> {
    #[derive(serde::Serialize)]
    struct CreateGroupRequest {
        name: String,
    }

    let api_base = get_api_base();

    let response = with_session(Request::post(&format!("{}/group", api_base)))
        .json(&CreateGroupRequest {
            name: name.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Join a group by its invite code
pub async fn join_group(code: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct JoinRequest {
        code: String,
    }

    let api_base = get_api_base();

    let response = with_session(Request::post(&format!("{}/group/join", api_base)))
        .json(&JoinRequest {
            code: code.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    Ok(())
}

/// Leave the current group
pub async fn leave_group() -> Result<(), String> {
    let api_base = get_api_base();

    let response = with_session(Request::post(&format!("{}/group/leave", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    Ok(())
}

/// Set the group's meeting time (group creator only)
pub async fn set_meeting(time: chrono::DateTime<chrono::Utc>) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct MeetingRequest {
        time: chrono::DateTime<chrono::Utc>,
    }

    let api_base = get_api_base();

    let response = with_session(Request::post(&format!("{}/group/meeting", api_base)))
        .json(&MeetingRequest { time })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }

    Ok(())
}
