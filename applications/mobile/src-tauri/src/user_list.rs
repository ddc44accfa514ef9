//! List screen Tauri commands
//!
//! The list loads the persisted collection on mount and on every focus-gain,
//! and owns the per-row actions: delete (behind a confirmation prompt) and
//! routing to the form screen with the record's fields as parameters.

use agenda_core::types::{UserId, UserRecord};
use agenda_core::UserStore;
use serde::{Deserialize, Serialize};
use tauri::State;

use crate::app_state::AppState;

/// Frontend representation of a user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    /// Render rule, decided once: "remote" | "glyph" | "default"
    pub avatar_kind: String,
}

impl From<UserRecord> for FrontendUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.to_string(),
            avatar_url: record.avatar.as_raw().to_string(),
            avatar_kind: record.avatar.kind().as_str().to_string(),
            name: record.name,
            email: record.email,
        }
    }
}

/// Confirmation dialog content for the destructive delete action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Build the confirmation dialog for deleting the named record
pub fn delete_prompt_for(name: &str) -> DeletePrompt {
    DeletePrompt {
        title: "Confirmar Exclusão".to_string(),
        message: format!("Deseja realmente excluir {}?", name),
        confirm_label: "Excluir".to_string(),
        cancel_label: "Cancelar".to_string(),
    }
}

/// Route parameters passed to the form screen (all string-valued)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRouteParams {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub is_editing: String,
}

/// Build the form route parameters for editing an existing record
pub fn form_route_params(record: &UserRecord) -> FormRouteParams {
    FormRouteParams {
        id: record.id.to_string(),
        name: record.name.clone(),
        email: record.email.clone(),
        avatar_url: record.avatar.as_raw().to_string(),
        is_editing: "true".to_string(),
    }
}

/// Remove one record by id and persist the remaining collection.
///
/// The mutation is the usual load-all / filter / save-all; deleting an
/// unknown id rewrites the collection unchanged.
pub async fn remove_user(
    store: &dyn UserStore,
    target: &UserId,
) -> agenda_core::Result<Vec<UserRecord>> {
    let users = store.load_all().await?;
    let remaining: Vec<UserRecord> = users.into_iter().filter(|u| &u.id != target).collect();

    store.save_all(&remaining).await?;
    Ok(remaining)
}

/// Load the full collection for display; the webview calls this on mount
/// and on every focus-gain. On a read failure the screen keeps whatever it
/// was already showing.
#[tauri::command]
pub async fn get_users(state: State<'_, AppState>) -> Result<Vec<FrontendUser>, String> {
    let users = state.store.load_all().await.map_err(|e| {
        tracing::warn!("failed to load users: {e}");
        format!("Failed to load users: {}", e)
    })?;

    Ok(users.into_iter().map(FrontendUser::from).collect())
}

/// Delete a record after the confirmation prompt was accepted.
/// Returns the updated list so the screen refreshes immediately.
#[tauri::command]
pub async fn delete_user(
    id: String,
    state: State<'_, AppState>,
) -> Result<Vec<FrontendUser>, String> {
    let target = UserId::new(id);

    let remaining = remove_user(state.store.as_ref(), &target)
        .await
        .map_err(|e| {
            tracing::warn!("failed to delete user {target}: {e}");
            format!("Failed to delete user: {}", e)
        })?;

    Ok(remaining.into_iter().map(FrontendUser::from).collect())
}

/// Confirmation dialog for the delete action on the named record
#[tauri::command]
pub fn delete_prompt(name: String) -> DeletePrompt {
    delete_prompt_for(&name)
}

/// Route parameters for editing an existing record; the create path pushes
/// the form route with no parameters instead
#[tauri::command]
pub async fn edit_user_params(
    id: String,
    state: State<'_, AppState>,
) -> Result<FormRouteParams, String> {
    let target = UserId::new(id);

    let users = state
        .store
        .load_all()
        .await
        .map_err(|e| format!("Failed to load users: {}", e))?;

    users
        .iter()
        .find(|u| u.id == target)
        .map(form_route_params)
        .ok_or_else(|| {
            agenda_core::AgendaError::not_found("User", target.to_string()).to_string()
        })
}
