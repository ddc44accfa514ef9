//! Agenda application shell
//!
//! Tauri 2 application exposing the two screens' commands to the webview:
//! the user list (load on focus, delete behind confirmation, routing to the
//! form) and the user form (validation, avatar selection, save). All state
//! and persistence live on the Rust side; the webview renders and navigates.

pub mod app_state;
pub mod user_form;
pub mod user_list;

use app_state::AppState;
use tauri::Manager;

/// Build and run the application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            let app_handle = app.handle().clone();

            // Open the database, run migrations, and seed the example
            // records before any screen can issue a command.
            tauri::async_runtime::block_on(async move {
                let state = AppState::from_env_or_default(app_state::default_db_path())
                    .await
                    .expect("Failed to initialize app state");
                app_handle.manage(state);
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // List screen
            user_list::get_users,
            user_list::delete_user,
            user_list::delete_prompt,
            user_list::edit_user_params,
            // Form screen
            user_form::avatar_options,
            user_form::save_user,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
