use agenda_core::UserStore;
use agenda_storage::SqliteUserStore;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    pub pool: Arc<SqlitePool>,
    pub store: Arc<SqliteUserStore>,
}

impl AppState {
    /// Create a new `AppState` with the given database file path
    ///
    /// This will:
    /// - Create/connect to the database
    /// - Run all migrations
    /// - Seed the example records on the first-ever run
    pub async fn new(db_path: PathBuf) -> Result<Self, String> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!(
                    "Failed to create data directory '{}': {}",
                    parent.display(),
                    e
                )
            })?;
        }

        // Convert the path to a SQLite connection string. On Windows,
        // convert backslashes to forward slashes for URL compatibility.
        let db_url = if cfg!(windows) {
            let path_str = db_path
                .to_str()
                .ok_or_else(|| "Database path contains invalid UTF-8".to_string())?
                .replace('\\', "/");
            format!("sqlite:///{}", path_str)
        } else {
            format!(
                "sqlite://{}",
                db_path
                    .to_str()
                    .ok_or_else(|| "Database path contains invalid UTF-8".to_string())?
            )
        };

        let pool = agenda_storage::create_pool(&db_url).await.map_err(|e| {
            format!(
                "Failed to create database pool at '{}': {}",
                db_path.display(),
                e
            )
        })?;

        agenda_storage::run_migrations(&pool)
            .await
            .map_err(|e| format!("Failed to run migrations: {}", e))?;

        let store = SqliteUserStore::new(pool.clone());

        // First-ever run (no persisted collection) writes the example records
        let seeded = store
            .ensure_seeded()
            .await
            .map_err(|e| format!("Failed to seed example records: {}", e))?;
        if seeded {
            tracing::info!("first run: example records written");
        }

        tracing::info!("database initialized at {}", db_path.display());

        Ok(Self {
            pool: Arc::new(pool),
            store: Arc::new(store),
        })
    }

    /// Create `AppState` from the `AGENDA_DB_PATH` environment variable,
    /// falling back to the given default path
    pub async fn from_env_or_default(default_path: PathBuf) -> Result<Self, String> {
        let db_path = std::env::var("AGENDA_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(default_path);

        Self::new(db_path).await
    }
}

/// Platform-specific location of the database file
///
/// Windows: `%APPDATA%\Agenda\`; macOS: `~/Library/Application Support/agenda/`;
/// elsewhere: `$XDG_CONFIG_HOME/agenda/` or `~/.config/agenda/`.
pub fn default_db_path() -> PathBuf {
    let app_data_dir = if cfg!(target_os = "windows") {
        let roaming = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(roaming).join("Agenda")
    } else if cfg!(target_os = "macos") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join("Library")
            .join("Application Support")
            .join("agenda")
    } else {
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config)
        } else {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        };
        config_dir.join("agenda")
    };

    app_data_dir.join("agenda.db")
}
