use crate::db::DbPool;
use crate::task::TaskService;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub task_service: TaskService,
}

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("PORT must be a number"),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:tasks.db?mode=rwc".to_string()),
        }
    }
}
