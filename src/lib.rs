pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod quota;
pub mod state;
pub mod storage;
pub mod ui;

pub use api::{detect_platform, validate_url, Platform, SummarizerClient};
pub use app::router;
pub use config::Config;
pub use controller::{Controller, Mode, UiState};
pub use quota::RateLimiter;
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
