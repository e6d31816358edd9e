pub mod ai;
pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod logger;
pub mod models;
pub mod pool;
pub mod selector;
pub mod ui;
pub mod utils;
pub mod worker;


// Re-exports for convenience
pub use ai::{ModelConfig, OpenRouterClient, TextBackend, DEFAULT_MODEL};
pub use app::{App, Flow};
pub use config::{AppConfig, StrategyKind};
pub use error::{ConfigError, SelectError};
pub use game::{CardState, GameSession};
pub use models::{AppState, Category, QuestionRequest, QuestionResponse};
pub use pool::QuestionPools;
pub use selector::{build_selector, GenerativeSelector, QuestionSelector, StaticSelector};
