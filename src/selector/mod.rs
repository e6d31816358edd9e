pub mod generative;
pub mod static_pool;

use crate::ai::OpenRouterClient;
use crate::config::{AppConfig, StrategyKind};
use crate::error::ConfigError;
use crate::models::Category;
use crate::pool::QuestionPools;
use async_trait::async_trait;
use std::sync::Arc;

pub use generative::{clean_generated_text, GenerativeSelector};
pub use static_pool::{index_for_roll, StaticSelector};

/// Produces one question per call. Implementations resolve every failure to
/// a fallback string, so `select` always returns displayable text.
#[async_trait]
pub trait QuestionSelector: Send + Sync {
    async fn select(&self, category: Category) -> String;

    /// Short human-readable name of where questions come from.
    fn describe(&self) -> String;
}

/// Creates the selector chosen by `config`. Called once at startup.
pub fn build_selector(config: &AppConfig) -> Result<Arc<dyn QuestionSelector>, ConfigError> {
    match config.strategy {
        StrategyKind::Static => {
            let pools = match &config.pool_dir {
                Some(dir) => QuestionPools::load_dir(dir)?,
                None => QuestionPools::builtin()?,
            };
            tracing::info!("using static question pools");
            Ok(Arc::new(StaticSelector::new(pools)))
        }
        StrategyKind::Generative => {
            let client = OpenRouterClient::new()?;
            tracing::info!(
                model = %config.model.model,
                temperature = ?config.model.temperature,
                max_tokens = ?config.model.max_tokens,
                timeout_secs = config.request_timeout.as_secs(),
                "using generative question backend"
            );
            Ok(Arc::new(GenerativeSelector::new(
                client,
                config.model.clone(),
                config.request_timeout,
            )))
        }
    }
}
