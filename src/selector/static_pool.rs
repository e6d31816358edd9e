use super::QuestionSelector;
use crate::error::SelectError;
use crate::models::Category;
use crate::pool::QuestionPools;
use async_trait::async_trait;

/// Maps a roll in `[0, 1)` onto `0..len`. `len` must be non-zero.
pub fn index_for_roll(roll: f64, len: usize) -> usize {
    let index = (roll * len as f64).floor() as usize;
    index.min(len - 1)
}

#[derive(Debug, Clone)]
pub struct StaticSelector {
    pools: QuestionPools,
}

impl StaticSelector {
    pub fn new(pools: QuestionPools) -> Self {
        Self { pools }
    }

    pub fn select_with_roll(&self, category: Category, roll: f64) -> Result<String, SelectError> {
        let pool = self.pools.get(category);
        if pool.is_empty() {
            return Err(SelectError::EmptyPool(category));
        }
        Ok(pool[index_for_roll(roll, pool.len())].clone())
    }
}

#[async_trait]
impl QuestionSelector for StaticSelector {
    async fn select(&self, category: Category) -> String {
        match self.select_with_roll(category, rand::random::<f64>()) {
            Ok(question) => question,
            Err(e) => {
                tracing::warn!(%category, error = %e, "static selection failed, using fallback");
                e.fallback_text().to_string()
            }
        }
    }

    fn describe(&self) -> String {
        "Daftar Pertanyaan".to_string()
    }
}
