use super::QuestionSelector;
use crate::ai::{question_instruction, ModelConfig, TextBackend};
use crate::error::SelectError;
use crate::models::Category;
use crate::utils::truncate_string;
use async_trait::async_trait;
use regex::Regex;
use std::time::Duration;

lazy_static::lazy_static! {
    static ref LEADING_MARKER: Regex = Regex::new(r"^\s*(?:[-*•]+|\d+[.)])(?:\s+|$)").unwrap();
    static ref LABEL: Regex =
        Regex::new(r"(?i)^\s*\**\s*(?:pertanyaan|question)\s*\**\s*:\s*\**\s*").unwrap();
}

fn clean_line(line: &str) -> String {
    let line = LEADING_MARKER.replace(line, "");
    let line = LABEL.replace(&line, "");

    let mut text = line
        .trim()
        .trim_matches(|c| matches!(c, '"' | '\'' | '“' | '”' | '*' | '`'))
        .trim()
        .to_string();

    if let Some(pos) = text.find('?') {
        text.truncate(pos + 1);
    }

    text
}

/// Reduces a model reply to the bare question. Each line loses its list
/// marker, label and wrapping quotes; the first line holding a `?` wins,
/// otherwise the first non-empty one.
pub fn clean_generated_text(raw: &str) -> String {
    let lines: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.starts_with("```"))
        .map(clean_line)
        .filter(|l| !l.is_empty())
        .collect();

    lines
        .iter()
        .find(|l| l.contains('?'))
        .or_else(|| lines.first())
        .cloned()
        .unwrap_or_default()
}

pub struct GenerativeSelector<B> {
    backend: B,
    model: ModelConfig,
    timeout: Duration,
}

impl<B: TextBackend> GenerativeSelector<B> {
    pub fn new(backend: B, model: ModelConfig, timeout: Duration) -> Self {
        Self {
            backend,
            model,
            timeout,
        }
    }

    pub async fn try_select(&self, category: Category) -> Result<String, SelectError> {
        let instruction = question_instruction(category);
        tracing::debug!(%category, model = %self.model.model, "requesting generated question");

        let raw = tokio::time::timeout(
            self.timeout,
            self.backend.generate(&self.model, &instruction),
        )
        .await
        .map_err(|_| {
            SelectError::BackendUnavailable(format!("no reply within {:?}", self.timeout))
        })??;

        tracing::debug!(raw = %truncate_string(&raw, 160), "raw backend reply");

        let question = clean_generated_text(&raw);
        if question.is_empty() {
            return Err(SelectError::BackendEmptyResponse);
        }
        Ok(question)
    }
}

#[async_trait]
impl<B: TextBackend> QuestionSelector for GenerativeSelector<B> {
    async fn select(&self, category: Category) -> String {
        match self.try_select(category).await {
            Ok(question) => question,
            Err(e) => {
                tracing::warn!(%category, error = %e, "generative selection failed, using fallback");
                e.fallback_text().to_string()
            }
        }
    }

    fn describe(&self) -> String {
        format!("AI ({})", self.model.model)
    }
}
