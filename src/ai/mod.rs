pub mod client;
pub mod prompts;

// Public API exports
pub use client::{ModelConfig, OpenRouterClient, TextBackend, DEFAULT_MODEL};
pub use prompts::question_instruction;
