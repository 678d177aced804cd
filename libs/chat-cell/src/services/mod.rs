pub mod chat;
pub mod gemini;

pub use chat::{build_prompt, ChatService, ChatSession, FALLBACK_REPLY};
pub use gemini::{GeminiClient, GenerativeModel};
