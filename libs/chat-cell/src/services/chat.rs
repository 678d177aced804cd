use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use shared_models::ui::{Button, ButtonSize};
use shared_utils::SessionRegistry;

use crate::error::ChatError;
use crate::models::{ChatMessage, ChatView};
use crate::services::gemini::GenerativeModel;

pub const FALLBACK_REPLY: &str = "I apologize, but I encountered an error. Please try again.";

pub fn build_prompt(message: &str) -> String {
    format!(
        "You are Minmo, a friendly healthcare assistant. Keep your responses focused on healthcare and limited to 50-100 words. Current user message: {}",
        message
    )
}

/// Chat widget state for one page.
#[derive(Debug, Default)]
pub struct ChatSession {
    open: bool,
    transcript: Vec<ChatMessage>,
    pending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Appends the visitor's message and returns the trimmed text to answer.
    pub fn begin_send(&mut self, input: &str) -> Result<String, ChatError> {
        let message = input.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.pending {
            return Err(ChatError::ReplyPending);
        }

        self.transcript.push(ChatMessage::user(message));
        self.pending = true;
        Ok(message.to_string())
    }

    pub fn finish_send(&mut self, reply: anyhow::Result<String>) {
        let content = match reply {
            Ok(text) => text,
            Err(e) => {
                warn!("Chat reply failed: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };
        self.transcript.push(ChatMessage::bot(content));
        self.pending = false;
    }

    pub fn view(&self) -> ChatView {
        ChatView {
            open: self.open,
            title: "Minmo",
            subtitle: "Healthcare Assistant",
            messages: self.transcript.clone(),
            loading: self.pending,
            placeholder: "Ask about healthcare...",
            send: Button::new("Send")
                .size(ButtonSize::Sm)
                .disabled(self.pending)
                .action("chat/messages"),
            powered_by: "Gemini",
        }
    }
}

pub struct ChatService {
    model: Arc<dyn GenerativeModel>,
    sessions: SessionRegistry<ChatSession>,
}

impl ChatService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            sessions: SessionRegistry::new(),
        }
    }

    pub async fn mount(&self, session_id: Uuid) -> ChatView {
        let chat = self.sessions.mount(session_id, ChatSession::new()).await;
        let chat = chat.lock().await;
        chat.view()
    }

    pub async fn unmount(&self, session_id: Uuid) -> bool {
        self.sessions.unmount(session_id).await.is_some()
    }

    pub async fn view(&self, session_id: Uuid) -> Result<ChatView, ChatError> {
        let chat = self.chat(session_id).await?;
        let chat = chat.lock().await;
        Ok(chat.view())
    }

    pub async fn set_open(&self, session_id: Uuid, open: bool) -> Result<ChatView, ChatError> {
        let chat = self.chat(session_id).await?;
        let mut chat = chat.lock().await;
        chat.set_open(open);
        Ok(chat.view())
    }

    /// Answers on a separate task so the transcript settles even if the caller goes away.
    pub async fn send(&self, session_id: Uuid, input: &str) -> Result<ChatView, ChatError> {
        let chat = self.chat(session_id).await?;

        let message = chat.lock().await.begin_send(input)?;
        debug!("Session {} asked Minmo: {}", session_id, message);

        let model = self.model.clone();
        let reply = tokio::spawn(async move {
            let reply = model.generate(&build_prompt(&message)).await;

            let mut chat = chat.lock().await;
            chat.finish_send(reply);
            chat.view()
        });

        reply.await.map_err(|e| ChatError::ReplyFailed(e.to_string()))
    }

    async fn chat(&self, session_id: Uuid) -> Result<Arc<Mutex<ChatSession>>, ChatError> {
        self.sessions
            .get(session_id)
            .await
            .ok_or(ChatError::NotMounted(session_id))
    }
}
