//! Grounding prompt assembly for document question answering
//!
//! Produces the chat-completions message list for one question: a system
//! message carrying the selected context, a window of recent conversation,
//! then the question. Sending it to a model is the caller's job.

use serde::{Deserialize, Serialize};

use crate::config::{PromptConfig, DEFAULT_HISTORY_WINDOW};

/// Reply the model is told to give when the context lacks an answer
pub const NOT_IN_DOCUMENT_REPLY: &str = "I don't see information about that in the document";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Wrap selected page content in document-grounding instructions
pub fn build_system_prompt(context: &str) -> String {
    format!(
        "You are analyzing a PDF document. Here's the relevant content:\n\n\
         {context}\n\n\
         Your task:\n\
         1. Answer questions based ONLY on the information in this document\n\
         2. If the answer is not in the document, say \"{NOT_IN_DOCUMENT_REPLY}\" - DO NOT make up answers\n\
         3. Include page numbers in your answer when possible (e.g., \"According to page 3...\")\n\
         4. If the question requires information from other parts of the document not shown here, mention that you only have access to certain portions\n\
         5. Provide direct quotes when appropriate"
    )
}

/// Builds the message list for one question
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    history_window: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl From<PromptConfig> for PromptBuilder {
    fn from(config: PromptConfig) -> Self {
        Self {
            history_window: config.history_window,
        }
    }
}

impl PromptBuilder {
    pub fn new(history_window: usize) -> Self {
        Self { history_window }
    }

    /// `[system, last N history messages, user question]`
    ///
    /// System messages found in `history` are dropped; the fresh system
    /// prompt replaces them.
    pub fn build(&self, question: &str, context: &str, history: &[ChatMessage]) -> Vec<ChatMessage> {
        let conversation: Vec<&ChatMessage> = history
            .iter()
            .filter(|m| m.role != ChatRole::System)
            .collect();
        let skip = conversation.len().saturating_sub(self.history_window);

        let mut messages = Vec::with_capacity(self.history_window.min(conversation.len()) + 2);
        messages.push(ChatMessage::system(build_system_prompt(context)));
        messages.extend(conversation.into_iter().skip(skip).cloned());
        messages.push(ChatMessage::user(question.trim()));
        messages
    }
}
