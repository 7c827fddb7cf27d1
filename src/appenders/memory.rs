//! In-memory appender
//!
//! Captures every message in a shared buffer. Clones share the buffer, so a
//! test keeps one clone and hands the other to the logger.

use crate::core::{Appender, Message, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenated text of every captured message
    pub fn contents(&self) -> String {
        self.messages.lock().iter().map(Message::as_str).collect()
    }

    /// One entry per captured message, without the trailing newline
    pub fn lines(&self) -> Vec<String> {
        self.messages
            .lock()
            .iter()
            .map(|m| m.text.strip_suffix('\n').unwrap_or(&m.text).to_string())
            .collect()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().clone()
    }

    /// Take every captured message, leaving the buffer empty
    pub fn drain(&self) -> Vec<Message> {
        std::mem::take(&mut *self.messages.lock())
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, message: &Message) -> Result<()> {
        self.messages.lock().push(message.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
