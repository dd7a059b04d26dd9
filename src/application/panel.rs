//! Chat panel - the append-only transcript behind the message renderer

use crate::domain::entities::Message;

/// Scrollable transcript with a fixed-height viewport. Appending always pins
/// the scroll offset to its maximum so the newest message is visible.
#[derive(Debug)]
pub struct ChatPanel {
    messages: Vec<Message>,
    viewport_rows: usize,
    scroll: usize,
}

impl ChatPanel {
    pub fn new(viewport_rows: usize) -> Self {
        Self {
            messages: Vec::new(),
            viewport_rows,
            scroll: 0,
        }
    }

    /// Append a message and scroll to the newest content. Ordering is
    /// strictly call order; text is not validated here.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.scroll = self.max_scroll();
    }

    pub fn max_scroll(&self) -> usize {
        self.messages.len().saturating_sub(self.viewport_rows)
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// The slice of messages currently inside the viewport
    pub fn visible(&self) -> &[Message] {
        let end = (self.scroll + self.viewport_rows).min(self.messages.len());
        &self.messages[self.scroll..end]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
