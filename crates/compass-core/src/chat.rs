//! Scripted advisor chat
//!
//! The widget owns the transcript and the input line. Sending a message hands
//! back a [`PendingReply`] which the caller drives on the async runtime; the
//! reply is fed back through [`ChatWidget::receive`] once its delay has passed.

use std::time::Duration;

use chrono::{DateTime, Local};
use rand::Rng;

use crate::responses::{classify, topic};

/// Shortcut questions offered below the transcript
pub const QUICK_QUESTIONS: [&str; 5] = [
    "What career paths are available in computer science?",
    "What salary can I expect as a software engineer?",
    "What skills do I need for data science?",
    "How should I prepare for a technical interview?",
    "How can I transition into machine learning?",
];

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn avatar(&self) -> &'static str {
        match self {
            Sender::User => "👤",
            Sender::Bot => "🤖",
        }
    }
}

/// A message in the transcript. Never edited once appended.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            content: content.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    /// Hour and minute the message was created, e.g. "09:41"
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Source of the simulated "thinking" time before a reply appears
pub trait ReplyDelay: Send {
    fn next_delay(&mut self) -> Duration;
}

/// Uniformly random delay in `[min, max)`
#[derive(Debug, Clone, Copy)]
pub struct RandomDelay {
    min: Duration,
    max: Duration,
}

impl RandomDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }
}

impl Default for RandomDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), Duration::from_millis(3000))
    }
}

impl ReplyDelay for RandomDelay {
    fn next_delay(&mut self) -> Duration {
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        if min >= max {
            return self.min;
        }
        Duration::from_millis(rand::rng().random_range(min..max))
    }
}

/// Always the same delay
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl ReplyDelay for FixedDelay {
    fn next_delay(&mut self) -> Duration {
        self.0
    }
}

/// A reply that has been scheduled but not produced yet
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub prompt: String,
    pub delay: Duration,
}

impl PendingReply {
    /// Wait out the delay, then pick the canned reply for the prompt
    pub async fn resolve(self) -> String {
        tokio::time::sleep(self.delay).await;
        let topic = topic(&self.prompt);
        tracing::debug!(topic = topic.as_str(), delay_ms = self.delay.as_millis() as u64, "advisor reply ready");
        classify(&self.prompt).into_owned()
    }
}

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub struct ChatWidget {
    messages: Vec<ChatMessage>,
    input: String,
    cursor: usize, // cursor position in input, in chars
    is_typing: bool,
    scroll_pending: bool,
    delay: Box<dyn ReplyDelay>,
}

impl ChatWidget {
    pub fn new(delay: Box<dyn ReplyDelay>) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            cursor: 0,
            is_typing: false,
            scroll_pending: false,
            delay,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Send is available only with non-blank input and no reply in flight
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_typing
    }

    /// Replace the input line, cursor at the end
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.cursor = self.input.chars().count();
    }

    /// Send the current input. Returns `None` when there is nothing to send
    /// or a reply is still pending.
    pub fn submit(&mut self) -> Option<PendingReply> {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.is_typing {
            return None;
        }

        self.push(ChatMessage::new(text.clone(), Sender::User));
        self.input.clear();
        self.cursor = 0;
        self.is_typing = true;

        Some(PendingReply {
            prompt: text,
            delay: self.delay.next_delay(),
        })
    }

    /// Fill the input with a quick question and send it right away
    pub fn ask(&mut self, question: &str) -> Option<PendingReply> {
        self.set_input(question);
        self.submit()
    }

    /// Select the quick question at `index`, if there is one
    pub fn ask_quick_question(&mut self, index: usize) -> Option<PendingReply> {
        let question = QUICK_QUESTIONS.get(index)?;
        self.ask(question)
    }

    /// Append the advisor reply and leave the typing state
    pub fn receive(&mut self, reply: impl Into<String>) {
        self.is_typing = false;
        self.push(ChatMessage::new(reply, Sender::Bot));
    }

    /// Whether a scroll to the newest message is waiting for the next layout
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.scroll_pending = true;
    }

    // Input line editing

    pub fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.input, self.cursor);
        self.input.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_pos = char_to_byte_index(&self.input, self.cursor);
            self.input.remove(byte_pos);
        }
    }

    pub fn delete(&mut self) {
        let char_count = self.input.chars().count();
        if self.cursor < char_count {
            let byte_pos = char_to_byte_index(&self.input, self.cursor);
            self.input.remove(byte_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.input.chars().count();
        self.cursor = (self.cursor + 1).min(char_count);
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.input.chars().count();
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(Box::new(RandomDelay::default()))
    }
}
