//! Chatbot session: an append-only transcript plus a pending flag.
//!
//! Unlike the resource pages, the chat path is deliberately optimistic: the
//! user's entry is appended before the request is sent and is never rolled
//! back. Every send settles with exactly one bot entry, either the backend
//! reply or [`FALLBACK_REPLY`].

/// Bot entry text used when the chatbot request fails.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub sender: Sender,
    pub text: String,
}

/// In-memory transcript for one chat widget. Torn down with the view; no
/// truncation and no persistence across reloads.
#[derive(Debug, Default)]
pub struct ChatSession {
    entries: Vec<ChatEntry>,
    pending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// True between a send and its matching [`receive`](Self::receive).
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Appends the user's message and marks the session pending.
    ///
    /// Returns the trimmed message for the caller to post, or `None` when
    /// the input is blank or a previous send has not settled yet (in which
    /// case nothing is appended).
    pub fn send(&mut self, message: &str) -> Option<String> {
        let message = message.trim();
        if message.is_empty() || self.pending {
            return None;
        }
        self.entries.push(ChatEntry {
            sender: Sender::User,
            text: message.to_string(),
        });
        self.pending = true;
        Some(message.to_string())
    }

    /// Settles the in-flight send with the backend reply, or the fallback
    /// text when the request failed. Appends exactly one bot entry.
    pub fn receive(&mut self, response: Option<String>) {
        self.entries.push(ChatEntry {
            sender: Sender::Bot,
            text: response.unwrap_or_else(|| FALLBACK_REPLY.to_string()),
        });
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_appends_user_entry_before_reply_arrives() {
        let mut session = ChatSession::new();
        let posted = session.send("hello").expect("message accepted");
        assert_eq!(posted, "hello");
        assert!(session.is_pending());
        assert_eq!(
            session.entries(),
            [ChatEntry {
                sender: Sender::User,
                text: "hello".into()
            }]
        );
    }

    #[test]
    fn reply_appends_exactly_one_bot_entry_in_order() {
        let mut session = ChatSession::new();
        session.send("hello").unwrap();
        session.receive(Some("hi there".into()));

        let senders: Vec<_> = session.entries().iter().map(|e| e.sender).collect();
        assert_eq!(senders, [Sender::User, Sender::Bot]);
        assert_eq!(session.entries()[1].text, "hi there");
        assert!(!session.is_pending());
    }

    #[test]
    fn failed_send_keeps_user_entry_and_adds_fallback() {
        let mut session = ChatSession::new();
        session.send("hello").unwrap();
        session.receive(None);

        assert_eq!(session.entries().len(), 2);
        assert_eq!(session.entries()[0].text, "hello");
        assert_eq!(session.entries()[1].text, FALLBACK_REPLY);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert!(session.send("   ").is_none());
        assert!(session.entries().is_empty());
        assert!(!session.is_pending());
    }

    #[test]
    fn second_send_is_rejected_while_pending() {
        let mut session = ChatSession::new();
        session.send("first").unwrap();
        assert!(session.send("second").is_none());
        assert_eq!(session.entries().len(), 1);
    }

    #[test]
    fn input_is_trimmed_before_appending() {
        let mut session = ChatSession::new();
        assert_eq!(session.send("  hi  ").unwrap(), "hi");
        assert_eq!(session.entries()[0].text, "hi");
    }
}
