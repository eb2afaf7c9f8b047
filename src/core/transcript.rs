use chrono::{DateTime, Local};
use uuid::Uuid;

use super::suggestions::SuggestionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

/// A single chat bubble. Immutable once created.
#[derive(Debug, Clone)]
pub struct Message {
    id: Uuid,
    sender: Sender,
    text: String,
    suggestions: Option<SuggestionSet>,
    sent_at: DateTime<Local>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::build(Sender::User, text.into(), None)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::build(Sender::Agent, text.into(), None)
    }

    /// Agent message that carries its own quick replies.
    pub fn agent_with_options(text: impl Into<String>, options: SuggestionSet) -> Self {
        Self::build(Sender::Agent, text.into(), Some(options))
    }

    fn build(sender: Sender, text: String, suggestions: Option<SuggestionSet>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text,
            suggestions,
            sent_at: Local::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestions(&self) -> Option<&SuggestionSet> {
        self.suggestions.as_ref()
    }

    pub fn sent_at(&self) -> DateTime<Local> {
        self.sent_at
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Append-only log of the conversation, in chronological order.
///
/// Always holds at least the greeting it was created with.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn with_greeting(greeting: Message) -> Self {
        Self {
            messages: vec![greeting],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> &Message {
        // never empty: constructed with a greeting and nothing is ever removed
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let transcript = Transcript::with_greeting(Message::agent("Olá!"));
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.last().sender(), Sender::Agent);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut transcript = Transcript::with_greeting(Message::agent("Olá!"));
        transcript.push(Message::user("primeira"));
        transcript.push(Message::agent("segunda"));

        let texts: Vec<&str> = transcript.messages().iter().map(Message::text).collect();
        assert_eq!(texts, ["Olá!", "primeira", "segunda"]);
        assert!(transcript.messages()[1].is_user());
    }

    #[test]
    fn message_ids_are_unique() {
        let a = Message::user("oi");
        let b = Message::user("oi");
        assert_ne!(a.id(), b.id());
    }
}
