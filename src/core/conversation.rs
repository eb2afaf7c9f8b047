use uuid::Uuid;

use crate::ai::{LocalAI, Persona};

use super::intent::classify;
use super::reply::Reply;
use super::suggestions::{next_suggestions, SuggestionSet};
use super::transcript::{Message, Transcript};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingReply { turn: Uuid },
}

/// A submitted message waiting for its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub id: Uuid,
    pub text: String,
}

#[derive(Debug)]
struct InFlight {
    id: Uuid,
    text: String,
    /// Restored when the turn fails.
    previous_suggestions: SuggestionSet,
}

/// State of one chat window: transcript, quick replies, input buffer.
///
/// Owned by the UI thread. At most one reply is in flight at a time;
/// submissions made while waiting are dropped, not queued.
#[derive(Debug)]
pub struct Conversation {
    persona: Persona,
    transcript: Transcript,
    suggestions: SuggestionSet,
    input: String,
    in_flight: Option<InFlight>,
    mounted: bool,
}

impl Conversation {
    pub fn new(persona: Persona) -> Self {
        let (greeting, suggestions) = LocalAI::greeting(persona);
        Self {
            persona,
            transcript: Transcript::with_greeting(greeting),
            suggestions,
            input: String::new(),
            in_flight: None,
            mounted: true,
        }
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn suggestions(&self) -> &SuggestionSet {
        &self.suggestions
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        match &self.in_flight {
            Some(turn) => Phase::AwaitingReply { turn: turn.id },
            None => Phase::Idle,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Most recent text the user sent, used to prefill the booking link.
    pub fn last_user_text(&self) -> Option<&str> {
        self.transcript
            .messages()
            .iter()
            .rev()
            .find(|m| m.is_user())
            .map(Message::text)
    }

    /// Appends the user message and starts a turn.
    ///
    /// Returns `None` for blank text, while another reply is pending, or
    /// after teardown. Nothing changes in those cases.
    pub fn submit(&mut self, text: &str) -> Option<PendingTurn> {
        if !self.mounted {
            return None;
        }
        if text.trim().is_empty() {
            log::debug!("Blank submission ignored");
            return None;
        }
        if self.in_flight.is_some() {
            log::debug!("Submission dropped, a reply is still pending");
            return None;
        }

        self.transcript.push(Message::user(text));
        self.input.clear();

        let id = Uuid::new_v4();
        self.in_flight = Some(InFlight {
            id,
            text: text.to_string(),
            // Chips are hidden while the agent is typing
            previous_suggestions: std::mem::take(&mut self.suggestions),
        });
        log::debug!("💬 [{}] turn {} submitted", self.persona.display_name(), id);

        Some(PendingTurn {
            id,
            text: text.to_string(),
        })
    }

    /// Submits whatever is in the input buffer.
    pub fn submit_input(&mut self) -> Option<PendingTurn> {
        let text = self.input.clone();
        self.submit(&text)
    }

    /// Same as typing a rendered quick reply and submitting it.
    pub fn click_suggestion(&mut self, suggestion: &str) -> Option<PendingTurn> {
        if !self.suggestions.contains(suggestion) {
            return None;
        }
        self.submit(suggestion)
    }

    /// Applies the reply of turn `turn_id`. Returns `false` when discarded.
    pub fn complete(&mut self, turn_id: Uuid, reply: Reply) -> bool {
        if !self.mounted {
            log::debug!("Reply for turn {} discarded after teardown", turn_id);
            return false;
        }
        if self.in_flight.as_ref().map(|t| t.id) != Some(turn_id) {
            log::debug!("Stale reply for turn {} discarded", turn_id);
            return false;
        }
        let Some(turn) = self.in_flight.take() else {
            return false;
        };

        match reply {
            Reply::Answered {
                text,
                options,
                follow_up,
            } => {
                let message = match &options {
                    Some(options) => Message::agent_with_options(text, options.clone()),
                    None => Message::agent(text),
                };
                self.transcript.push(message);
                if let Some(follow_up) = follow_up {
                    self.transcript.push(Message::agent(follow_up));
                }
                // Routing stays local even when the text came from the remote model
                self.suggestions = options.unwrap_or_else(|| next_suggestions(classify(&turn.text)));
            }
            Reply::Failed { apology } => {
                self.transcript.push(Message::agent(apology));
                self.suggestions = turn.previous_suggestions;
            }
        }
        true
    }

    /// Marks the window as gone. Replies that arrive later are dropped.
    pub fn teardown(&mut self) {
        self.mounted = false;
        self.in_flight = None;
    }
}
