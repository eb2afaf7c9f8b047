use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::ai::local::{CannedReply, APOLOGY};
use crate::ai::{ChatSession, LocalAI, Persona};

use super::suggestions::SuggestionSet;

/// Outcome of one turn, ready to be appended to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Answered {
        text: String,
        /// Quick replies chosen by the reply itself. `None` lets the
        /// classifier pick them from the user text.
        options: Option<SuggestionSet>,
        follow_up: Option<String>,
    },
    Failed {
        apology: String,
    },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Answered {
            text: text.into(),
            options: None,
            follow_up: None,
        }
    }

    pub fn failed() -> Self {
        Reply::Failed {
            apology: APOLOGY.to_string(),
        }
    }
}

impl From<CannedReply> for Reply {
    fn from(canned: CannedReply) -> Self {
        Reply::Answered {
            text: canned.text.to_string(),
            options: canned.options(),
            follow_up: canned.follow_up.map(str::to_string),
        }
    }
}

/// Picks between the external session and the canned tables for each turn.
pub struct ReplyResolver<S: ChatSession> {
    persona: Persona,
    session: Option<Arc<Mutex<S>>>,
    typing_delay: Duration,
}

impl<S: ChatSession> Clone for ReplyResolver<S> {
    fn clone(&self) -> Self {
        Self {
            persona: self.persona,
            session: self.session.clone(),
            typing_delay: self.typing_delay,
        }
    }
}

impl<S: ChatSession> ReplyResolver<S> {
    pub fn new(persona: Persona, session: Option<Arc<Mutex<S>>>, typing_delay: Duration) -> Self {
        // The scripted agent never talks to the external model
        let session = session.filter(|_| persona == Persona::Aron);
        Self {
            persona,
            session,
            typing_delay,
        }
    }

    pub fn uses_remote(&self) -> bool {
        self.session.is_some()
    }

    /// Produces the reply for `text`. Never fails: remote errors become an apology.
    ///
    /// The reply is not released before the typing delay has elapsed.
    pub async fn resolve(&self, text: &str) -> Reply {
        let Some(session) = &self.session else {
            tokio::time::sleep(self.typing_delay).await;
            log::debug!("📡 Local rules ({:?})", self.persona);
            return LocalAI::reply(self.persona, text).into();
        };

        let remote = async { session.lock().await.send_message(text).await };
        let (result, ()) = tokio::join!(remote, tokio::time::sleep(self.typing_delay));

        match result {
            Ok(answer) => {
                log::debug!("📡 Gemini answered ({} chars)", answer.len());
                Reply::text(answer)
            }
            Err(e) => {
                log::error!("Gemini request failed: {:#}", e);
                Reply::failed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::local::{ARON_DEFAULT, ARON_PRICING};
    use crate::ai::testing::FakeSession;
    use std::time::Instant;

    fn resolver(persona: Persona, session: Option<FakeSession>) -> ReplyResolver<FakeSession> {
        ReplyResolver::new(persona, session.map(|s| Arc::new(Mutex::new(s))), Duration::ZERO)
    }

    #[tokio::test]
    async fn canned_path_without_session() {
        let resolver = resolver(Persona::Aron, None);
        assert!(!resolver.uses_remote());
        assert_eq!(resolver.resolve("quanto custa?").await, Reply::text(ARON_PRICING));
        assert_eq!(resolver.resolve("oi").await, Reply::text(ARON_DEFAULT));
    }

    #[tokio::test]
    async fn remote_path_forwards_raw_text() {
        let session = Arc::new(Mutex::new(FakeSession::default()));
        let resolver = ReplyResolver::new(Persona::Aron, Some(session.clone()), Duration::ZERO);

        assert_eq!(resolver.resolve("Olá Aron").await, Reply::text("remoto: Olá Aron"));
        assert_eq!(session.lock().await.received, ["Olá Aron"]);
    }

    #[tokio::test]
    async fn remote_failure_becomes_apology() {
        let resolver = resolver(Persona::Aron, Some(FakeSession::failing()));
        assert_eq!(resolver.resolve("preço").await, Reply::failed());
    }

    #[tokio::test]
    async fn scripted_persona_ignores_session() {
        let resolver = resolver(Persona::Scripted, Some(FakeSession::failing()));
        assert!(!resolver.uses_remote());
        match resolver.resolve("quero agendar").await {
            Reply::Answered { follow_up, options, .. } => {
                assert!(follow_up.is_some());
                assert_eq!(options, Some(SuggestionSet::empty()));
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[tokio::test]
    async fn typing_delay_applies_to_remote_replies() {
        let session = Arc::new(Mutex::new(FakeSession::default()));
        let resolver = ReplyResolver::new(Persona::Aron, Some(session), Duration::from_millis(50));

        let started = Instant::now();
        resolver.resolve("oi").await;
        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}
