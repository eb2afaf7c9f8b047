pub mod gemini;
pub mod local;

use std::future::Future;

use crate::config::Config;

pub use gemini::GeminiSession;
pub use local::{LocalAI, Persona};

/// A remote conversational context: one free-text message in, one reply out.
pub trait ChatSession: Send + Sync + 'static {
    fn send_message(&mut self, text: &str) -> impl Future<Output = anyhow::Result<String>> + Send;
}

/// Opens the external session once at startup.
///
/// Returns `None` when no credential is configured or the client cannot be
/// built; the canned tables then answer for the rest of the session.
pub fn open_session(config: &Config) -> Option<GeminiSession> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        log::info!("Gemini credential not set, using canned replies");
        return None;
    };

    match GeminiSession::new(
        api_key,
        config.gemini_model.clone(),
        config.gemini_temperature,
        config.system_instruction.clone(),
        config.request_timeout,
    ) {
        Ok(session) => {
            log::info!("✓ Gemini session opened ({})", session.model());
            Some(session)
        }
        Err(e) => {
            log::warn!("⚠️ Gemini session unavailable: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::ChatSession;
    use anyhow::anyhow;

    /// In-memory session that echoes or fails on demand.
    #[derive(Debug, Default)]
    pub struct FakeSession {
        pub fail: bool,
        pub received: Vec<String>,
    }

    impl FakeSession {
        pub fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }
    }

    impl ChatSession for FakeSession {
        async fn send_message(&mut self, text: &str) -> anyhow::Result<String> {
            self.received.push(text.to_string());
            if self.fail {
                Err(anyhow!("connection reset"))
            } else {
                Ok(format!("remoto: {text}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_credential_means_no_session() {
        assert!(open_session(&Config::default()).is_none());
    }

    #[test]
    fn credential_opens_session() {
        let config = Config {
            gemini_api_key: Some("key".to_string()),
            ..Config::default()
        };
        let session = open_session(&config).unwrap();
        assert_eq!(session.model(), config.gemini_model);
    }
}
