use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

use super::ChatSession;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Turns kept as remote context (a turn is one user plus one model entry).
const HISTORY_TURNS: usize = 20;

/// Chat session against the Gemini `generateContent` endpoint.
///
/// The endpoint is stateless, so the session replays its own bounded
/// history together with the fixed system instruction on every call.
pub struct GeminiSession {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    system_instruction: String,
    history: VecDeque<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    fn new(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part { text: Some(text.to_string()) }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

impl GeminiSession {
    pub fn new(
        api_key: String,
        model: String,
        temperature: f32,
        system_instruction: String,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            http,
            api_key,
            base_url: BASE_URL.to_string(),
            model,
            temperature,
            system_instruction,
            history: VecDeque::with_capacity(HISTORY_TURNS * 2),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(&self, user_input: &str) -> GenerateContentRequest {
        let mut contents: Vec<Content> = self.history.iter().cloned().collect();
        contents.push(Content::new(Some("user"), user_input));

        GenerateContentRequest {
            contents,
            system_instruction: Content::new(None, &self.system_instruction),
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }

    fn remember(&mut self, user_input: &str, reply: &str) {
        self.history.push_back(Content::new(Some("user"), user_input));
        self.history.push_back(Content::new(Some("model"), reply));

        while self.history.len() > HISTORY_TURNS * 2 {
            self.history.pop_front();
        }
    }

    async fn generate(&self, user_input: &str) -> Result<String> {
        let request = self.build_request(user_input);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("sending request to Gemini")?;

        let status = response.status();
        let body = response.text().await.context("reading Gemini response")?;

        if !status.is_success() {
            return Err(anyhow!("Gemini API error: {} - {}", status, body));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).context("parsing Gemini response")?;

        parsed
            .text()
            .ok_or_else(|| anyhow!("Gemini returned no text"))
    }

    /// Number of history entries currently replayed to the model.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl ChatSession for GeminiSession {
    async fn send_message(&mut self, text: &str) -> Result<String> {
        let reply = self.generate(text).await?;
        // Failed turns never reach the history
        self.remember(text, &reply);
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session() -> GeminiSession {
        GeminiSession::new(
            "test-key".to_string(),
            "gemini-2.0-flash".to_string(),
            0.6,
            "Você é Aron".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn request_carries_system_instruction_and_temperature() {
        let request = session().build_request("Olá");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "Você é Aron");
        assert!(value["systemInstruction"].get("role").is_none());
        assert!((value["generationConfig"]["temperature"].as_f64().unwrap() - 0.6).abs() < 1e-6);
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Olá");
    }

    #[test]
    fn endpoint_includes_model() {
        assert_eq!(
            session().endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn history_is_replayed_and_bounded() {
        let mut session = session();
        for i in 0..(HISTORY_TURNS + 5) {
            session.remember(&format!("pergunta {i}"), "resposta");
        }
        assert_eq!(session.history_len(), HISTORY_TURNS * 2);

        let request = session.build_request("última");
        assert_eq!(request.contents.len(), HISTORY_TURNS * 2 + 1);
        assert_eq!(request.contents[0].parts[0].text.as_deref(), Some("pergunta 5"));
        assert_eq!(request.contents[1].role.as_deref(), Some("model"));
    }

    #[test]
    fn response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Olá, " }, { "text": "tudo bem?" }] }
            }]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Olá, tudo bem?"));
    }

    #[test]
    fn empty_payloads_have_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.text().is_none());

        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
        }))
        .unwrap();
        assert!(response.text().is_none());

        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] })).unwrap();
        assert!(response.text().is_none());
    }
}
