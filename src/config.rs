use std::env;
use std::time::Duration;

pub const ASSISTANT_NAME: &str = "Aron";

const SYSTEM_INSTRUCTION: &str = "\
Você é Aron, agente especialista da DevPoint.

PERSONALIDADE:
- Profissional, direto, educado e confiante.
- Fala como um consultor humano, não como um robô.
- Nunca usa termos técnicos internos (API, key, backend, erro, sistema, conexão).

REGRAS ABSOLUTAS:
1) NUNCA falar que criamos software, apps ou produtos digitais.
2) NUNCA usar termos como \"transformar sua ideia\", \"desenvolvimento de sistemas\", \"programação sob medida\".
3) SEMPRE deixar claro que vendemos AUTOMAÇÃO DE ATENDIMENTO.
4) NUNCA mencionar API, backend, chave, erro técnico ou limitações internas.
5) NUNCA dizer que \"não consegue responder\".

O QUE OFERECEMOS:
- Agente de IA humanizado no WhatsApp
- Atendimento automático 24/7
- Qualificação do lead
- Agendamento automático integrado ao sistema do cliente
- Redução de perda de leads

PLANOS:
- MVP: implantação base da automação (WhatsApp + IA + agendamento) — a partir de R$3.000
- Profissional: fluxos mais avançados, personalização e integrações — a partir de R$5.000
- Premium: automação completa, múltiplos fluxos, maior complexidade — a partir de R$8.000

COMPORTAMENTO EM PERGUNTAS DE PREÇO:
- Nunca dizer \"depende de API\".
- Sempre responder algo como: \"Consigo te orientar sim. Os projetos começam em R$3.000. Posso te ajudar a entender qual plano faz mais sentido.\"

ENCERRAMENTO PADRÃO:
- Sempre oferecer: \"Quer que eu te ajude a escolher o plano ideal?\" ou \"Posso te explicar como funciona na prática.\"
";

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_temperature: f32,
    pub request_timeout: Duration,
    pub typing_delay: Duration,
    pub booking_phone: String,
    pub system_instruction: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Config {
    /// Reads `.env` and the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|key| !key.trim().is_empty());

        let gemini_model = lookup("GEMINI_MODEL").unwrap_or_else(|| "gemini-2.0-flash".to_string());

        let gemini_temperature = lookup("GEMINI_TEMPERATURE")
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(0.6)
            .clamp(0.0, 2.0);

        let request_timeout = lookup("GEMINI_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let typing_delay = lookup("ASSISTANT_TYPING_DELAY_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(1500));

        let booking_phone = lookup("BOOKING_PHONE").unwrap_or_else(|| "5500000000000".to_string());

        Self {
            gemini_api_key,
            gemini_model,
            gemini_temperature,
            request_timeout,
            typing_delay,
            booking_phone,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            window_width: 960.0,
            window_height: 680.0,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::default();
        assert!(!config.has_credential());
        assert_eq!(config.gemini_temperature, 0.6);
        assert_eq!(config.typing_delay, Duration::from_millis(1500));
        assert_eq!(config.booking_phone, "5500000000000");
        assert!(config.system_instruction.contains("Você é Aron"));
    }

    #[test]
    fn blank_credential_counts_as_absent() {
        assert!(!config_with(&[("GEMINI_API_KEY", "  ")]).has_credential());
    }

    #[test]
    fn api_key_is_a_fallback_name() {
        let config = config_with(&[("API_KEY", "abc")]);
        assert_eq!(config.gemini_api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn bad_numbers_fall_back_to_defaults() {
        let config = config_with(&[
            ("GEMINI_TEMPERATURE", "hot"),
            ("ASSISTANT_TYPING_DELAY_MS", "-3"),
        ]);
        assert_eq!(config.gemini_temperature, 0.6);
        assert_eq!(config.typing_delay, Duration::from_millis(1500));
    }

    #[test]
    fn temperature_is_clamped() {
        assert_eq!(config_with(&[("GEMINI_TEMPERATURE", "9")]).gemini_temperature, 2.0);
    }
}
