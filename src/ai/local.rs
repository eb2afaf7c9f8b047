use crate::core::keywords::{first_match, KeywordRule};
use crate::core::suggestions::{next_suggestions, SuggestionSet};
use crate::core::intent::Category;
use crate::core::transcript::Message;

/// Which assistant a conversation talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    /// Expanded panel assistant. Can delegate to the external model.
    Aron,
    /// Floating widget agent. Fully scripted, replies carry their own options.
    Scripted,
}

impl Persona {
    pub fn display_name(self) -> &'static str {
        match self {
            Persona::Aron => "Aron",
            Persona::Scripted => "Agente PIPECODE",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Persona::Aron => "DevPoint AI",
            Persona::Scripted => "Online agora",
        }
    }
}

/// Fixed reply from one of the local tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedReply {
    pub text: &'static str,
    /// Quick replies attached to the message. `None` lets the classifier decide.
    pub options: Option<&'static [&'static str]>,
    /// Second agent message appended right after the reply.
    pub follow_up: Option<&'static str>,
}

impl CannedReply {
    const fn text(text: &'static str) -> Self {
        Self { text, options: None, follow_up: None }
    }

    const fn with_options(text: &'static str, options: &'static [&'static str]) -> Self {
        Self { text, options: Some(options), follow_up: None }
    }

    pub fn options(&self) -> Option<SuggestionSet> {
        self.options.map(|o| SuggestionSet::new(o.iter().copied()))
    }
}

pub const ARON_PRICING: &str = "Consigo te orientar sim. Nossos projetos de automação começam em R$ 3.000 (Plano MVP). Se precisar de algo mais robusto com integrações complexas, temos o Plano Profissional a partir de R$ 5.000. Qual faz mais sentido para o seu momento?";
pub const ARON_BOOKING: &str = "Perfeito. Para agendarmos um diagnóstico e entendermos sua operação, basta clicar no botão 'Agendar Reunião' aqui no site. Vamos analisar seu fluxo atual.";
pub const ARON_DEFAULT: &str = "Entendi. Como especialista em automação, posso te explicar como o agente de IA atende seus clientes 24/7 ou te ajudar a escolher o melhor plano. O que prefere?";

/// Shown instead of any technical detail when the external model fails.
pub const APOLOGY: &str = "Peço desculpas, tive um breve lapso de atenção. Poderia repetir sua pergunta, por favor?";

const ARON_RULES: &[KeywordRule<CannedReply>] = &[
    KeywordRule::new(&["preço", "valor", "quanto"], CannedReply::text(ARON_PRICING)),
    KeywordRule::new(&["agendar", "reunião"], CannedReply::text(ARON_BOOKING)),
];

const PLAN_OPTIONS: &[&str] = &["Quero esse", "Ver outros", "Agendar Reunião"];
const FALLBACK_OPTIONS: &[&str] = &["Quero agendar", "Ver Planos", "Falar com humano"];

const SCRIPTED_BOOKING: CannedReply = CannedReply {
    text: "Ótimo! Agendar uma reunião é o primeiro passo para transformar seu atendimento. Por favor, clique no botão abaixo para escolher o melhor horário.",
    options: Some(&[]),
    follow_up: Some("Ou deixe seu WhatsApp aqui que entramos em contato."),
};

const SCRIPTED_RULES: &[KeywordRule<CannedReply>] = &[
    KeywordRule::new(&["agendar", "reunião"], SCRIPTED_BOOKING),
    KeywordRule::new(
        &["plano", "valor", "preço"],
        CannedReply::with_options(
            "Temos planos a partir de R$ 1.000 para implementação. O \"Porta de Entrada\" é ideal para começar, e o Profissional integra tudo. Gostaria de ver detalhes de qual?",
            &["Porta de Entrada", "Profissional", "Premium"],
        ),
    ),
    KeywordRule::new(
        &["mvp", "porta"],
        CannedReply::with_options(
            "O plano Porta de Entrada custa R$ 1.000 + R$ 350/mês. Inclui automação de WhatsApp e encaminhamento inteligente de leads, garantindo que você não perca vendas.",
            PLAN_OPTIONS,
        ),
    ),
    KeywordRule::new(
        &["profissional"],
        CannedReply::with_options(
            "O plano Profissional custa R$ 3.000 + R$ 700/mês. Inclui agendamento 100% automático e integração com seu CRM e Calendar.",
            PLAN_OPTIONS,
        ),
    ),
    KeywordRule::new(
        &["manutenção", "manutencao"],
        CannedReply::with_options(
            "A manutenção (R$ 350 ou R$ 700) cobre os custos de APIs, servidores e garante que suas integrações continuem funcionando mesmo se o WhatsApp mudar algo.",
            FALLBACK_OPTIONS,
        ),
    ),
    KeywordRule::new(
        &["como funciona"],
        CannedReply::with_options(
            "Trabalhamos em 3 etapas: 1. Diagnóstico, 2. Implementação, 3. Manutenção. Quer agendar um diagnóstico gratuito?",
            &["Sim, agendar", "Dúvidas técnicas"],
        ),
    ),
];

const SCRIPTED_FALLBACK: CannedReply = CannedReply::with_options(
    "Desculpe, não entendi. Pode escolher uma das opções abaixo?",
    FALLBACK_OPTIONS,
);

/// Rule-based replies used when no external model answers.
pub struct LocalAI;

impl LocalAI {
    pub fn reply(persona: Persona, user_input: &str) -> CannedReply {
        match persona {
            Persona::Aron => {
                first_match(ARON_RULES, user_input).unwrap_or(CannedReply::text(ARON_DEFAULT))
            }
            Persona::Scripted => first_match(SCRIPTED_RULES, user_input).unwrap_or(SCRIPTED_FALLBACK),
        }
    }

    /// Seed message of a fresh conversation, with the quick replies it opens with.
    pub fn greeting(persona: Persona) -> (Message, SuggestionSet) {
        match persona {
            Persona::Aron => (
                Message::agent(
                    "Olá! Sou o Aron, especialista em automação da DevPoint. Como posso ajudar seu negócio a não perder mais leads?",
                ),
                next_suggestions(Category::Start),
            ),
            Persona::Scripted => {
                let options = SuggestionSet::new([
                    "Quero agendar",
                    "Planos e valores",
                    "Como funciona",
                    "Manutenção",
                ]);
                (
                    Message::agent_with_options(
                        "Olá! Sou o agente virtual da PIPECODE. Como posso ajudar você a automatizar seu negócio hoje?",
                        options.clone(),
                    ),
                    options,
                )
            }
        }
    }
}
