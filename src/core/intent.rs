use super::keywords::{first_match, KeywordRule};

/// Funnel position derived from the latest user text.
///
/// Only used to pick the next quick replies; never stored between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Seed state of a fresh conversation. `classify` never returns it.
    Start,
    Plans,
    PricingDetails,
    Closing,
    /// The user asked to book directly. Suggestions are removed.
    Booking,
    Default,
}

const INTENT_RULES: &[KeywordRule<Category>] = &[
    KeywordRule::new(&["agendar", "quero", "reunião", "conversar"], Category::Booking),
    KeywordRule::new(&["plano", "conhecer"], Category::Plans),
    KeywordRule::new(&["valor", "preço", "diferença"], Category::PricingDetails),
    KeywordRule::new(&["ia", "prazo", "funciona"], Category::Closing),
];

/// Classifies free text into a funnel category.
///
/// Callers must reject blank input before classifying it.
pub fn classify(text: &str) -> Category {
    first_match(INTENT_RULES, text).unwrap_or(Category::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_keywords_win_over_everything_else() {
        assert_eq!(classify("quero agendar uma reunião"), Category::Booking);
        assert_eq!(classify("Quero conhecer o plano"), Category::Booking);
        assert_eq!(classify("Podemos conversar?"), Category::Booking);
    }

    #[test]
    fn plans_are_checked_before_pricing() {
        assert_eq!(classify("Conhecer os planos"), Category::Plans);
        assert_eq!(classify("valor do plano"), Category::Plans);
    }

    #[test]
    fn pricing_details() {
        assert_eq!(classify("Ver valores"), Category::PricingDetails);
        assert_eq!(classify("Diferença MVP vs Pro"), Category::PricingDetails);
        assert_eq!(classify("qual o PREÇO?"), Category::PricingDetails);
    }

    #[test]
    fn closing_group_matches_plain_substrings() {
        assert_eq!(classify("Como funciona a IA?"), Category::Closing);
        assert_eq!(classify("Prazos de entrega"), Category::Closing);
        // "ia" is a substring match, not a word match
        assert_eq!(classify("bom dia"), Category::Closing);
    }

    #[test]
    fn uncovered_phrasing_falls_to_default() {
        assert_eq!(classify("quanto custa?"), Category::Default);
        assert_eq!(classify("olá"), Category::Default);
    }

    #[test]
    fn classification_is_repeatable() {
        let text = "Diferença MVP vs Pro";
        assert_eq!(classify(text), classify(text));
    }
}
