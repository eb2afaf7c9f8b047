//! Ordered keyword tables shared by the classifier and the canned replies.
//!
//! A table is scanned top to bottom and the first rule with a keyword
//! contained in the lowercased input wins. There is no scoring.

#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    pub keywords: &'static [&'static str],
    pub value: T,
}

impl<T> KeywordRule<T> {
    pub const fn new(keywords: &'static [&'static str], value: T) -> Self {
        Self { keywords, value }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|&word| lowered.contains(word))
    }
}

/// Returns the value of the first rule that matches `text`.
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], text: &str) -> Option<T> {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[KeywordRule<u8>] = &[
        KeywordRule::new(&["agendar", "reunião"], 1),
        KeywordRule::new(&["preço"], 2),
    ];

    #[test]
    fn first_rule_wins_when_several_match() {
        assert_eq!(first_match(RULES, "preço para agendar"), Some(1));
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(first_match(RULES, "PREÇO"), Some(2));
        assert_eq!(first_match(RULES, "Reunião amanhã"), Some(1));
    }

    #[test]
    fn accents_are_not_folded() {
        assert_eq!(first_match(RULES, "preco"), None);
    }

    #[test]
    fn no_match_returns_none() {
        assert_eq!(first_match(RULES, "bom dia"), None);
    }
}
