use super::intent::Category;

/// Maximum number of quick replies rendered at once.
pub const MAX_SUGGESTIONS: usize = 3;

/// Ordered quick replies shown under the transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSet(Vec<String>);

impl SuggestionSet {
    /// Builds a set, keeping at most [`MAX_SUGGESTIONS`] entries.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().take(MAX_SUGGESTIONS).map(Into::into).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.0.iter().any(|s| s == text)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

fn table(category: Category) -> &'static [&'static str] {
    match category {
        Category::Start => &["Conhecer os planos", "Já quero agendar"],
        Category::Plans => &["Ver valores", "Diferença MVP vs Pro"],
        Category::PricingDetails => &["Como funciona a IA?", "Prazos de entrega"],
        Category::Closing => &["Agendar Reunião", "Falar no WhatsApp"],
        Category::Default => &["Ver Planos", "Agendar Conversa"],
        // Fewer choices at the bottom of the funnel
        Category::Booking => &[],
    }
}

/// Quick replies to offer after a turn classified as `category`.
pub fn next_suggestions(category: Category) -> SuggestionSet {
    SuggestionSet::new(table(category).iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_category_maps_to_its_table_entry() {
        assert_eq!(
            next_suggestions(Category::Plans),
            SuggestionSet::new(["Ver valores", "Diferença MVP vs Pro"])
        );
        assert_eq!(
            next_suggestions(Category::Closing),
            SuggestionSet::new(["Agendar Reunião", "Falar no WhatsApp"])
        );
        assert_eq!(next_suggestions(Category::Default).len(), 2);
    }

    #[test]
    fn booking_clears_suggestions() {
        assert!(next_suggestions(Category::Booking).is_empty());
    }

    #[test]
    fn sets_are_truncated() {
        let set = SuggestionSet::new(["a", "b", "c", "d"]);
        assert_eq!(set.len(), MAX_SUGGESTIONS);
        assert!(!set.contains("d"));
    }
}
