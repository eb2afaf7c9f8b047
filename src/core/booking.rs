use super::intent::{classify, Category};

/// A service plan as offered on the booking link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub implementation: &'static str,
    pub maintenance: &'static str,
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "porta-de-entrada",
        name: "Porta de Entrada",
        implementation: "R$ 1.000",
        maintenance: "R$ 350/mês",
    },
    Plan {
        id: "profissional",
        name: "Profissional",
        implementation: "R$ 3.000",
        maintenance: "R$ 700/mês",
    },
    Plan {
        id: "premium",
        name: "Premium",
        implementation: "R$ 8.000",
        maintenance: "R$ 700/mês",
    },
];

pub fn plan_by_id(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.id == id)
}

pub fn prefill_for_plan(plan: &Plan) -> String {
    format!("Plano {}", plan.name)
}

/// Text to prefill when the user leaves the chat to book.
pub fn prefill_for_category(category: Category) -> Option<String> {
    match category {
        Category::Booking | Category::Closing => {
            Some("Olá! Quero agendar uma reunião de diagnóstico.".to_string())
        }
        _ => None,
    }
}

/// Plan named in `text`, if any.
pub fn plan_mentioned(text: &str) -> Option<&'static Plan> {
    let lowered = text.to_lowercase();
    PLANS
        .iter()
        .find(|plan| lowered.contains(&plan.name.to_lowercase()))
}

/// Prefill for the booking link after the user wrote `text`.
///
/// A plan name wins over the generic booking text.
pub fn prefill_for_text(text: &str) -> Option<String> {
    plan_mentioned(text)
        .map(prefill_for_plan)
        .or_else(|| prefill_for_category(classify(text)))
}

/// WhatsApp deep link with optional prefilled text.
pub fn booking_link(phone: &str, prefill: Option<&str>) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    match prefill.filter(|text| !text.trim().is_empty()) {
        Some(text) => format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text)),
        None => format!("https://wa.me/{}", digits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_link() {
        assert_eq!(booking_link("+55 (00) 0000-0000", None), "https://wa.me/550000000000");
    }

    #[test]
    fn prefill_is_url_encoded() {
        let plan = plan_by_id("porta-de-entrada").unwrap();
        assert_eq!(
            booking_link("5500000000000", Some(&prefill_for_plan(plan))),
            "https://wa.me/5500000000000?text=Plano%20Porta%20de%20Entrada"
        );
    }

    #[test]
    fn blank_prefill_is_dropped() {
        assert_eq!(booking_link("55", Some("  ")), "https://wa.me/55");
    }

    #[test]
    fn only_closing_categories_prefill() {
        assert!(prefill_for_category(Category::Booking).is_some());
        assert!(prefill_for_category(Category::Closing).is_some());
        assert!(prefill_for_category(Category::Plans).is_none());
    }

    #[test]
    fn prefill_from_user_text() {
        assert_eq!(
            prefill_for_text("quero o Profissional").as_deref(),
            Some("Plano Profissional")
        );
        assert!(prefill_for_text("quero agendar").unwrap().contains("agendar"));
        assert_eq!(prefill_for_text("Ver valores"), None);
    }

    #[test]
    fn unknown_plan() {
        assert!(plan_by_id("enterprise").is_none());
        assert_eq!(PLANS.len(), 3);
    }
}
