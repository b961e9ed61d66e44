//! Message templates for the anonymous note.

/// Shown in the inbox preview before anything has been sent.
pub const PLACEHOLDER_MESSAGE: &str = "Você ilumina qualquer ambiente... (Exemplo)";

pub const SWEET_PHRASE: &str = "alguém admira muito seu brilho...";
pub const SPICY_PHRASE: &str = "não consigo parar de pensar no quanto você é atraente...";

/// Which of the two fixed templates to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Sweet,
    Spicy,
}

impl Tone {
    pub fn from_spicy(spicy: bool) -> Self {
        if spicy { Tone::Spicy } else { Tone::Sweet }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Tone::Sweet => SWEET_PHRASE,
            Tone::Spicy => SPICY_PHRASE,
        }
    }

    fn greeting(&self) -> &'static str {
        match self {
            Tone::Sweet => "Olá",
            Tone::Spicy => "Ei",
        }
    }

    fn signoff(&self) -> &'static str {
        match self {
            Tone::Sweet => "✨💌",
            Tone::Spicy => "🔥😈",
        }
    }

    /// Icon for the spicy toggle.
    pub fn icon(&self) -> &'static str {
        match self {
            Tone::Sweet => "😇",
            Tone::Spicy => "🔥",
        }
    }
}

/// Wrap the user's text in the template for `tone`.
pub fn rewrite(recipient: &str, message: &str, tone: Tone) -> String {
    format!(
        "{} @{}, {} {} {}",
        tone.greeting(),
        recipient,
        tone.phrase(),
        message,
        tone.signoff()
    )
}

/// Clamp `text` to at most `max_chars` characters.
pub fn clamp_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweet_template() {
        assert_eq!(
            rewrite("ana", "oi", Tone::Sweet),
            "Olá @ana, alguém admira muito seu brilho... oi ✨💌"
        );
    }

    #[test]
    fn test_spicy_template() {
        assert_eq!(
            rewrite("ana", "oi", Tone::Spicy),
            "Ei @ana, não consigo parar de pensar no quanto você é atraente... oi 🔥😈"
        );
    }

    #[test]
    fn test_rewrite_contains_recipient_and_one_phrase() {
        let pairs = [("bob", "hello"), ("Zé", "você é demais"), ("x_1", "?")];
        for (recipient, message) in pairs {
            for spicy in [false, true] {
                let tone = Tone::from_spicy(spicy);
                let text = rewrite(recipient, message, tone);
                assert!(text.contains(&format!("@{recipient}")));
                assert!(text.contains(message));
                assert_eq!(text.contains(SPICY_PHRASE), spicy);
                assert_eq!(text.contains(SWEET_PHRASE), !spicy);
            }
        }
    }

    #[test]
    fn test_clamp_counts_chars_not_bytes() {
        let text = "ééééé";
        assert_eq!(clamp_chars(text, 3), "ééé");
        assert_eq!(clamp_chars(text, 10), text);
        assert_eq!(clamp_chars("", 3), "");
    }
}
