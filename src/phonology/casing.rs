//! Capitalization patterns, derived from a word's original spelling and
//! reapplied to its transformed (lower-case) form.

/// Case pattern of a word before transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// Every alphabetic character is uppercase ("HOTEL", "FINTECH2015").
    AllUpper,
    /// First character uppercase, every following alphabetic character
    /// lowercase ("Bailey", "Man's").
    Title,
    /// Anything else; the transformed word stays lowercase.
    Other,
}

impl CasePattern {
    pub fn of(word: &str) -> Self {
        if word.chars().any(|c| c.is_alphabetic())
            && word
                .chars()
                .filter(|c| c.is_alphabetic())
                .all(|c| c.is_uppercase())
        {
            return CasePattern::AllUpper;
        }
        let mut chars = word.chars();
        match chars.next() {
            Some(first)
                if first.is_uppercase()
                    && chars.filter(|c| c.is_alphabetic()).all(|c| c.is_lowercase()) =>
            {
                CasePattern::Title
            }
            _ => CasePattern::Other,
        }
    }
}

/// Reapply `pattern` to a transformed, lower-case word.
pub fn restore(transformed: &str, pattern: CasePattern) -> String {
    match pattern {
        CasePattern::AllUpper => transformed.to_uppercase(),
        CasePattern::Title => {
            let mut chars = transformed.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        CasePattern::Other => transformed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_detection() {
        assert_eq!(CasePattern::of("HOTEL"), CasePattern::AllUpper);
        assert_eq!(CasePattern::of("FINTECH2015"), CasePattern::AllUpper);
        assert_eq!(CasePattern::of("X"), CasePattern::AllUpper);
        assert_eq!(CasePattern::of("Bailey"), CasePattern::Title);
        assert_eq!(CasePattern::of("Man's"), CasePattern::Title);
        assert_eq!(CasePattern::of("hayesvideo"), CasePattern::Other);
        assert_eq!(CasePattern::of("iPhone"), CasePattern::Other);
        assert_eq!(CasePattern::of(""), CasePattern::Other);
    }

    #[test]
    fn test_restore() {
        assert_eq!(restore("schmotel", CasePattern::AllUpper), "SCHMOTEL");
        assert_eq!(restore("schmailey", CasePattern::Title), "Schmailey");
        assert_eq!(restore("schmayesvideo", CasePattern::Other), "schmayesvideo");
        assert_eq!(restore("", CasePattern::Title), "");
    }
}
