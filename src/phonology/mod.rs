//! The shm-reduplication engine.
//!
//! The rule cascade is an ordered table of (predicate, transform) pairs
//! evaluated top to bottom; the first matching rule wins. Keeping the
//! priority explicit in one table makes individual rules testable and lets
//! new rules slot in without touching their neighbours.

pub mod casing;
pub mod classify;

use casing::CasePattern;
use classify::{first_vowel, is_vowel, starts_with_cluster};

/// Consonants that close a cluster handled by the cluster rule
/// ("breakfast", "floozie", "sky").
const CLUSTER_FINALS: &[char] = &['r', 'l', 'k'];

struct Rule {
    #[cfg_attr(not(test), allow(dead_code))]
    name: &'static str,
    matches: fn(&str) -> bool,
    apply: fn(&str) -> String,
}

/// Rule cascade, highest priority first. Operates on the lower-cased last
/// word of a phrase.
const RULES: &[Rule] = &[
    // Words already starting with schm- mutate rather than echo
    // (schmuck -> schnuck), and vice versa (schnozz -> schmozz).
    Rule {
        name: "schm-avoidance",
        matches: |w| w.starts_with("schm"),
        apply: |w| format!("schn{}", &w[4..]),
    },
    Rule {
        name: "schn-avoidance",
        matches: |w| w.starts_with("schn"),
        apply: |w| format!("schm{}", &w[4..]),
    },
    Rule {
        name: "sm-onset",
        matches: |w| w.starts_with("sm"),
        apply: |w| format!("schm{}", &w[2..]),
    },
    Rule {
        name: "sn-onset",
        matches: |w| w.starts_with("sn"),
        apply: |w| format!("schm{}", &w[2..]),
    },
    Rule {
        name: "qu-onset",
        matches: |w| w.starts_with("qu"),
        apply: |w| format!("schm{}", &w[2..]),
    },
    Rule {
        name: "cluster-rlk",
        matches: |w| {
            let chars: Vec<char> = w.chars().collect();
            starts_with_cluster(&chars, Some(CLUSTER_FINALS))
        },
        apply: replace_up_to_first_vowel,
    },
    Rule {
        name: "consonant-vowel",
        matches: |w| {
            let chars: Vec<char> = w.chars().collect();
            chars.len() >= 2 && !is_vowel(chars[0], 0) && is_vowel(chars[1], 1)
        },
        apply: |w| format!("schm{}", skip_chars(w, 1)),
    },
    Rule {
        name: "consonant-consonant-vowel",
        matches: |w| {
            let chars: Vec<char> = w.chars().collect();
            chars.len() >= 3
                && !is_vowel(chars[0], 0)
                && !is_vowel(chars[1], 1)
                && is_vowel(chars[2], 2)
        },
        apply: |w| format!("schm{}", skip_chars(w, 2)),
    },
    Rule {
        name: "vowel-initial",
        matches: |w| w.chars().next().is_some_and(|c| is_vowel(c, 0)),
        apply: |w| format!("schm{w}"),
    },
    // Remaining consonant-cluster shapes, and the short words the indexed
    // rules above refuse to touch.
    Rule {
        name: "cluster-fallback",
        matches: |_| true,
        apply: replace_up_to_first_vowel,
    },
];

/// "schm" + everything from the first vowel on. A word with no vowel at all
/// keeps its whole body after the prefix ("bd" -> "schmbd").
fn replace_up_to_first_vowel(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    match first_vowel(&chars) {
        Some(v) => format!("schm{}", skip_chars(word, v)),
        None => format!("schm{word}"),
    }
}

/// Suffix of `word` starting at char index `n`.
fn skip_chars(word: &str, n: usize) -> &str {
    word.char_indices()
        .nth(n)
        .map(|(i, _)| &word[i..])
        .unwrap_or("")
}

/// Run an already lower-cased word through the rule cascade.
fn reduplicate(word: &str) -> String {
    RULES
        .iter()
        .find(|rule| (rule.matches)(word))
        .map(|rule| (rule.apply)(word))
        // The cascade ends in a catch-all, but stay total regardless.
        .unwrap_or_else(|| format!("schm{word}"))
}

/// Name of the first rule that matches `word`; pins down which branch of
/// the cascade fired.
#[cfg(test)]
fn matched_rule_name(word: &str) -> &'static str {
    RULES
        .iter()
        .find(|rule| (rule.matches)(&word.to_lowercase()))
        .map(|rule| rule.name)
        .unwrap_or("none")
}

/// Shm-reduplicate the last word of a space-separated phrase, preserving its
/// capitalization pattern. Words before the last pass through unchanged.
/// Empty input yields empty output.
pub fn transform_phrase(phrase: &str) -> String {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let Some((&original_last, head)) = words.split_last() else {
        return String::new();
    };

    let transformed = reduplicate(&original_last.to_lowercase());
    let restored = casing::restore(&transformed, CasePattern::of(original_last));

    let mut out: Vec<&str> = head.to_vec();
    out.push(&restored);
    out.join(" ")
}
