//! Character-level classification: vowels, consonants, and word-initial
//! consonant clusters.
//!
//! The consonant set is fixed; everything else (including digits and
//! punctuation) counts as a vowel for transformation purposes, which matches
//! how hashtag bodies like "100k" behave in practice.

const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Is `ch` a vowel at position `index` of a word?
///
/// `y` at the start of a word is a semivowel and treated as a consonant;
/// anywhere else it is a vowel.
pub fn is_vowel(ch: char, index: usize) -> bool {
    let lower = ch.to_ascii_lowercase();
    if index > 0 && lower == 'y' {
        return true;
    }
    !CONSONANTS.contains(lower)
}

/// Index of the first vowel in `word`, or `None` if there is none
/// (e.g. "bd", or a lone word-initial "y").
pub fn first_vowel(word: &[char]) -> Option<usize> {
    word.iter()
        .enumerate()
        .find(|&(i, &ch)| is_vowel(ch, i))
        .map(|(i, _)| i)
}

/// Does `word` open with a consonant cluster?
///
/// With `finals` supplied, the cluster only qualifies when the consonant
/// immediately before the first vowel is in `finals` (e.g. "breakfast",
/// "street" and "floozie" all qualify for `['r', 'l', 'k']`). Without
/// `finals`, any consonant-initial word qualifies. A word with no vowel at
/// all never qualifies for a `finals`-constrained check.
pub fn starts_with_cluster(word: &[char], finals: Option<&[char]>) -> bool {
    let Some(&first) = word.first() else {
        return false;
    };
    if is_vowel(first, 0) {
        return false;
    }
    match finals {
        None => true,
        Some(set) => match first_vowel(word) {
            Some(v) if v > 0 => set.contains(&word[v - 1].to_ascii_lowercase()),
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn test_initial_y_is_consonant() {
        assert!(!is_vowel('y', 0));
        assert!(is_vowel('y', 1));
        assert!(is_vowel('y', 5));
    }

    #[test]
    fn test_vowels_and_consonants() {
        assert!(is_vowel('a', 0));
        assert!(is_vowel('E', 0));
        assert!(!is_vowel('b', 0));
        assert!(!is_vowel('Z', 3));
    }

    #[test]
    fn test_first_vowel_found() {
        assert_eq!(first_vowel(&chars("bad")), Some(1));
        assert_eq!(first_vowel(&chars("apple")), Some(0));
        assert_eq!(first_vowel(&chars("street")), Some(3));
    }

    #[test]
    fn test_first_vowel_not_found() {
        assert_eq!(first_vowel(&chars("bd")), None);
        assert_eq!(first_vowel(&chars("")), None);
    }

    #[test]
    fn test_initial_y_does_not_count_as_first_vowel() {
        // "y" alone: position 0 is not a vowel, nothing follows.
        assert_eq!(first_vowel(&chars("y")), None);
        // "yellow": the 'e' at index 1 is the first vowel.
        assert_eq!(first_vowel(&chars("yellow")), Some(1));
    }

    #[test]
    fn test_cluster_unconstrained() {
        assert!(starts_with_cluster(&chars("breakfast"), None));
        assert!(starts_with_cluster(&chars("table"), None));
        assert!(!starts_with_cluster(&chars("apple"), None));
        assert!(!starts_with_cluster(&chars(""), None));
    }

    #[test]
    fn test_cluster_with_finals() {
        let finals = ['r', 'l', 'k'];
        assert!(starts_with_cluster(&chars("breakfast"), Some(&finals)));
        assert!(starts_with_cluster(&chars("street"), Some(&finals)));
        assert!(starts_with_cluster(&chars("floozie"), Some(&finals)));
        assert!(starts_with_cluster(&chars("sky"), Some(&finals)));
        assert!(!starts_with_cluster(&chars("table"), Some(&finals)));
        assert!(!starts_with_cluster(&chars("snow"), Some(&finals)));
    }

    #[test]
    fn test_vowelless_word_is_not_a_constrained_cluster() {
        assert!(!starts_with_cluster(&chars("bd"), Some(&['r', 'l', 'k'])));
    }
}
