//! Collaborator utilities around the core transformation: duplicate
//! filtering, candidate selection, and post composition.

pub mod cache;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::topic::transform_topic;

/// A topic that survived filtering and transformation, ready to post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub original: String,
    pub transformed: String,
}

/// Like `contains`, but case-insensitive.
///
/// `is_already_seen("X", &["x", "y"])` is true.
pub fn is_already_seen(topic: &str, seen: &[String]) -> bool {
    let lower = topic.to_lowercase();
    seen.iter().any(|s| s.to_lowercase() == lower)
}

/// Walk `candidates` in order and return the first one that is not already
/// seen, matches no skip pattern, and transforms successfully.
///
/// An untransformable candidate (numeric suffix, empty body) is skipped and
/// the next one is tried; only when every candidate fails is `None`
/// returned.
pub fn pick_post(candidates: &[String], seen: &[String], skip: &[Regex]) -> Option<PostDraft> {
    candidates.iter().find_map(|candidate| {
        if is_already_seen(candidate, seen) {
            return None;
        }
        if skip.iter().any(|re| re.is_match(candidate)) {
            return None;
        }
        transform_topic(candidate).map(|transformed| PostDraft {
            original: candidate.clone(),
            transformed,
        })
    })
}

/// Format a draft for posting: `"<original>? <transformed><terminator>"`.
pub fn compose_post(original: &str, transformed: &str, terminator: &str) -> String {
    format!("{original}? {transformed}{terminator}")
}

/// Pick a terminator at random from the configured list.
pub fn pick_terminator<'a, R: Rng>(rng: &mut R, terminators: &'a [String]) -> &'a str {
    terminators
        .choose(rng)
        .map(String::as_str)
        .unwrap_or("!")
}
