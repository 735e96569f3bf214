//! CamelCase segmentation for hashtag bodies.

/// Split a compound token on uppercase boundaries and rejoin with single
/// spaces ("XFactorSemiFinal" -> "X Factor Semi Final"). A token with no
/// internal uppercase boundary comes back unchanged.
pub fn split_camel_case(compound: &str) -> String {
    let mut segments: Vec<String> = Vec::new();
    let mut pending = String::new();

    for ch in compound.chars() {
        if ch.is_uppercase() && !pending.is_empty() {
            segments.push(std::mem::take(&mut pending));
        }
        pending.push(ch);
    }
    if !pending.is_empty() {
        segments.push(pending);
    }

    segments.join(" ")
}
