//! Trending-topic preprocessing: hashtag handling, numeric-suffix
//! rejection, and routing between phrase and CamelCase-compound shapes.

pub mod camel;

use crate::phonology::casing::CasePattern;
use crate::phonology::transform_phrase;
use camel::split_camel_case;

/// Shm-reduplicate a trending topic.
///
/// Hashtag markers survive in place, CamelCase hashtag bodies are split
/// before transformation and reassembled after, and topics whose last
/// whitespace-delimited token is an integer ("Uncharted 4") come back as
/// `None`: not transformable, try another candidate. `None` is the only
/// failure signal; nothing here panics.
pub fn transform_topic(topic: &str) -> Option<String> {
    let (hashtag, body) = match topic.strip_prefix('#') {
        Some(rest) => (true, rest),
        None => (false, topic),
    };

    // Empty bodies have no last token and nothing to transform.
    let last_token = body.split_whitespace().last()?;
    if is_integer_token(last_token) {
        return None;
    }

    let transformed = if body.contains(char::is_whitespace) {
        transform_phrase(body)
    } else if CasePattern::of(body) == CasePattern::AllUpper {
        // "FINTECH2015" stays a single word; splitting it on uppercase
        // boundaries would shred it into letters.
        transform_phrase(body)
    } else {
        transform_phrase(&split_camel_case(body)).replace(' ', "")
    };

    Some(if hashtag {
        format!("#{transformed}")
    } else {
        transformed
    })
}

/// Is `token` an integer: an optional sign followed by one or more ASCII
/// digits? A plain width-bounded parse would wave through very long digit
/// runs on overflow.
fn is_integer_token(token: &str) -> bool {
    let digits = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
