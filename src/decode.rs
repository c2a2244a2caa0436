//! HTML entity decoding with replacement tracking
//!
//! Decoding collapses every recognized `&...;` reference into a single
//! character. Callers that keep styling ranges against the raw text need to
//! know where those collapses happened, so the decoder reports each
//! replacement both in output and in input coordinates.
//!
//! All positions are counted in `char`s (Unicode scalar values), not bytes.

use std::ops::Range;

use crate::entities;

/// Result of decoding a string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    /// The decoded text
    pub text: String,
    /// One `[start, end)` range per replacement, in output coordinates,
    /// left to right. Each range covers exactly one character.
    pub spans: Vec<Range<usize>>,
    /// The entity each span replaced, in input coordinates.
    /// Always the same length as `spans`.
    pub sources: Vec<Range<usize>>,
}

impl Decoded {
    /// Number of entities that were replaced
    pub fn replacements(&self) -> usize {
        self.spans.len()
    }

    /// Map a range computed against the input text onto the decoded text
    ///
    /// A bound that falls inside a replaced entity snaps outward, so a range
    /// touching any part of an entity still covers its decoded character.
    pub fn remap(&self, range: Range<usize>) -> Range<usize> {
        let start = self.map_position(range.start, false);
        let end = self.map_position(range.end, true).max(start);
        start..end
    }

    fn map_position(&self, pos: usize, snap_forward: bool) -> usize {
        let mut removed = 0;
        for (source, span) in self.sources.iter().zip(&self.spans) {
            if source.end <= pos {
                removed += source.len() - span.len();
            } else if source.start < pos {
                return if snap_forward { span.end } else { span.start };
            } else {
                break;
            }
        }
        pos - removed
    }
}

/// Decode HTML entities in text, recording where each replacement happened
///
/// Named entities are looked up in the entity table; `&#NNN;` and `&#xHHHH;`
/// are decoded numerically. Anything unrecognized, including an `&` with no
/// closing `;`, is copied through verbatim. This function never fails.
///
/// # Examples
///
/// ```
/// use textkit::decode::decode_html_entities;
///
/// let decoded = decode_html_entities("a&amp;b&lt;c");
/// assert_eq!(decoded.text, "a&b<c");
/// assert_eq!(decoded.spans, vec![1..2, 3..4]);
/// ```
pub fn decode_html_entities(input: &str) -> Decoded {
    let mut decoded = Decoded {
        text: String::with_capacity(input.len()),
        ..Default::default()
    };
    let mut out_pos = 0;
    let mut in_pos = 0;
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        let before = &rest[..amp];
        let before_len = before.chars().count();
        decoded.text.push_str(before);
        out_pos += before_len;
        in_pos += before_len;
        rest = &rest[amp..];

        // No matching ';' - the tail is copied below
        let Some(semi) = rest.find(';') else {
            break;
        };

        let candidate = &rest[..=semi];
        let candidate_len = candidate.chars().count();
        match decode_entity(candidate) {
            Some(c) => {
                decoded.text.push(c);
                decoded.spans.push(out_pos..out_pos + 1);
                decoded.sources.push(in_pos..in_pos + candidate_len);
                out_pos += 1;
            }
            None => {
                decoded.text.push_str(candidate);
                out_pos += candidate_len;
            }
        }
        in_pos += candidate_len;
        rest = &rest[semi + 1..];
    }

    decoded.text.push_str(rest);
    decoded
}

/// Decode HTML entities and keep only the text
///
/// ```
/// use textkit::decode::decode_html_entities_str;
///
/// assert_eq!(decode_html_entities_str("It&#039;s a beautiful day"), "It's a beautiful day");
/// ```
pub fn decode_html_entities_str(input: &str) -> String {
    decode_html_entities(input).text
}

/// Decode a single `&...;` candidate, returning `None` for invalid input
///
/// `decode_entity("&#64;")` is `'@'`, `decode_entity("&#x20ac;")` is `'€'`,
/// `decode_entity("&lt;")` is `'<'` and `decode_entity("&foo;")` is `None`.
pub fn decode_entity(entity: &str) -> Option<char> {
    let body = entity.strip_prefix('&')?.strip_suffix(';')?;
    if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        decode_numeric(hex, 16)
    } else if let Some(dec) = body.strip_prefix('#') {
        decode_numeric(dec, 10)
    } else {
        entities::lookup(entity)
    }
}

fn decode_numeric(digits: &str, radix: u32) -> Option<char> {
    // from_str_radix alone would also accept a leading '+'
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let code = u32::from_str_radix(digits, radix).ok()?;
    char::from_u32(code)
}
