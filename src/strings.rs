//! String helpers
//!
//! Extension methods over `str` for the everyday chores of display code:
//! counting, slicing by character index, case changes over parts of a
//! string, simple predicates and banking-style formatting.
//!
//! Every index here is a character index (Unicode scalar value), never a
//! byte offset. Accessors that can run past the end return `Result`;
//! transforms clamp to the text instead of failing.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::ops::{Range, RangeInclusive};
use std::path::Path;
use url::Url;

use crate::decode::decode_html_entities_str;
use crate::error::{Result, TextError};

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

static URL_CANDIDATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:\b[A-Za-z][A-Za-z0-9+.-]*://|\bwww\.)[^\s<>"']+"#).unwrap()
});

/// RFC 3986 unreserved characters
const UNRESERVED: &[u8] = b"-._~";

/// Characters allowed unescaped in a URL query
const QUERY_ALLOWED: &[u8] = b"!$&'()*+,-./:;=?@_~";

pub trait StrExt {
    /// Number of characters
    fn length(&self) -> usize;

    /// Each character as its own `String`
    fn char_list(&self) -> Vec<String>;

    /// The distinct characters
    fn char_set(&self) -> BTreeSet<String>;

    fn first_character(&self) -> Option<char>;

    fn last_character(&self) -> Option<char>;

    /// `true` when empty or only whitespace
    fn is_empty_field(&self) -> bool;

    /// Text with every HTML entity reference replaced by its character
    fn decoded_html_entities(&self) -> String;

    /// Standard, padded base64 of the UTF-8 bytes
    fn base64(&self) -> String;

    fn count_of_words(&self) -> usize;

    /// Newlines in the trimmed text, plus one
    fn count_of_paragraphs(&self) -> usize;

    /// URLs mentioned in free text, in order of appearance
    ///
    /// A candidate is either `scheme://...` or starts with `www.`; it must
    /// parse as a URL with a host. Trailing sentence punctuation is dropped.
    fn extract_urls(&self) -> Vec<Url>;

    /// Extension of the last path component, treating self as a path or URL
    fn path_extension(&self) -> Option<String>;

    fn last_path_component(&self) -> Option<String>;

    fn removed_first_char(&self) -> String;

    fn removed_last_char(&self) -> String;

    /// Whitespace and newlines removed from both ends
    fn trimmed(&self) -> String;

    fn reversed(&self) -> String;

    /// Literal replace-all. An empty target leaves the text unchanged.
    fn replaced(&self, target: &str, with: &str) -> String;

    /// Split on a separator, dropping pieces that are empty after trimming
    fn splitted(&self, separator: &str) -> Vec<String>;

    /// Split on every character matching `is_separator`, dropping pieces
    /// that are empty after trimming
    fn splitted_by<F: Fn(char) -> bool>(&self, is_separator: F) -> Vec<String>;

    /// Non-overlapping occurrences of `substring`
    fn count_substring(&self, substring: &str) -> usize;

    fn uppercased_first_letter(&self) -> String;
    fn uppercased_prefix(&self, count: usize) -> String;
    fn uppercased_suffix(&self, count: usize) -> String;
    fn uppercased_range(&self, range: Range<usize>) -> String;

    fn lowercased_first_letter(&self) -> String;
    fn lowercased_prefix(&self, count: usize) -> String;
    fn lowercased_suffix(&self, count: usize) -> String;
    fn lowercased_range(&self, range: Range<usize>) -> String;

    /// Character index of the first occurrence of `c`
    fn index_of(&self, c: char) -> Option<usize>;

    fn substring_from(&self, from: usize) -> Result<String>;
    fn substring_to(&self, to: usize) -> Result<String>;
    fn substring_with(&self, range: Range<usize>) -> Result<String>;
    fn char_at(&self, index: usize) -> Result<char>;
    fn slice_inclusive(&self, range: RangeInclusive<usize>) -> Result<String>;

    /// Parse as a URL, percent-encoding characters not allowed in a query
    /// when the raw text does not parse
    fn encode_url(&self) -> Option<Url>;

    /// Percent-encode everything except `A-Za-z0-9-._~`, for use as a
    /// single URL query value
    fn added_percent_encoding_for_url(&self) -> String;

    /// Convert a byte range into a UTF-16 code unit range
    fn utf16_range(&self, range: Range<usize>) -> Option<Range<usize>>;

    /// Convert a UTF-16 code unit range into a byte range. `None` if either
    /// bound splits a surrogate pair or runs past the end.
    fn byte_range_from_utf16(&self, range: Range<usize>) -> Option<Range<usize>>;

    fn is_email(&self) -> bool;

    /// Only ASCII decimal digits. The empty string counts as a number.
    fn is_number(&self) -> bool;

    fn contains_sensitive(&self, s: &str) -> bool;

    fn contains_not_sensitive(&self, s: &str) -> bool;

    /// Text of every match of `pattern`
    fn matches_for_regex(&self, pattern: &str) -> Result<Vec<String>>;

    /// `"true"` or `"false"`, ignoring case and surrounding whitespace
    fn to_bool(&self) -> Option<bool>;

    fn removed_white_spaces(&self) -> String;

    /// `2077-0024-00-3102575766` style grouping for texts longer than 19
    /// characters. No validation is done.
    fn formatted_account_number(&self) -> String;

    /// `ES91 2100 0418 4502 0005 1332` style grouping for texts longer than
    /// 23 characters. No validation is done.
    fn formatted_iban_number(&self) -> String;

    /// Any character outside the Basic Multilingual Plane
    fn contains_emoji(&self) -> bool;
}

impl StrExt for str {
    fn length(&self) -> usize {
        self.chars().count()
    }

    fn char_list(&self) -> Vec<String> {
        self.chars().map(String::from).collect()
    }

    fn char_set(&self) -> BTreeSet<String> {
        self.chars().map(String::from).collect()
    }

    fn first_character(&self) -> Option<char> {
        self.chars().next()
    }

    fn last_character(&self) -> Option<char> {
        self.chars().next_back()
    }

    fn is_empty_field(&self) -> bool {
        self.trim().is_empty()
    }

    fn decoded_html_entities(&self) -> String {
        decode_html_entities_str(self)
    }

    fn base64(&self) -> String {
        STANDARD.encode(self.as_bytes())
    }

    fn count_of_words(&self) -> usize {
        WORD_PATTERN.find_iter(self).count()
    }

    fn count_of_paragraphs(&self) -> usize {
        self.trim().matches('\n').count() + 1
    }

    fn extract_urls(&self) -> Vec<Url> {
        URL_CANDIDATE_PATTERN
            .find_iter(self)
            .filter_map(|m| {
                let candidate = m
                    .as_str()
                    .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | ')'));
                let url = if candidate.starts_with("www.") {
                    Url::parse(&format!("http://{}", candidate))
                } else {
                    Url::parse(candidate)
                };
                match url {
                    Ok(url) if url.host_str().is_some_and(|h| !h.is_empty()) => Some(url),
                    Ok(_) => None,
                    Err(e) => {
                        log::debug!("Skipping URL candidate {:?}: {}", candidate, e);
                        None
                    }
                }
            })
            .collect()
    }

    fn path_extension(&self) -> Option<String> {
        Path::new(self)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_string)
    }

    fn last_path_component(&self) -> Option<String> {
        Path::new(self)
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
    }

    fn removed_first_char(&self) -> String {
        let mut chars = self.chars();
        chars.next();
        chars.as_str().to_string()
    }

    fn removed_last_char(&self) -> String {
        let mut chars = self.chars();
        chars.next_back();
        chars.as_str().to_string()
    }

    fn trimmed(&self) -> String {
        self.trim().to_string()
    }

    fn reversed(&self) -> String {
        self.chars().rev().collect()
    }

    fn replaced(&self, target: &str, with: &str) -> String {
        if target.is_empty() {
            return self.to_string();
        }
        self.replace(target, with)
    }

    fn splitted(&self, separator: &str) -> Vec<String> {
        if separator.is_empty() {
            return keep_non_blank(std::iter::once(self));
        }
        keep_non_blank(self.split(separator))
    }

    fn splitted_by<F: Fn(char) -> bool>(&self, is_separator: F) -> Vec<String> {
        keep_non_blank(self.split(is_separator))
    }

    fn count_substring(&self, substring: &str) -> usize {
        if substring.is_empty() {
            return 0;
        }
        self.matches(substring).count()
    }

    fn uppercased_first_letter(&self) -> String {
        map_chars(self, 0..1, str::to_uppercase)
    }

    fn uppercased_prefix(&self, count: usize) -> String {
        map_chars(self, 0..count, str::to_uppercase)
    }

    fn uppercased_suffix(&self, count: usize) -> String {
        let len = self.length();
        map_chars(self, len.saturating_sub(count)..len, str::to_uppercase)
    }

    fn uppercased_range(&self, range: Range<usize>) -> String {
        map_chars(self, range, str::to_uppercase)
    }

    fn lowercased_first_letter(&self) -> String {
        map_chars(self, 0..1, str::to_lowercase)
    }

    fn lowercased_prefix(&self, count: usize) -> String {
        map_chars(self, 0..count, str::to_lowercase)
    }

    fn lowercased_suffix(&self, count: usize) -> String {
        let len = self.length();
        map_chars(self, len.saturating_sub(count)..len, str::to_lowercase)
    }

    fn lowercased_range(&self, range: Range<usize>) -> String {
        map_chars(self, range, str::to_lowercase)
    }

    fn index_of(&self, c: char) -> Option<usize> {
        self.chars().position(|x| x == c)
    }

    fn substring_from(&self, from: usize) -> Result<String> {
        let start = byte_offset(self, from)?;
        Ok(self[start..].to_string())
    }

    fn substring_to(&self, to: usize) -> Result<String> {
        let end = byte_offset(self, to)?;
        Ok(self[..end].to_string())
    }

    fn substring_with(&self, range: Range<usize>) -> Result<String> {
        if range.start > range.end {
            return Err(TextError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        let start = byte_offset(self, range.start)?;
        let end = byte_offset(self, range.end)?;
        Ok(self[start..end].to_string())
    }

    fn char_at(&self, index: usize) -> Result<char> {
        self.chars().nth(index).ok_or(TextError::OutOfBounds {
            index,
            len: self.length(),
        })
    }

    fn slice_inclusive(&self, range: RangeInclusive<usize>) -> Result<String> {
        let (start, end) = range.into_inner();
        self.substring_with(start..end.saturating_add(1))
    }

    fn encode_url(&self) -> Option<Url> {
        Url::parse(self)
            .or_else(|_| Url::parse(&percent_encode(self, QUERY_ALLOWED)))
            .ok()
    }

    fn added_percent_encoding_for_url(&self) -> String {
        percent_encode(self, UNRESERVED)
    }

    fn utf16_range(&self, range: Range<usize>) -> Option<Range<usize>> {
        let inner = self.get(range.clone())?;
        let start = self[..range.start].encode_utf16().count();
        Some(start..start + inner.encode_utf16().count())
    }

    fn byte_range_from_utf16(&self, range: Range<usize>) -> Option<Range<usize>> {
        if range.start > range.end {
            return None;
        }
        let start = byte_offset_for_utf16(self, range.start)?;
        let end = byte_offset_for_utf16(self, range.end)?;
        Some(start..end)
    }

    fn is_email(&self) -> bool {
        EMAIL_PATTERN.is_match(self)
    }

    fn is_number(&self) -> bool {
        self.chars().all(|c| c.is_ascii_digit())
    }

    fn contains_sensitive(&self, s: &str) -> bool {
        self.contains(s)
    }

    fn contains_not_sensitive(&self, s: &str) -> bool {
        self.to_lowercase().contains(&s.to_lowercase())
    }

    fn matches_for_regex(&self, pattern: &str) -> Result<Vec<String>> {
        let regex = Regex::new(pattern)?;
        Ok(regex
            .find_iter(self)
            .map(|m| m.as_str().to_string())
            .collect())
    }

    fn to_bool(&self) -> Option<bool> {
        match self.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn removed_white_spaces(&self) -> String {
        self.replace(' ', "")
    }

    fn formatted_account_number(&self) -> String {
        if self.length() <= 19 {
            return self.to_string();
        }
        group_chars(self, &[0..4, 4..8, 8..10, 10..20], "-")
    }

    fn formatted_iban_number(&self) -> String {
        if self.length() <= 23 {
            return self.to_string();
        }
        group_chars(self, &[0..4, 4..8, 8..12, 12..16, 16..20, 20..24], " ")
    }

    fn contains_emoji(&self) -> bool {
        self.chars().any(|c| c.len_utf16() == 2)
    }
}

/// Byte offset of character `index`; `index == length` is the end of text
fn byte_offset(s: &str, index: usize) -> Result<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(index)
        .ok_or(TextError::OutOfBounds {
            index,
            len: s.chars().count(),
        })
}

fn byte_offset_for_utf16(s: &str, target: usize) -> Option<usize> {
    let mut units = 0;
    for (i, c) in s.char_indices() {
        if units == target {
            return Some(i);
        }
        if units > target {
            return None;
        }
        units += c.len_utf16();
    }
    (units == target).then_some(s.len())
}

/// Apply `f` to the characters in `range`, clamped to the text
fn map_chars(s: &str, range: Range<usize>, f: fn(&str) -> String) -> String {
    let len = s.chars().count();
    let end = range.end.min(len);
    if range.start >= end {
        return s.to_string();
    }
    // Both bounds are within 0..=len after clamping
    let (Ok(start), Ok(end)) = (byte_offset(s, range.start), byte_offset(s, end)) else {
        return s.to_string();
    };
    format!("{}{}{}", &s[..start], f(&s[start..end]), &s[end..])
}

fn group_chars(s: &str, groups: &[Range<usize>], separator: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    groups
        .iter()
        .map(|r| chars[r.clone()].iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(separator)
}

fn keep_non_blank<'a>(pieces: impl Iterator<Item = &'a str>) -> Vec<String> {
    pieces
        .filter(|piece| !piece.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn percent_encode(s: &str, allowed: &[u8]) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if b.is_ascii_alphanumeric() || allowed.contains(&b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_chars() {
        assert_eq!("String Test".length(), 11);
        assert_eq!("Hola".char_list(), vec!["H", "o", "l", "a"]);
        assert_eq!("Hola ".char_list()[4], " ");
        assert_eq!("añ👍".length(), 3);
    }

    #[test]
    fn test_char_set() {
        let set = "Hola Hola hola".char_set();
        assert_eq!(set.len(), 6);
        assert!(set.contains("H"));
        assert!(set.contains("h"));
    }

    #[test]
    fn test_first_last_character() {
        assert_eq!("Hola".first_character(), Some('H'));
        assert_eq!("Hola,".last_character(), Some(','));
        assert_eq!("".first_character(), None);
        assert_eq!("".last_character(), None);
    }

    #[test]
    fn test_is_empty_field() {
        assert!("    ".is_empty_field());
        assert!("".is_empty_field());
        assert!(!" a ".is_empty_field());
    }

    #[test]
    fn test_decoded_html_entities() {
        assert_eq!("&gt; Hola".decoded_html_entities().first_character(), Some('>'));
    }

    #[test]
    fn test_base64() {
        assert_eq!("Hola".base64(), "SG9sYQ==");
        assert_eq!("".base64(), "");
    }

    #[test]
    fn test_count_of_words() {
        let text = "Lorem fistrum llevame al sircoo por la gloria de mi madre hasta luego Lucas";
        assert_eq!(text.count_of_words(), 14);
        assert_eq!("".count_of_words(), 0);
    }

    #[test]
    fn test_count_of_paragraphs() {
        let text = "Lorem fistrum jarl torpedo pupita \n qué dise usteer a peich fistro pupita.";
        assert_eq!(text.count_of_paragraphs(), 2);
        assert_eq!("\n\nsingle\n\n".count_of_paragraphs(), 1);
    }

    #[test]
    fn test_extract_urls() {
        let text = "http://google.com http fpt:// http://www.albertarroyo.com";
        let urls = text.extract_urls();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].as_str(), "http://google.com/");
        assert_eq!(urls[1].host_str(), Some("www.albertarroyo.com"));
    }

    #[test]
    fn test_extract_urls_trailing_punctuation_and_www() {
        let urls = "See https://example.org/docs, or www.rust-lang.org.".extract_urls();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].path(), "/docs");
        assert_eq!(urls[1].host_str(), Some("www.rust-lang.org"));
    }

    #[test]
    fn test_path_helpers() {
        let url = "http://www.albertarroyo.com/ios/swift/AATTools/docs/swift_output/index.html";
        assert_eq!(url.path_extension().as_deref(), Some("html"));
        assert_eq!(url.last_path_component().as_deref(), Some("index.html"));
        assert_eq!("README".path_extension(), None);
    }

    #[test]
    fn test_remove_first_last_char() {
        assert_eq!("Hola".removed_first_char(), "ola");
        assert_eq!("Hola".removed_last_char(), "Hol");
        assert_eq!("".removed_first_char(), "");
        assert_eq!("é".removed_last_char(), "");
    }

    #[test]
    fn test_trimmed_and_reversed() {
        assert_eq!(" Hola \n".trimmed(), "Hola");
        assert_eq!("Hola".reversed(), "aloH");
        assert_eq!("aaBBaa".reversed(), "aaBBaa");
    }

    #[test]
    fn test_replaced() {
        assert_eq!("a b c".replaced(" ", "+"), "a+b+c");
        assert_eq!("abc".replaced("", "+"), "abc");
    }

    #[test]
    fn test_splitted() {
        assert_eq!("One more thing...".splitted(" ")[2], "thing...");
        assert_eq!("Hey-Ho-Lets-Go".splitted("-"), vec!["Hey", "Ho", "Lets", "Go"]);
        assert_eq!("a--b- -c".splitted("-"), vec!["a", "b", "c"]);
        assert_eq!(
            "HeyHoLetsGo".splitted_by(|c| c.is_lowercase()),
            vec!["H", "H", "L", "G"]
        );
    }

    #[test]
    fn test_count_substring() {
        assert_eq!("Hola hola".count_substring("o"), 2);
        assert_eq!("aaaa".count_substring("aa"), 2);
        assert_eq!("abc".count_substring(""), 0);
    }

    #[test]
    fn test_case_first_letter() {
        assert_eq!("hola".uppercased_first_letter(), "Hola");
        assert_eq!("Hola".lowercased_first_letter(), "hola");
        assert_eq!("".uppercased_first_letter(), "");
        assert_eq!("ßa".uppercased_first_letter(), "SSa");
    }

    #[test]
    fn test_case_prefix_suffix() {
        assert_eq!(
            "es91 2100 0418 4502 0005 1332".uppercased_prefix(2),
            "ES91 2100 0418 4502 0005 1332"
        );
        assert_eq!(
            "ES91 2100 0418 4502 0005 1332".lowercased_prefix(2),
            "es91 2100 0418 4502 0005 1332"
        );
        assert_eq!("1000l".uppercased_suffix(1), "1000L");
        assert_eq!("101mm".uppercased_suffix(2), "101MM");
        assert_eq!("1000M".lowercased_suffix(1), "1000m");
        assert_eq!("101KG".lowercased_suffix(2), "101kg");
        assert_eq!("abc".uppercased_prefix(10), "ABC");
        assert_eq!("abc".uppercased_suffix(0), "abc");
    }

    #[test]
    fn test_case_range() {
        assert_eq!("hola lol .".uppercased_range(5..8), "hola LOL .");
        assert_eq!("hola LOL .".lowercased_range(5..8), "hola lol .");
        assert_eq!("hola".uppercased_range(2..100), "hoLA");
        assert_eq!("hola".uppercased_range(10..12), "hola");
    }

    #[test]
    fn test_index_of() {
        assert_eq!("HeyHoLetsGo".index_of('L'), Some(5));
        assert_eq!("HeyHoLetsGo".index_of('z'), None);
    }

    #[test]
    fn test_substrings() {
        let text = "Hello, world";
        assert_eq!(text.substring_from(7).unwrap(), "world");
        assert_eq!(text.substring_to(5).unwrap(), "Hello");
        assert_eq!(text.substring_with(7..11).unwrap(), "worl");
        assert_eq!(text.substring_from(12).unwrap(), "");
    }

    #[test]
    fn test_substring_errors() {
        let text = "Hola";
        assert!(matches!(
            text.substring_from(5),
            Err(TextError::OutOfBounds { index: 5, len: 4 })
        ));
        assert!(matches!(
            text.substring_with(3..1),
            Err(TextError::InvalidRange { start: 3, end: 1 })
        ));
        assert!(text.char_at(4).is_err());
    }

    #[test]
    fn test_indexing() {
        let digits = "0123456789";
        assert_eq!(digits.char_at(2).unwrap(), '2');
        assert_eq!(digits.substring_with(3..5).unwrap(), "34");
        assert_eq!(digits.slice_inclusive(8..=9).unwrap(), "89");
        assert_eq!("añb".char_at(1).unwrap(), 'ñ');
    }

    #[test]
    fn test_encode_url() {
        let url = "https://some.website.com/path/to/page?a=1&b=2".encode_url().unwrap();
        assert_eq!(url.path(), "/path/to/page");
        assert_eq!(url.path_segments().map(|s| s.count()), Some(3));
        assert_eq!(url.query(), Some("a=1&b=2"));
        assert_eq!(url.host_str(), Some("some.website.com"));
        assert!("not a url".encode_url().is_none());
    }

    #[test]
    fn test_percent_encoding() {
        assert_eq!("path/to/page".added_percent_encoding_for_url(), "path%2Fto%2Fpage");
        assert_eq!("a b~c".added_percent_encoding_for_url(), "a%20b~c");
        assert_eq!("ñ".added_percent_encoding_for_url(), "%C3%B1");
    }

    #[test]
    fn test_utf16_range_conversions() {
        let text = "a👁b❤️c";
        let bytes = text.find("❤️").map(|i| i..i + "❤️".len()).unwrap();
        let utf16 = text.utf16_range(bytes.clone()).unwrap();
        assert_eq!(utf16, 4..6);
        assert_eq!(text.byte_range_from_utf16(utf16), Some(bytes.clone()));
        assert_eq!(&text[bytes], "❤️");

        // splitting the surrogate pair of 👁
        assert_eq!(text.byte_range_from_utf16(2..3), None);
        assert_eq!(text.byte_range_from_utf16(0..100), None);
        // not a char boundary
        assert_eq!(text.utf16_range(2..3), None);
    }

    #[test]
    fn test_is_email() {
        assert!("a@gmail.com".is_email());
        assert!(!"a@a.".is_email());
        assert!(!"contact a@gmail.com".is_email());
    }

    #[test]
    fn test_is_number() {
        assert!("1234567980".is_number());
        assert!(!"hola".is_number());
        assert!(!"12.5".is_number());
    }

    #[test]
    fn test_contains() {
        let text = "Hola hola HOLa";
        assert!(text.contains_sensitive("HOLa"));
        assert!(!text.contains_sensitive("HolA"));
        assert!("Hola hOla HOLa".contains_not_sensitive("hola"));
        assert!("Hola".contains_not_sensitive("HOLA"));
    }

    #[test]
    fn test_matches_for_regex() {
        assert_eq!(
            "H3yH0L3tsG0".matches_for_regex("[0-9]").unwrap(),
            vec!["3", "0", "3", "0"]
        );
        assert!(matches!(
            "abc".matches_for_regex("(unclosed"),
            Err(TextError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_to_bool() {
        assert_eq!("true".to_bool(), Some(true));
        assert_eq!(" FALSE ".to_bool(), Some(false));
        assert_eq!("yes".to_bool(), None);
    }

    #[test]
    fn test_account_and_iban_formatting() {
        let account = "2077 0024 00 3102575766".removed_white_spaces();
        assert_eq!(account.formatted_account_number(), "2077-0024-00-3102575766");
        assert_eq!("12345".formatted_account_number(), "12345");

        assert_eq!(
            "ES9121000418450200051332".formatted_iban_number(),
            "ES91 2100 0418 4502 0005 1332"
        );
        assert_eq!("ES91".formatted_iban_number(), "ES91");
    }

    #[test]
    fn test_contains_emoji() {
        let text = "Incididunt tempor ad 😃 sint Lorem amet 🍷 Elit ut dolore ad est qui magna 🍻";
        assert!(text.contains_emoji());
        assert!(!"plain ñ text".contains_emoji());
    }
}
