//! Property tests for entity decoding

use proptest::prelude::*;
use textkit::decode::decode_html_entities;
use textkit::entities::{self, HTML4_ENTITIES, XML_ENTITIES};

fn known_entities() -> Vec<String> {
    XML_ENTITIES
        .iter()
        .chain(HTML4_ENTITIES.iter())
        .map(|(name, _)| name.to_string())
        .chain(["&#64;", "&#x20ac;", "&#X41;", "&#128512;"].map(String::from))
        .collect()
}

/// Plain text, unknown names and stray `&`, none of which decode
fn unrecognized_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{1,4}",
        "&[a-z]{1,6};".prop_filter("known entity", |e| entities::lookup(e).is_none()),
        Just("&".to_string()),
        Just("&#;".to_string()),
        Just("&#xzz;".to_string()),
    ]
}

/// A piece of text paired with how many entities it holds
fn counted_piece() -> impl Strategy<Value = (String, usize)> {
    prop_oneof![
        "[a-z ]{0,4}".prop_map(|text| (text, 0)),
        prop::sample::select(known_entities()).prop_map(|entity| (entity, 1)),
    ]
}

proptest! {
    #[test]
    fn text_without_ampersand_is_unchanged(s in "[^&]*") {
        let decoded = decode_html_entities(&s);
        prop_assert_eq!(&decoded.text, &s);
        prop_assert!(decoded.spans.is_empty());
        prop_assert!(decoded.sources.is_empty());
    }

    #[test]
    fn decoding_never_panics(s in "\\PC*") {
        let _ = decode_html_entities(&s);
    }

    #[test]
    fn spans_are_single_chars_in_order(s in "([a-z ]|&amp;|&lt;|&#[0-9]{1,7};|&#x[0-9a-fA-F]{1,6};|&[a-z]{1,6};|&)*") {
        let decoded = decode_html_entities(&s);
        let output_len = decoded.text.chars().count();

        prop_assert_eq!(decoded.spans.len(), decoded.sources.len());
        for span in &decoded.spans {
            prop_assert_eq!(span.end - span.start, 1);
            prop_assert!(span.end <= output_len);
        }
        for pair in decoded.spans.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn output_is_never_longer(s in "([a-z]|&[a-z#0-9]{0,8};?)*") {
        let decoded = decode_html_entities(&s);
        prop_assert!(decoded.text.chars().count() <= s.chars().count());
    }

    #[test]
    fn redecoding_settled_output_is_unchanged(s in "([a-z ]|&amp;|&lt;|&amp;amp;|&|;|#|x|[0-9])*") {
        let decoded = decode_html_entities(&s);
        let again = decode_html_entities(&decoded.text);
        if again.spans.is_empty() {
            prop_assert_eq!(&again.text, &decoded.text);
        }
    }

    #[test]
    fn unrecognized_references_are_kept(pieces in prop::collection::vec(unrecognized_piece(), 0..12)) {
        let s = pieces.concat();
        let decoded = decode_html_entities(&s);
        prop_assert_eq!(&decoded.text, &s);
        prop_assert!(decoded.spans.is_empty());
    }

    #[test]
    fn one_span_per_recognized_entity(pieces in prop::collection::vec(counted_piece(), 0..12)) {
        let s: String = pieces.iter().map(|(text, _)| text.as_str()).collect();
        let expected: usize = pieces.iter().map(|(_, count)| count).sum();

        let decoded = decode_html_entities(&s);
        prop_assert_eq!(decoded.spans.len(), expected);
        prop_assert_eq!(decoded.sources.len(), expected);
        let shrunk: usize = decoded.sources.iter().map(|r| r.len() - 1).sum();
        prop_assert_eq!(decoded.text.chars().count(), s.chars().count() - shrunk);
    }
}
