// Copyright (c) 2026, Unistring developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Case mapping engine tests.

use pretty_assertions::assert_eq;

use libunistr::codec::DecodeError;

use libunicase::casemap::{
    casemap, casemap_into, to_lower, to_lower_str, to_title, to_title_str, to_upper,
    to_upper_str, CaseMapError, CaseMode, Normalization,
};
use libunicase::context::{casing_prefix_context, casing_suffix_context};
use libunicase::locale::Language;

use libunicase::context::CasingContext::NoRelevantNeighbor;

//
// Simple mappings
//

#[test]
fn ascii() {
    assert_eq!(to_upper_str("Hello, World!", None), "HELLO, WORLD!");
    assert_eq!(to_lower_str("Hello, World!", None), "hello, world!");
    assert_eq!(to_title_str("hello, world!", None), "Hello, World!");
}

#[test]
fn unmapped_characters_map_to_themselves() {
    assert_eq!(to_upper_str("\u{4E2D}\u{6587} 123", None), "\u{4E2D}\u{6587} 123");
    assert_eq!(to_lower_str("\u{05D0}\u{05D1}", None), "\u{05D0}\u{05D1}");
}

//
// Greek final sigma
//

#[test]
fn final_sigma_takes_the_final_form() {
    assert_eq!(to_lower_str("ΟΔΥΣΣΕΥΣ", None), "οδυσσευς");
    assert_eq!(to_lower_str("ΣΟΦΟΣ ΣΟΦΟΣ", None), "σοφος σοφος");
}

#[test]
fn word_initial_sigma_is_not_final() {
    // No cased letter before the sigma, so the final-form condition does not hold.
    assert_eq!(to_lower_str("Σ", None), "σ");
    assert_eq!(to_lower_str("ΑΣΒ", None), "ασβ");
}

#[test]
fn sigma_before_trailing_punctuation_is_final() {
    assert_eq!(to_lower_str("ΟΔΥΣΣΕΥΣ!", None), "οδυσσευς!");

    // The apostrophe is case-ignorable: the scan looks through it and still finds no
    // cased letter, so the sigma is final.
    assert_eq!(to_lower_str("ΑΣ'", None), "ας'");
}

#[test]
fn seeded_contexts_finalize_sigma_at_chunk_boundaries() {
    let s = "ΟΔΥΣΣΕΥΣ".as_bytes();
    let whole = to_lower(s, None).unwrap();

    let boundaries: Vec<usize> = (0..=8).map(|i| i * 2).collect();

    for &k in &boundaries {
        let (head, tail) = s.split_at(k);

        let before = casing_prefix_context(head, head.len());
        let following = casing_suffix_context(tail, tail.len());

        let mut chunked =
            casemap(head, NoRelevantNeighbor, following, None, CaseMode::Lower, None).unwrap();
        chunked.extend(
            casemap(tail, before, NoRelevantNeighbor, None, CaseMode::Lower, None).unwrap(),
        );

        assert_eq!(chunked, whole);
    }
}

//
// Expanding mappings
//

#[test]
fn sharp_s_uppercases_to_a_letter_pair() {
    assert_eq!(to_upper_str("straße", None), "STRASSE");
    assert_eq!(to_title_str("ßen", None), "Ssen");

    // The expansion is not bijective: lowering the result does not reconstitute ß.
    assert_eq!(to_lower_str(&to_upper_str("ß", None), None), "ss");
}

#[test]
fn ligatures_expand_in_both_directions() {
    assert_eq!(to_upper_str("ﬂy", None), "FLY");
    assert_eq!(to_title_str("ﬂy", None), "Fly");
    assert_eq!(to_upper_str("ﬃ", None), "FFI");
}

#[test]
fn armenian_ech_yiwn_titlecases_specially() {
    assert_eq!(to_upper_str("\u{0587}", None), "\u{0535}\u{0552}");
    assert_eq!(to_title_str("\u{0587}", None), "\u{0535}\u{0582}");
}

//
// Locale-specific rules
//

#[test]
fn turkish_dotted_and_dotless_i() {
    assert_eq!(to_upper_str("i", Some(Language::Turkish)), "\u{0130}");
    assert_eq!(to_upper_str("i", None), "I");

    assert_eq!(to_lower_str("I", Some(Language::Turkish)), "\u{0131}");
    assert_eq!(to_lower_str("I", None), "i");

    assert_eq!(to_lower_str("\u{0130}", Some(Language::Turkish)), "i");
    assert_eq!(to_lower_str("\u{0130}", None), "i\u{0307}");

    assert_eq!(to_upper_str("istanbul", Some(Language::Turkish)), "\u{0130}STANBUL");
    assert_eq!(to_title_str("istanbul", Some(Language::Turkish)), "\u{0130}stanbul");
}

#[test]
fn azerbaijani_follows_turkish() {
    assert_eq!(to_upper_str("i", Some(Language::Azerbaijani)), "\u{0130}");
    assert_eq!(to_lower_str("I", Some(Language::Azerbaijani)), "\u{0131}");
}

#[test]
fn lithuanian_keeps_the_dot_explicit() {
    assert_eq!(to_lower_str("\u{00CC}", Some(Language::Lithuanian)), "i\u{0307}\u{0300}");
    assert_eq!(to_lower_str("\u{00CC}", None), "\u{00EC}");
}

#[test]
fn language_tags_resolve_by_primary_subtag() {
    assert_eq!(Language::from_tag("tr"), Some(Language::Turkish));
    assert_eq!(Language::from_tag("tr-TR"), Some(Language::Turkish));
    assert_eq!(Language::from_tag("az_AZ.UTF-8"), Some(Language::Azerbaijani));
    assert_eq!(Language::from_tag("LT"), Some(Language::Lithuanian));
    assert_eq!(Language::from_tag("en"), None);
    assert_eq!(Language::from_tag(""), None);
}

#[test]
fn primary_subtags_round_trip() {
    for &language in &[Language::Turkish, Language::Azerbaijani, Language::Lithuanian] {
        assert_eq!(Language::from_tag(language.tag()), Some(language));
    }
}

//
// Title casing
//

#[test]
fn first_letter_of_each_word_is_titlecased() {
    assert_eq!(to_title_str("the quick fox", None), "The Quick Fox");
    assert_eq!(to_title_str("MIXED case INPUT", None), "Mixed Case Input");
}

#[test]
fn word_internal_punctuation_does_not_restart_a_word() {
    assert_eq!(to_title_str("don't stop", None), "Don't Stop");
    assert_eq!(to_title_str("o'connor", None), "O'connor");
}

#[test]
fn any_other_uncased_character_ends_the_word() {
    assert_eq!(to_title_str("foo1bar", None), "Foo1Bar");
    assert_eq!(to_title_str("x-ray", None), "X-Ray");
}

#[test]
fn digraphs_use_their_titlecase_letter() {
    assert_eq!(to_upper_str("\u{01C6}", None), "\u{01C4}");
    assert_eq!(to_title_str("\u{01C6}em", None), "\u{01C5}em");
}

#[test]
fn title_word_state_is_seeded_from_the_before_context() {
    let s = "ab cd".as_bytes();
    let whole = to_title(s, None).unwrap();

    let (head, tail) = s.split_at(1);
    let before = casing_prefix_context(head, head.len());

    let mut chunked =
        casemap(head, NoRelevantNeighbor, NoRelevantNeighbor, None, CaseMode::Title, None)
            .unwrap();
    chunked
        .extend(casemap(tail, before, NoRelevantNeighbor, None, CaseMode::Title, None).unwrap());

    assert_eq!(chunked, whole);
}

//
// Width independence
//

#[test]
fn mapping_is_width_independent() {
    let s16: Vec<u16> = "ΟΔΥΣΣΕΥΣ".encode_utf16().collect();
    let expected16: Vec<u16> = "οδυσσευς".encode_utf16().collect();
    assert_eq!(to_lower(&s16[..], None), Ok(expected16));

    let s32: Vec<u32> = "straße".chars().map(u32::from).collect();
    let expected32: Vec<u32> = "STRASSE".chars().map(u32::from).collect();
    assert_eq!(to_upper(&s32[..], None), Ok(expected32));
}

//
// Normalization
//

#[test]
fn output_can_be_renormalized() {
    let s = "a\u{0301}b".as_bytes();

    let plain = casemap(s, NoRelevantNeighbor, NoRelevantNeighbor, None, CaseMode::Upper, None);
    assert_eq!(plain, Ok("A\u{0301}B".as_bytes().to_vec()));

    let composed = casemap(
        s,
        NoRelevantNeighbor,
        NoRelevantNeighbor,
        None,
        CaseMode::Upper,
        Some(Normalization::Nfc),
    );
    assert_eq!(composed, Ok("\u{00C1}B".as_bytes().to_vec()));
}

//
// Errors and fixed-capacity output
//

#[test]
fn malformed_input_aborts_with_its_offset() {
    assert_eq!(to_lower::<u8>(&[0x41, 0xFF], None), Err(DecodeError::Malformed { offset: 1 }));
    assert_eq!(to_lower::<u8>(&[0x41, 0xC3], None), Err(DecodeError::Incomplete { offset: 1 }));
}

#[test]
fn fixed_capacity_binding_reports_required_units() {
    let s = "straße".as_bytes();

    let mut small = [0_u8; 4];
    let result = casemap_into(
        s,
        NoRelevantNeighbor,
        NoRelevantNeighbor,
        None,
        CaseMode::Upper,
        None,
        &mut small,
    );
    assert_eq!(result, Err(CaseMapError::InsufficientCapacity { required: 7 }));

    let mut enough = [0_u8; 16];
    let written = casemap_into(
        s,
        NoRelevantNeighbor,
        NoRelevantNeighbor,
        None,
        CaseMode::Upper,
        None,
        &mut enough,
    )
    .unwrap();
    assert_eq!(&enough[..written], "STRASSE".as_bytes());
}

#[test]
fn capacity_errors_are_distinct_from_decode_errors() {
    let mut tiny = [0_u8; 1];
    let result = casemap_into(
        &[0xFF],
        NoRelevantNeighbor,
        NoRelevantNeighbor,
        None,
        CaseMode::Lower,
        None,
        &mut tiny,
    );
    assert_eq!(result, Err(CaseMapError::Decode(DecodeError::Malformed { offset: 0 })));
}

//
// Aggregate properties
//

#[test]
fn uppercasing_twice_changes_nothing_more() {
    for s in &["straße", "ΟΔΥΣΣΕΥΣ", "don't stop", "ﬂy ﬃ", "i\u{0130}\u{0131}I"] {
        let once = to_upper_str(s, None);
        assert_eq!(to_upper_str(&once, None), once);
        assert!(!once.chars().any(char::is_lowercase));
    }
}
