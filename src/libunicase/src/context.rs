// Copyright (c) 2026, Unistring developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Casing context classification.
//!
//! Context-sensitive casing rules (the Greek final sigma) look at what surrounds a character:
//! is the nearest neighbor that is not case-ignorable a cased letter? This module answers that
//! question for any cursor position, scanning scalar by scalar away from the cursor and
//! skipping the case-ignorable characters.
//!
//! Classification is a pure function of the scalar sequence and the cursor position. It never
//! depends on how earlier characters were mapped, which is what makes the prefix and suffix
//! context functions usable for chunked processing: the context at a chunk boundary can be
//! computed from the boundary region alone and passed into the engine invocation for the next
//! chunk, with results identical to a whole-string scan.

use libunistr::codec::{decode_char, decode_char_before, CodeUnit};

use crate::tables::casing_properties;

//
// Casing context
//

/// Classification of the nearest relevant neighbor of a cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasingContext {
    /// Only case-ignorable characters (or nothing at all) lie on this side.
    NoRelevantNeighbor,

    /// The nearest non-ignorable character is a cased letter.
    CasedLetter,

    /// The nearest non-ignorable character is not a cased letter.
    UncasedCharacter,
}

impl CasingContext {
    fn classify(c: char) -> CasingContext {
        if casing_properties::cased(c) {
            CasingContext::CasedLetter
        } else {
            CasingContext::UncasedCharacter
        }
    }
}

//
// Classifier
//

/// Compute the casing context before position `pos` of an encoded buffer.
///
/// # Panics
///
/// Panics if `pos` is past the end of the buffer.
pub fn context_before<U: CodeUnit>(s: &[U], pos: usize) -> CasingContext {
    casing_prefix_context(s, pos)
}

/// Compute the casing context after position `pos` of an encoded buffer.
///
/// # Panics
///
/// Panics if `pos` is past the end of the buffer.
pub fn context_after<U: CodeUnit>(s: &[U], pos: usize) -> CasingContext {
    casing_suffix_context(s, s.len() - pos)
}

//
// Prefix and suffix context extraction
//

/// Compute the casing context which a prefix implies for the text following it.
///
/// This is the before-context to seed a chunked case mapping call with: if a document is
/// processed as `s[..prefix_len]` followed by `s[prefix_len..]`, the result here is exactly
/// the context a whole-string scan would see at that position. Only the tail of the prefix
/// is examined.
///
/// # Panics
///
/// Panics if `prefix_len` is past the end of the buffer.
pub fn casing_prefix_context<U: CodeUnit>(s: &[U], prefix_len: usize) -> CasingContext {
    casing_prefix_context_from(s, prefix_len, CasingContext::NoRelevantNeighbor)
}

/// Compute the casing context of a prefix preceded by further chunks.
///
/// Like [`casing_prefix_context`], but an entirely case-ignorable prefix resolves to
/// `preceding` (the context computed for the chunk before this one) instead of
/// [`CasingContext::NoRelevantNeighbor`].
pub fn casing_prefix_context_from<U: CodeUnit>(
    s: &[U],
    prefix_len: usize,
    preceding: CasingContext,
) -> CasingContext {
    assert!(prefix_len <= s.len(), "prefix length out of bounds");

    let mut pos = prefix_len;

    while pos > 0 {
        let c = match decode_char_before(s, pos) {
            Ok((c, n)) => {
                pos -= n;
                c
            }
            // Undecodable junk is not a letter; the mapping engine reports the error.
            Err(_) => return CasingContext::UncasedCharacter,
        };

        if !casing_properties::case_ignorable(c) {
            return CasingContext::classify(c);
        }
    }

    preceding
}

/// Compute the casing context which a suffix implies for the text preceding it.
///
/// This is the after-context seen at the boundary when a document is processed as
/// `s[..s.len() - suffix_len]` followed by the suffix. Only the head of the suffix is
/// examined.
///
/// # Panics
///
/// Panics if `suffix_len` is past the end of the buffer.
pub fn casing_suffix_context<U: CodeUnit>(s: &[U], suffix_len: usize) -> CasingContext {
    casing_suffix_context_from(s, suffix_len, CasingContext::NoRelevantNeighbor)
}

/// Compute the casing context of a suffix followed by further chunks.
///
/// Like [`casing_suffix_context`], but an entirely case-ignorable suffix resolves to
/// `following` (the context computed for the chunk after this one) instead of
/// [`CasingContext::NoRelevantNeighbor`].
pub fn casing_suffix_context_from<U: CodeUnit>(
    s: &[U],
    suffix_len: usize,
    following: CasingContext,
) -> CasingContext {
    assert!(suffix_len <= s.len(), "suffix length out of bounds");

    let mut pos = s.len() - suffix_len;

    while pos < s.len() {
        let c = match decode_char(s, pos) {
            Ok((c, n)) => {
                pos += n;
                c
            }
            // Undecodable junk is not a letter; the mapping engine reports the error.
            Err(_) => return CasingContext::UncasedCharacter,
        };

        if !casing_properties::case_ignorable(c) {
            return CasingContext::classify(c);
        }
    }

    following
}
