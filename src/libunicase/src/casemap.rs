// Copyright (c) 2026, Unistring developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Case mapping engine.
//!
//! The engine drives the end-to-end transform: decode a scalar, classify its casing context,
//! select the applicable rule (special casing rules by precedence, then the default tables,
//! then identity), append the replacement scalars, re-encode, advance. A mapping may expand
//! one input character into several output characters, so the result is materialized into a
//! fresh buffer rather than rewritten in place.
//!
//! Mapped output is not necessarily in any canonical form even when the input was, so the
//! whole result can optionally be piped through a normalization form before it is returned.

use smallvec::{smallvec, SmallVec};
use thiserror::Error;
use tracing::trace;

use libunistr::codec::{decode_char, push_char, CodeUnit, DecodeError};

use crate::context::{casing_suffix_context_from, CasingContext};
use crate::locale::Language;
use crate::special_casing;
use crate::special_casing::Condition;
use crate::tables::{casing_properties, title_mappings};

//
// Mapping parameters
//

/// Direction of a case mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Map every character to its uppercase form.
    Upper,

    /// Map every character to its lowercase form.
    Lower,

    /// Map the first cased letter of every word to its titlecase form and the rest of the
    /// word to lowercase.
    Title,
}

/// Normalization form applied to the mapped result before re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Canonical decomposition followed by canonical composition.
    Nfc,

    /// Canonical decomposition.
    Nfd,

    /// Compatibility decomposition followed by canonical composition.
    Nfkc,

    /// Compatibility decomposition.
    Nfkd,
}

impl Normalization {
    fn apply(self, chars: Vec<char>) -> Vec<char> {
        use unicode_normalization::UnicodeNormalization;

        match self {
            Normalization::Nfc => chars.into_iter().nfc().collect(),
            Normalization::Nfd => chars.into_iter().nfd().collect(),
            Normalization::Nfkc => chars.into_iter().nfkc().collect(),
            Normalization::Nfkd => chars.into_iter().nfkd().collect(),
        }
    }
}

/// A case mapping call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaseMapError {
    /// The input buffer could not be decoded. The offset identifies the offending unit.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The fixed-capacity output buffer is too small; `required` units would be needed.
    #[error("insufficient output capacity: {required} code units required")]
    InsufficientCapacity { required: usize },
}

//
// Engine
//

/// Case-map an encoded buffer into a freshly allocated one.
///
/// `before` and `following` seed the casing context at the two ends of the buffer: pass
/// [`CasingContext::NoRelevantNeighbor`] at a true string start and end, or the contexts
/// computed for the adjoining chunks (see
/// [`casing_prefix_context`](crate::context::casing_prefix_context) and
/// [`casing_suffix_context`](crate::context::casing_suffix_context)) when processing a
/// document in pieces. The mapping never recovers from a decode failure: the first malformed
/// or incomplete sequence aborts the call with its offset.
pub fn casemap<U: CodeUnit>(
    s: &[U],
    before: CasingContext,
    following: CasingContext,
    language: Option<Language>,
    mode: CaseMode,
    normalization: Option<Normalization>,
) -> Result<Vec<U>, DecodeError> {
    let mut mapped: Vec<char> = Vec::with_capacity(s.len());
    let mut before = before;

    // Titlecasing is the one direction with engine-local state: whether the cursor is inside
    // a word. Seeded from the caller's context so chunked calls agree with whole-string ones.
    let mut in_word = before == CasingContext::CasedLetter;

    let mut pos = 0;
    while pos < s.len() {
        let (c, n) = decode_char(s, pos)?;

        let is_cased = casing_properties::cased(c);
        let ignorable = casing_properties::case_ignorable(c);

        // Within a word only the first cased letter receives the title mapping.
        let effective = match mode {
            CaseMode::Title if is_cased && in_word => CaseMode::Lower,
            other => other,
        };

        let candidates = special_casing::entries(c);

        let rule = if candidates.is_empty() {
            None
        } else {
            // The after-context costs a forward scan, so compute it only when some candidate
            // rule actually conditions on context.
            let after = if candidates.iter().any(|entry| entry.condition != Condition::Always) {
                casing_suffix_context_from(s, s.len() - (pos + n), following)
            } else {
                CasingContext::NoRelevantNeighbor
            };

            special_casing::select(candidates, before, after, language)
        };

        match rule {
            Some(entry) => {
                trace!("special casing rule applied to U+{:04X}", u32::from(c));

                let replacement = match effective {
                    CaseMode::Upper => entry.upper,
                    CaseMode::Lower => entry.lower,
                    CaseMode::Title => entry.title,
                };
                mapped.extend_from_slice(replacement);
            }
            None => {
                mapped.extend(default_mapping(c, effective));
            }
        }

        if mode == CaseMode::Title {
            if is_cased {
                in_word = true;
            } else if !ignorable {
                in_word = false;
            }
        }

        // Advance the before-context incrementally instead of rescanning the prefix.
        if !ignorable {
            before = if is_cased {
                CasingContext::CasedLetter
            } else {
                CasingContext::UncasedCharacter
            };
        }

        pos += n;
    }

    let mapped = match normalization {
        Some(form) => form.apply(mapped),
        None => mapped,
    };

    let mut out = Vec::with_capacity(s.len());
    for c in mapped {
        push_char(c, &mut out);
    }

    Ok(out)
}

/// Case-map an encoded buffer into a caller-supplied fixed-capacity buffer.
///
/// Returns the number of code units written. If the buffer is too small, reports the
/// required capacity so the caller can reallocate and retry; this condition is distinct
/// from a decode failure.
pub fn casemap_into<U: CodeUnit>(
    s: &[U],
    before: CasingContext,
    following: CasingContext,
    language: Option<Language>,
    mode: CaseMode,
    normalization: Option<Normalization>,
    out: &mut [U],
) -> Result<usize, CaseMapError> {
    let result = casemap(s, before, following, language, mode, normalization)?;

    if out.len() < result.len() {
        return Err(CaseMapError::InsufficientCapacity { required: result.len() });
    }

    out[..result.len()].copy_from_slice(&result);

    Ok(result.len())
}

/// Rule selection fallback: the default tables, then identity.
///
/// Full default upper and lower mappings come from the standard library character tables.
/// Titlecase falls back to the simple titlecase exceptions and then to the uppercase
/// mapping. None of these can fail: a character with no mapping maps to itself.
fn default_mapping(c: char, mode: CaseMode) -> SmallVec<[char; 3]> {
    match mode {
        CaseMode::Lower => c.to_lowercase().collect(),
        CaseMode::Upper => c.to_uppercase().collect(),
        CaseMode::Title => match title_mappings::simple_titlecase(c) {
            Some(title) => smallvec![title],
            None => c.to_uppercase().collect(),
        },
    }
}

//
// Convenience surface
//

/// Uppercase an encoded buffer which is a whole string, not a chunk of one.
pub fn to_upper<U: CodeUnit>(s: &[U], language: Option<Language>) -> Result<Vec<U>, DecodeError> {
    recase(s, language, CaseMode::Upper)
}

/// Lowercase an encoded buffer which is a whole string, not a chunk of one.
pub fn to_lower<U: CodeUnit>(s: &[U], language: Option<Language>) -> Result<Vec<U>, DecodeError> {
    recase(s, language, CaseMode::Lower)
}

/// Titlecase an encoded buffer which is a whole string, not a chunk of one.
pub fn to_title<U: CodeUnit>(s: &[U], language: Option<Language>) -> Result<Vec<U>, DecodeError> {
    recase(s, language, CaseMode::Title)
}

fn recase<U: CodeUnit>(
    s: &[U],
    language: Option<Language>,
    mode: CaseMode,
) -> Result<Vec<U>, DecodeError> {
    let boundary = CasingContext::NoRelevantNeighbor;

    casemap(s, boundary, boundary, language, mode, None)
}

/// Uppercase a string.
pub fn to_upper_str(s: &str, language: Option<Language>) -> String {
    recase_str(s, language, CaseMode::Upper)
}

/// Lowercase a string.
pub fn to_lower_str(s: &str, language: Option<Language>) -> String {
    recase_str(s, language, CaseMode::Lower)
}

/// Titlecase a string.
pub fn to_title_str(s: &str, language: Option<Language>) -> String {
    recase_str(s, language, CaseMode::Title)
}

fn recase_str(s: &str, language: Option<Language>, mode: CaseMode) -> String {
    let units = recase(s.as_bytes(), language, mode).expect("valid UTF-8 cannot be malformed");

    // This is safe as case mapping encodes a sequence of valid scalar values.
    unsafe { String::from_utf8_unchecked(units) }
}
