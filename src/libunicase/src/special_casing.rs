// Copyright (c) 2026, Unistring developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Special casing rules.
//!
//! Most characters case-map through the one-to-one default tables, but a handful carry
//! overrides: mappings that expand into several characters (the German sharp s), mappings
//! conditioned on the surrounding context (the Greek final sigma), and mappings conditioned
//! on the language (the Turkish dotted and dotless i). This module holds those rules and
//! selects the applicable one, most specific first.
//!
//! Absence of a rule is a normal outcome, never an error: the caller falls back to the
//! default tables and ultimately to the identity mapping.

use crate::context::CasingContext;
use crate::locale::Language;

//
// Rules
//

/// Context condition attached to a special casing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The rule applies regardless of context.
    Always,

    /// The character must be the last cased letter of a word: a cased letter before it,
    /// no cased letter after it (the final sigma condition).
    FinalContext,

    /// The character must be the first cased letter of a word: no cased letter before it,
    /// a cased letter after it.
    InitialContext,
}

impl Condition {
    /// Check the condition against the contexts computed at the character's position.
    pub fn matches(self, before: CasingContext, after: CasingContext) -> bool {
        match self {
            Condition::Always => true,
            Condition::FinalContext => {
                before == CasingContext::CasedLetter && after != CasingContext::CasedLetter
            }
            Condition::InitialContext => {
                before != CasingContext::CasedLetter && after == CasingContext::CasedLetter
            }
        }
    }
}

/// One special casing rule.
///
/// A rule carries replacements for all three directions; directions the rule does not
/// actually tailor map the character to itself, which makes selecting a rule harmless
/// for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialCasing {
    /// The character the rule overrides.
    pub code: char,

    /// Context the character must appear in.
    pub condition: Condition,

    /// Language the rule is restricted to, if any.
    pub language: Option<Language>,

    /// Lowercase replacement sequence.
    pub lower: &'static [char],

    /// Titlecase replacement sequence.
    pub title: &'static [char],

    /// Uppercase replacement sequence.
    pub upper: &'static [char],
}

//
// Lookup
//

/// All special casing rules for a character, or an empty slice if it has none.
pub fn entries(c: char) -> &'static [SpecialCasing] {
    match SPECIAL_CASINGS.binary_search_by(|entry| entry.code.cmp(&c)) {
        Ok(index) => {
            let mut lo = index;
            while lo > 0 && SPECIAL_CASINGS[lo - 1].code == c {
                lo -= 1;
            }
            let mut hi = index + 1;
            while hi < SPECIAL_CASINGS.len() && SPECIAL_CASINGS[hi].code == c {
                hi += 1;
            }
            &SPECIAL_CASINGS[lo..hi]
        }
        Err(_) => &[],
    }
}

/// Select the applicable rule among a character's candidates.
///
/// Precedence, most specific first: a locale-specific rule whose context condition matches,
/// a locale-specific unconditional rule, a generic rule whose context condition matches,
/// a generic unconditional rule. `None` means the default tables decide.
pub fn select(
    candidates: &'static [SpecialCasing],
    before: CasingContext,
    after: CasingContext,
    language: Option<Language>,
) -> Option<&'static SpecialCasing> {
    let mut best: Option<(&'static SpecialCasing, u8)> = None;

    for entry in candidates {
        if let Some(required) = entry.language {
            if language != Some(required) {
                continue;
            }
        }
        if !entry.condition.matches(before, after) {
            continue;
        }

        let specificity = ((entry.language.is_some() as u8) << 1)
            | (entry.condition != Condition::Always) as u8;

        match best {
            Some((_, current)) if current >= specificity => {}
            _ => best = Some((entry, specificity)),
        }
    }

    best.map(|(entry, _)| entry)
}

//
// Rule data
//

/// The special casing rules, sorted by character.
///
/// This is the conditional and locale-specific portion of the Unicode `SpecialCasing` data,
/// plus the entries whose titlecase form differs from their uppercase form (the one thing
/// the default tables cannot express).
static SPECIAL_CASINGS: &[SpecialCasing] = &[
    // Turkish and Azerbaijani: capital I lowercases to dotless ı.
    SpecialCasing {
        code: 'I',
        condition: Condition::Always,
        language: Some(Language::Turkish),
        lower: &['\u{0131}'],
        title: &['I'],
        upper: &['I'],
    },
    SpecialCasing {
        code: 'I',
        condition: Condition::Always,
        language: Some(Language::Azerbaijani),
        lower: &['\u{0131}'],
        title: &['I'],
        upper: &['I'],
    },
    // Turkish and Azerbaijani: small i uppercases to dotted İ.
    SpecialCasing {
        code: 'i',
        condition: Condition::Always,
        language: Some(Language::Turkish),
        lower: &['i'],
        title: &['\u{0130}'],
        upper: &['\u{0130}'],
    },
    SpecialCasing {
        code: 'i',
        condition: Condition::Always,
        language: Some(Language::Azerbaijani),
        lower: &['i'],
        title: &['\u{0130}'],
        upper: &['\u{0130}'],
    },
    // Lithuanian: accented capital i keeps its dot as an explicit combining mark.
    SpecialCasing {
        code: '\u{00CC}',
        condition: Condition::Always,
        language: Some(Language::Lithuanian),
        lower: &['i', '\u{0307}', '\u{0300}'],
        title: &['\u{00CC}'],
        upper: &['\u{00CC}'],
    },
    SpecialCasing {
        code: '\u{00CD}',
        condition: Condition::Always,
        language: Some(Language::Lithuanian),
        lower: &['i', '\u{0307}', '\u{0301}'],
        title: &['\u{00CD}'],
        upper: &['\u{00CD}'],
    },
    // German sharp s: uppercases to a letter pair, titlecases to Ss.
    SpecialCasing {
        code: '\u{00DF}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{00DF}'],
        title: &['S', 's'],
        upper: &['S', 'S'],
    },
    SpecialCasing {
        code: '\u{0128}',
        condition: Condition::Always,
        language: Some(Language::Lithuanian),
        lower: &['i', '\u{0307}', '\u{0303}'],
        title: &['\u{0128}'],
        upper: &['\u{0128}'],
    },
    // Dotted capital İ: the generic lowercase keeps the dot as a combining mark; the
    // Turkic languages map it to their plain small i.
    SpecialCasing {
        code: '\u{0130}',
        condition: Condition::Always,
        language: None,
        lower: &['i', '\u{0307}'],
        title: &['\u{0130}'],
        upper: &['\u{0130}'],
    },
    SpecialCasing {
        code: '\u{0130}',
        condition: Condition::Always,
        language: Some(Language::Turkish),
        lower: &['i'],
        title: &['\u{0130}'],
        upper: &['\u{0130}'],
    },
    SpecialCasing {
        code: '\u{0130}',
        condition: Condition::Always,
        language: Some(Language::Azerbaijani),
        lower: &['i'],
        title: &['\u{0130}'],
        upper: &['\u{0130}'],
    },
    // Greek capital sigma: lowercases to the final form at the end of a word.
    SpecialCasing {
        code: '\u{03A3}',
        condition: Condition::FinalContext,
        language: None,
        lower: &['\u{03C2}'],
        title: &['\u{03A3}'],
        upper: &['\u{03A3}'],
    },
    // Armenian ech-yiwn ligature.
    SpecialCasing {
        code: '\u{0587}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{0587}'],
        title: &['\u{0535}', '\u{0582}'],
        upper: &['\u{0535}', '\u{0552}'],
    },
    // Latin presentation-form ligatures.
    SpecialCasing {
        code: '\u{FB00}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB00}'],
        title: &['F', 'f'],
        upper: &['F', 'F'],
    },
    SpecialCasing {
        code: '\u{FB01}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB01}'],
        title: &['F', 'i'],
        upper: &['F', 'I'],
    },
    SpecialCasing {
        code: '\u{FB02}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB02}'],
        title: &['F', 'l'],
        upper: &['F', 'L'],
    },
    SpecialCasing {
        code: '\u{FB03}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB03}'],
        title: &['F', 'f', 'i'],
        upper: &['F', 'F', 'I'],
    },
    SpecialCasing {
        code: '\u{FB04}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB04}'],
        title: &['F', 'f', 'l'],
        upper: &['F', 'F', 'L'],
    },
    SpecialCasing {
        code: '\u{FB05}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB05}'],
        title: &['S', 't'],
        upper: &['S', 'T'],
    },
    SpecialCasing {
        code: '\u{FB06}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB06}'],
        title: &['S', 't'],
        upper: &['S', 'T'],
    },
    // Armenian presentation-form ligatures.
    SpecialCasing {
        code: '\u{FB13}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB13}'],
        title: &['\u{0544}', '\u{0576}'],
        upper: &['\u{0544}', '\u{0546}'],
    },
    SpecialCasing {
        code: '\u{FB14}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB14}'],
        title: &['\u{0544}', '\u{0565}'],
        upper: &['\u{0544}', '\u{0535}'],
    },
    SpecialCasing {
        code: '\u{FB15}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB15}'],
        title: &['\u{0544}', '\u{056B}'],
        upper: &['\u{0544}', '\u{053B}'],
    },
    SpecialCasing {
        code: '\u{FB16}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB16}'],
        title: &['\u{054E}', '\u{0576}'],
        upper: &['\u{054E}', '\u{0546}'],
    },
    SpecialCasing {
        code: '\u{FB17}',
        condition: Condition::Always,
        language: None,
        lower: &['\u{FB17}'],
        title: &['\u{0544}', '\u{056D}'],
        upper: &['\u{0544}', '\u{053D}'],
    },
];
