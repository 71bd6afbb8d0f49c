// Copyright (c) 2026, Unistring developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Languages with tailored casing rules.
//!
//! Case mapping is locale-sensitive for a small closed set of languages. Rather than matching
//! an opaque language tag against every rule on every scalar, callers resolve their tag once,
//! at call entry, into a [`Language`] value; `None` means only the generic rules are eligible.

/// A language with casing rules that differ from the generic ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Turkish: dotted and dotless i are distinct letters in both cases.
    Turkish,

    /// Azerbaijani: follows the Turkish treatment of dotted and dotless i.
    Azerbaijani,

    /// Lithuanian: accented capital i lowercases with an explicit combining dot above.
    Lithuanian,
}

impl Language {
    /// Resolve a language tag to a tailored language, if it names one.
    ///
    /// Only the primary subtag matters: `"tr"`, `"tr-TR"`, and `"tr_TR.UTF-8"` all resolve
    /// to Turkish. Unknown and empty tags resolve to `None`, selecting the generic rules.
    pub fn from_tag(tag: &str) -> Option<Language> {
        let primary = tag
            .split(|c: char| c == '-' || c == '_' || c == '.')
            .next()
            .unwrap_or("");

        match primary.to_ascii_lowercase().as_str() {
            "tr" => Some(Language::Turkish),
            "az" => Some(Language::Azerbaijani),
            "lt" => Some(Language::Lithuanian),
            _ => None,
        }
    }

    /// The primary language subtag.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Turkish => "tr",
            Language::Azerbaijani => "az",
            Language::Lithuanian => "lt",
        }
    }
}
