// Copyright (c) 2026, Unistring developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Casing property data.
//!
//! This module contains the character property tables needed by the casing algorithms which
//! the standard library does not expose. The tables are a minimal sufficient subset of the
//! Unicode Character Database: ranges are curated for the scripts and punctuation the casing
//! algorithms actually distinguish, not transcribed wholesale.

/// Version of the Unicode Character Database the tables are curated from.
pub const UNICODE_VERSION: (u8, u8, u8) = (15, 0, 0);

pub mod casing_properties {
    use std::cmp::Ordering;

    /// Check whether a character is cased (definition D135).
    ///
    /// Cased characters are the ones the casing context classifier treats as letters with
    /// a case: characters with the Lowercase or Uppercase derived property, and titlecase
    /// letters.
    pub fn cased(c: char) -> bool {
        c.is_lowercase() || c.is_uppercase() || titlecase_letter(c)
    }

    /// Check whether a character is a titlecase letter (general category Lt).
    pub fn titlecase_letter(c: char) -> bool {
        match u32::from(c) {
            0x01C5 | 0x01C8 | 0x01CB | 0x01F2 => true,
            0x1F88..=0x1F8F | 0x1F98..=0x1F9F | 0x1FA8..=0x1FAF => true,
            0x1FBC | 0x1FCC | 0x1FFC => true,
            _ => false,
        }
    }

    /// Check whether a character is case-ignorable (definition D136).
    ///
    /// Case-ignorable characters are transparent to the casing context scan: combining
    /// marks, format controls, modifier letters and symbols, and the word-internal
    /// punctuation like apostrophes and middle dots.
    pub fn case_ignorable(c: char) -> bool {
        let cp = u32::from(c);

        CASE_IGNORABLE_RANGES
            .binary_search_by(|&(lo, hi)| {
                if hi < cp {
                    Ordering::Less
                } else if cp < lo {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Sorted inclusive ranges of case-ignorable characters.
    static CASE_IGNORABLE_RANGES: &[(u32, u32)] = &[
        (0x0027, 0x0027), // apostrophe
        (0x002E, 0x002E), // full stop
        (0x003A, 0x003A), // colon
        (0x005E, 0x005E), // circumflex accent
        (0x0060, 0x0060), // grave accent
        (0x00A8, 0x00A8), // diaeresis
        (0x00AD, 0x00AD), // soft hyphen
        (0x00AF, 0x00AF), // macron
        (0x00B4, 0x00B4), // acute accent
        (0x00B7, 0x00B8), // middle dot, cedilla
        (0x02B0, 0x02FF), // spacing modifier letters
        (0x0300, 0x036F), // combining diacritical marks
        (0x0374, 0x0375), // Greek numeral signs
        (0x037A, 0x037A), // Greek ypogegrammeni
        (0x0384, 0x0385), // Greek tonos marks
        (0x0387, 0x0387), // Greek ano teleia
        (0x0483, 0x0489), // Cyrillic combining marks
        (0x0559, 0x0559), // Armenian modifier letter
        (0x0591, 0x05BD), // Hebrew accents and points
        (0x05BF, 0x05BF),
        (0x05C1, 0x05C2),
        (0x05C4, 0x05C5),
        (0x05C7, 0x05C7),
        (0x05F4, 0x05F4), // Hebrew punctuation gershayim
        (0x0600, 0x0605), // Arabic number signs
        (0x0610, 0x061A), // Arabic signs and marks
        (0x061C, 0x061C), // Arabic letter mark
        (0x064B, 0x065F), // Arabic points
        (0x0670, 0x0670),
        (0x06D6, 0x06DD), // Koranic annotation signs
        (0x06DF, 0x06E8),
        (0x06EA, 0x06ED),
        (0x070F, 0x070F), // Syriac abbreviation mark
        (0x0711, 0x0711),
        (0x0730, 0x074A), // Syriac points
        (0x07A6, 0x07B0), // Thaana points
        (0x07EB, 0x07F5), // NKo marks and tones
        (0x1AB0, 0x1AFF), // combining diacritical marks extended
        (0x1DC0, 0x1DFF), // combining diacritical marks supplement
        (0x200B, 0x200F), // zero-width and directional controls
        (0x2018, 0x2019), // curly quotation marks
        (0x2024, 0x2024), // one dot leader
        (0x2027, 0x2027), // hyphenation point
        (0x202A, 0x202E), // directional embedding controls
        (0x2060, 0x2064), // invisible operators
        (0x2066, 0x206F), // directional isolate controls
        (0x20D0, 0x20F0), // combining marks for symbols
        (0x2C7C, 0x2C7D), // Latin subscript and superscript modifiers
        (0x2DE0, 0x2DFF), // Cyrillic extended combining marks
        (0x302A, 0x302D), // ideographic tone marks
        (0x3099, 0x309C), // kana voicing marks
        (0xA66F, 0xA672), // Cyrillic combining marks
        (0xA67F, 0xA67F),
        (0xA700, 0xA721), // modifier tone letters
        (0xFB1E, 0xFB1E), // Hebrew point judeo-spanish varika
        (0xFE00, 0xFE0F), // variation selectors
        (0xFE13, 0xFE13), // presentation form colon
        (0xFE20, 0xFE2F), // combining half marks
        (0xFE52, 0xFE52), // small full stop
        (0xFE55, 0xFE55), // small colon
        (0xFEFF, 0xFEFF), // zero width no-break space
        (0xFF07, 0xFF07), // fullwidth apostrophe
        (0xFF0E, 0xFF0E), // fullwidth full stop
        (0xFF1A, 0xFF1A), // fullwidth colon
        (0xFF9E, 0xFF9F), // halfwidth kana voicing marks
        (0xE0001, 0xE0001), // language tag
        (0xE0020, 0xE007F), // tag characters
        (0xE0100, 0xE01EF), // variation selectors supplement
    ];
}

pub mod title_mappings {
    /// Simple titlecase mapping of a character, where it differs from its uppercase mapping.
    ///
    /// Covers the Latin digraphs (where a dedicated titlecase letter sits between the upper
    /// and lower forms) and the Greek letters with prosgegrammeni (where uppercasing would
    /// expand to a letter pair but the titlecase form is a single precomposed letter).
    /// Everything else titlecases like it uppercases.
    pub fn simple_titlecase(c: char) -> Option<char> {
        let cp = u32::from(c);

        let title = match cp {
            0x01C4..=0x01C6 => 0x01C5, // DŽ, Dž, dž
            0x01C7..=0x01C9 => 0x01C8, // LJ, Lj, lj
            0x01CA..=0x01CC => 0x01CB, // NJ, Nj, nj
            0x01F1..=0x01F3 => 0x01F2, // DZ, Dz, dz
            0x1F80..=0x1F8F => 0x1F88 + (cp - 0x1F80) % 8,
            0x1F90..=0x1F9F => 0x1F98 + (cp - 0x1F90) % 8,
            0x1FA0..=0x1FAF => 0x1FA8 + (cp - 0x1FA0) % 8,
            0x1FB3 | 0x1FBC => 0x1FBC,
            0x1FC3 | 0x1FCC => 0x1FCC,
            0x1FF3 | 0x1FFC => 0x1FFC,
            _ => return None,
        };

        std::char::from_u32(title)
    }
}
