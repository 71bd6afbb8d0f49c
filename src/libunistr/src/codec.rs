// Copyright (c) 2026, Unistring developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Scalar value codec.
//!
//! This module decodes and encodes individual Unicode scalar values in the three standard
//! encoding forms. The algorithms that consume it are written once, generically over the
//! [`CodeUnit`] trait, and instantiated for 8-bit, 16-bit, and 32-bit code units.
//!
//! Decoding distinguishes two failure conditions: a [`Malformed`](DecodeError::Malformed)
//! sequence can never become valid, while an [`Incomplete`](DecodeError::Incomplete) sequence
//! is a valid prefix cut short by the end of the buffer. Streaming callers use the distinction
//! to tell "need more input" from "this is garbage".

use std::fmt;

use thiserror::Error;

//
// Errors
//

/// An encoded code unit sequence could not be decoded to a scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The sequence is invalid in the encoding form and can never be decoded.
    ///
    /// The offset identifies the first code unit at which the sequence went wrong.
    #[error("malformed code unit sequence at offset {offset}")]
    Malformed { offset: usize },

    /// The buffer ends in the middle of a valid code unit sequence.
    ///
    /// The offset identifies the first code unit of the truncated sequence.
    #[error("incomplete code unit sequence at offset {offset}")]
    Incomplete { offset: usize },
}

impl DecodeError {
    /// Offset of the offending code unit.
    pub fn offset(self) -> usize {
        match self {
            DecodeError::Malformed { offset } => offset,
            DecodeError::Incomplete { offset } => offset,
        }
    }

    /// Rebase a relative error offset onto an absolute buffer position.
    fn offset_by(self, base: usize) -> DecodeError {
        match self {
            DecodeError::Malformed { offset } => DecodeError::Malformed { offset: base + offset },
            DecodeError::Incomplete { offset } => DecodeError::Incomplete { offset: base + offset },
        }
    }
}

/// An output buffer is too small to hold an encoded scalar value.
///
/// Encoding never fails for any valid scalar value given sufficient capacity. The required
/// capacity is a pure function of the scalar value and the target width, reported here so
/// that the caller can reallocate and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("insufficient output capacity: {required} code units required")]
pub struct InsufficientCapacity {
    /// Number of code units the output buffer must be able to hold.
    pub required: usize,
}

//
// Code unit trait
//

/// A fixed-width storage unit of one of the standard Unicode encoding forms.
///
/// Implementations provide the width-specific scalar value codec. Everything else in this
/// crate and its dependents is written once against this trait, so the three encoding forms
/// share a single algorithm body.
///
/// The `decode_one`/`decode_one_before` contract reports error offsets relative to the start
/// of the passed slice. Use [`decode_char`] and [`decode_char_before`] for absolute offsets.
pub trait CodeUnit: Copy + Eq + Default + fmt::Debug + 'static {
    /// Maximum number of code units a single scalar value can occupy.
    const MAX_LEN: usize;

    /// Number of code units needed to encode a scalar value.
    fn encoded_len(c: char) -> usize;

    /// Decode the scalar value starting at the first unit of `units`.
    ///
    /// Returns the scalar and the number of units it occupies.
    fn decode_one(units: &[Self]) -> Result<(char, usize), DecodeError>;

    /// Decode the scalar value whose last unit is the last unit of `units`.
    ///
    /// Returns the scalar and the number of units it occupies. This is the backward cursor
    /// step used by algorithms scanning towards the start of a string.
    fn decode_one_before(units: &[Self]) -> Result<(char, usize), DecodeError>;

    /// Encode a scalar value into `out` and return the number of units written.
    ///
    /// The caller must provide at least `encoded_len(c)` units of space.
    fn encode_one(c: char, out: &mut [Self]) -> usize;
}

//
// Cursor-level operations
//

/// Decode the scalar value starting at position `pos` of an encoded buffer.
///
/// Returns the scalar and the number of code units consumed. Error offsets are absolute
/// within `s`.
///
/// # Panics
///
/// Panics if `pos` is not strictly inside the buffer.
pub fn decode_char<U: CodeUnit>(s: &[U], pos: usize) -> Result<(char, usize), DecodeError> {
    assert!(pos < s.len(), "decoding position out of bounds");

    U::decode_one(&s[pos..]).map_err(|error| error.offset_by(pos))
}

/// Decode the scalar value ending just before position `pos` of an encoded buffer.
///
/// Returns the scalar and the number of code units it occupies (the backward cursor step).
/// Error offsets are absolute within `s`.
///
/// # Panics
///
/// Panics if `pos` is zero or past the end of the buffer.
pub fn decode_char_before<U: CodeUnit>(s: &[U], pos: usize) -> Result<(char, usize), DecodeError> {
    assert!(pos > 0 && pos <= s.len(), "decoding position out of bounds");

    U::decode_one_before(&s[..pos])
}

/// Encode a scalar value into a fixed-capacity buffer.
///
/// Returns the number of code units produced, or the required capacity if `out` is too small.
pub fn encode_char<U: CodeUnit>(c: char, out: &mut [U]) -> Result<usize, InsufficientCapacity> {
    let required = U::encoded_len(c);

    if out.len() < required {
        return Err(InsufficientCapacity { required });
    }

    Ok(U::encode_one(c, out))
}

/// Encode a scalar value by appending it to a growable buffer.
pub fn push_char<U: CodeUnit>(c: char, out: &mut Vec<U>) {
    let mut units = [U::default(); 4];
    let n = U::encode_one(c, &mut units);

    out.extend_from_slice(&units[..n]);
}

//
// UTF-8
//

impl CodeUnit for u8 {
    const MAX_LEN: usize = 4;

    fn encoded_len(c: char) -> usize {
        match u32::from(c) {
            0x0000..=0x007F => 1,
            0x0080..=0x07FF => 2,
            0x0800..=0xFFFF => 3,
            _               => 4,
        }
    }

    fn decode_one(units: &[u8]) -> Result<(char, usize), DecodeError> {
        assert!(!units.is_empty(), "decoding an empty buffer");

        let b0 = units[0];

        // The lead byte determines the sequence length and restricts the range of the first
        // continuation byte. The restrictions exclude overlong forms (0xE0, 0xF0), encoded
        // surrogates (0xED), and values above U+10FFFF (0xF4).
        let (length, first_lo, first_hi) = match b0 {
            0x00..=0x7F => return Ok((char::from(b0), 1)),
            0xC2..=0xDF => (2, 0x80, 0xBF),
            0xE0        => (3, 0xA0, 0xBF),
            0xE1..=0xEC => (3, 0x80, 0xBF),
            0xED        => (3, 0x80, 0x9F),
            0xEE..=0xEF => (3, 0x80, 0xBF),
            0xF0        => (4, 0x90, 0xBF),
            0xF1..=0xF3 => (4, 0x80, 0xBF),
            0xF4        => (4, 0x80, 0x8F),
            _           => return Err(DecodeError::Malformed { offset: 0 }),
        };

        let mut value = u32::from(b0) & (0x7F >> length);

        for i in 1..length {
            if i >= units.len() {
                return Err(DecodeError::Incomplete { offset: 0 });
            }

            let b = units[i];

            let valid = if i == 1 {
                (first_lo..=first_hi).contains(&b)
            } else {
                (0x80..=0xBF).contains(&b)
            };

            if !valid {
                return Err(DecodeError::Malformed { offset: i });
            }

            value = (value << 6) | (u32::from(b) & 0x3F);
        }

        // This is safe as the range restrictions above admit only valid scalar values.
        Ok((unsafe { std::char::from_u32_unchecked(value) }, length))
    }

    fn decode_one_before(units: &[u8]) -> Result<(char, usize), DecodeError> {
        assert!(!units.is_empty(), "decoding an empty buffer");

        let end = units.len();
        let mut start = end - 1;

        // Step back over the continuation bytes to the lead byte of the sequence.
        while units[start] & 0xC0 == 0x80 {
            if start == 0 || end - start >= Self::MAX_LEN {
                return Err(DecodeError::Malformed { offset: end - 1 });
            }
            start -= 1;
        }

        let (c, n) = Self::decode_one(&units[start..]).map_err(|error| error.offset_by(start))?;

        // The lead byte must account for exactly the continuation bytes we stepped over.
        if n != end - start {
            return Err(DecodeError::Malformed { offset: start });
        }

        Ok((c, n))
    }

    fn encode_one(c: char, out: &mut [u8]) -> usize {
        let value = u32::from(c);

        match Self::encoded_len(c) {
            1 => {
                out[0] = value as u8;
                1
            }
            2 => {
                out[0] = 0xC0 | (value >> 6) as u8;
                out[1] = 0x80 | (value & 0x3F) as u8;
                2
            }
            3 => {
                out[0] = 0xE0 | (value >> 12) as u8;
                out[1] = 0x80 | ((value >> 6) & 0x3F) as u8;
                out[2] = 0x80 | (value & 0x3F) as u8;
                3
            }
            _ => {
                out[0] = 0xF0 | (value >> 18) as u8;
                out[1] = 0x80 | ((value >> 12) & 0x3F) as u8;
                out[2] = 0x80 | ((value >> 6) & 0x3F) as u8;
                out[3] = 0x80 | (value & 0x3F) as u8;
                4
            }
        }
    }
}

//
// UTF-16
//

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

fn combine_surrogates(high: u16, low: u16) -> char {
    let value = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);

    // This is safe as surrogate pairs always combine into valid scalar values.
    unsafe { std::char::from_u32_unchecked(value) }
}

impl CodeUnit for u16 {
    const MAX_LEN: usize = 2;

    fn encoded_len(c: char) -> usize {
        if u32::from(c) <= 0xFFFF { 1 } else { 2 }
    }

    fn decode_one(units: &[u16]) -> Result<(char, usize), DecodeError> {
        assert!(!units.is_empty(), "decoding an empty buffer");

        let u0 = units[0];

        if HIGH_SURROGATES.contains(&u0) {
            if units.len() < 2 {
                return Err(DecodeError::Incomplete { offset: 0 });
            }
            if !LOW_SURROGATES.contains(&units[1]) {
                return Err(DecodeError::Malformed { offset: 1 });
            }
            return Ok((combine_surrogates(u0, units[1]), 2));
        }

        if LOW_SURROGATES.contains(&u0) {
            return Err(DecodeError::Malformed { offset: 0 });
        }

        // This is safe as all non-surrogate 16-bit values are valid scalar values.
        Ok((unsafe { std::char::from_u32_unchecked(u32::from(u0)) }, 1))
    }

    fn decode_one_before(units: &[u16]) -> Result<(char, usize), DecodeError> {
        assert!(!units.is_empty(), "decoding an empty buffer");

        let end = units.len();
        let last = units[end - 1];

        if LOW_SURROGATES.contains(&last) {
            if end >= 2 && HIGH_SURROGATES.contains(&units[end - 2]) {
                return Ok((combine_surrogates(units[end - 2], last), 2));
            }
            return Err(DecodeError::Malformed { offset: end - 1 });
        }

        if HIGH_SURROGATES.contains(&last) {
            return Err(DecodeError::Malformed { offset: end - 1 });
        }

        // This is safe as all non-surrogate 16-bit values are valid scalar values.
        Ok((unsafe { std::char::from_u32_unchecked(u32::from(last)) }, 1))
    }

    fn encode_one(c: char, out: &mut [u16]) -> usize {
        let value = u32::from(c);

        if value <= 0xFFFF {
            out[0] = value as u16;
            1
        } else {
            let offset = value - 0x10000;
            out[0] = 0xD800 | (offset >> 10) as u16;
            out[1] = 0xDC00 | (offset & 0x3FF) as u16;
            2
        }
    }
}

//
// UTF-32
//

impl CodeUnit for u32 {
    const MAX_LEN: usize = 1;

    fn encoded_len(_: char) -> usize {
        1
    }

    fn decode_one(units: &[u32]) -> Result<(char, usize), DecodeError> {
        assert!(!units.is_empty(), "decoding an empty buffer");

        // A 32-bit sequence is never incomplete: every unit stands on its own.
        match std::char::from_u32(units[0]) {
            Some(c) => Ok((c, 1)),
            None => Err(DecodeError::Malformed { offset: 0 }),
        }
    }

    fn decode_one_before(units: &[u32]) -> Result<(char, usize), DecodeError> {
        assert!(!units.is_empty(), "decoding an empty buffer");

        let end = units.len();

        match std::char::from_u32(units[end - 1]) {
            Some(c) => Ok((c, 1)),
            None => Err(DecodeError::Malformed { offset: end - 1 }),
        }
    }

    fn encode_one(c: char, out: &mut [u32]) -> usize {
        out[0] = u32::from(c);
        1
    }
}
