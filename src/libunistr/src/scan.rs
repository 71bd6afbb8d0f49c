// Copyright (c) 2026, Unistring developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Plain string scans.
//!
//! This module contains the non-context linear scans over encoded buffers: operations which
//! look at one scalar value at a time and never at its neighbors.

use crate::codec::{decode_char, CodeUnit, DecodeError};

/// Count the scalar values in an encoded buffer.
pub fn count_chars<U: CodeUnit>(s: &[U]) -> Result<usize, DecodeError> {
    let mut count = 0;
    let mut pos = 0;

    while pos < s.len() {
        let (_, n) = decode_char(s, pos)?;
        pos += n;
        count += 1;
    }

    Ok(count)
}

/// Copy scalar values from the front of an encoded buffer into a fixed-capacity one.
///
/// Copies as many complete code unit sequences as fit, truncating at a scalar value
/// boundary rather than splitting a sequence at the capacity limit. Returns the number
/// of code units copied. The copied prefix is validated along the way, and the first
/// decoding error is reported with its absolute offset in `src`.
pub fn copy_chars<U: CodeUnit>(src: &[U], dest: &mut [U]) -> Result<usize, DecodeError> {
    let mut pos = 0;

    while pos < src.len() {
        let (_, n) = decode_char(src, pos)?;
        if pos + n > dest.len() {
            break;
        }
        dest[pos..pos + n].copy_from_slice(&src[pos..pos + n]);
        pos += n;
    }

    Ok(pos)
}

/// Verify that an encoded buffer contains only well-formed code unit sequences.
///
/// Returns the first decoding error, if any, with its absolute offset.
pub fn is_well_formed<U: CodeUnit>(s: &[U]) -> Result<(), DecodeError> {
    let mut pos = 0;

    while pos < s.len() {
        let (_, n) = decode_char(s, pos)?;
        pos += n;
    }

    Ok(())
}
