// Copyright (c) 2026, Unistring developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Encoded Unicode string primitives.
//!
//! This crate contains the encoding-form-level primitives shared by the higher-level string
//! algorithms: decoding and encoding of individual Unicode scalar values in any of the three
//! standard encoding forms (8-bit, 16-bit, and 32-bit code units), and the plain linear scans
//! built directly on top of them. One algorithm body services all three widths: the width-specific
//! details live behind the `CodeUnit` trait which is implemented for `u8`, `u16`, and `u32`.

pub mod codec;
pub mod scan;

pub use crate::codec::{CodeUnit, DecodeError, InsufficientCapacity};
