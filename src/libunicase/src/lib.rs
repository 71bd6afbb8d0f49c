// Copyright (c) 2026, Unistring developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Locale- and context-sensitive Unicode case mapping.
//!
//! This crate transforms encoded text between its lowercase, uppercase, and titlecase forms
//! as defined by the Unicode Standard, including the context-sensitive rules (the Greek final
//! sigma) and the language-specific tailorings (the Turkish dotted and dotless i) which make
//! case mapping more than a per-character table lookup. It works on any of the three standard
//! encoding forms through the `CodeUnit` trait of `libunistr`.
//!
//! The property data embedded here is intended to be a minimal sufficient subset of a proper
//! full Unicode support library: the default one-to-one mappings are consumed from the standard
//! library's character tables, and only the casing-specific properties and exceptions are
//! carried as tables of this crate.
//!
//! Callers processing a large document in chunks seed each engine invocation with the casing
//! context of the adjoining chunks, computed by the `context` module without rescanning the
//! whole document.

mod tables;

pub use crate::tables::UNICODE_VERSION;

pub mod casemap;
pub mod context;
pub mod locale;
pub mod special_casing;
