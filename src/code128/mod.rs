//! # Code128 Subset B Encoder
//!
//! Turns text into the ordered bar/space modules of a Code128 Subset B symbol.
//!
//! ## Symbol Layout
//!
//! ```text
//! [quiet] START-B  DATA...  CHECKSUM  STOP  11  [quiet]
//!   10      11     11 each     11      11    2    10
//! ```
//!
//! The checksum is position weighted:
//!
//! ```text
//! checksum = (104 + Σ (position + 1) × index) mod 103
//! ```
//!
//! ## Example
//!
//! ```
//! use code128b::code128;
//!
//! let sequence = code128::encode("A");
//! assert_eq!(sequence.len(), 11 * 3 + 2);
//! assert_eq!(sequence.checksum_index(), 34);
//! ```
//!
//! Characters the table does not know are encoded as a space instead of
//! failing, so every input produces a symbol.

pub mod table;

use std::fmt;

use table::{
    CHAR_COUNT, MODULE_LEN, SEQUENCE_TERMINATOR, START_CODE_B, STOP_CODE,
    lookup_index_by_character,
};

/// Number of blank modules added on each side when a quiet zone is requested.
pub const QUIET_ZONE_LEN: usize = MODULE_LEN - 1;

/// An encoded symbol: `true` = bar, `false` = space, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSequence {
    modules: Vec<bool>,
    checksum_index: usize,
    quiet_zone: bool,
}

impl ModuleSequence {
    /// Number of modules, quiet zone included.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Never true for an encoded symbol; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// Table index of the checksum symbol.
    pub fn checksum_index(&self) -> usize {
        self.checksum_index
    }

    /// Whether blank quiet-zone modules pad both ends.
    pub fn has_quiet_zone(&self) -> bool {
        self.quiet_zone
    }
}

impl fmt::Display for ModuleSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bar in &self.modules {
            f.write_str(if bar { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Resolve a character to its data index.
///
/// Unknown characters, and anything outside the data range 0-102, resolve
/// to 0 (space).
pub fn resolve_index(c: char) -> usize {
    match lookup_index_by_character(c) {
        Some(index) if index < CHAR_COUNT => index,
        _ => {
            log::trace!("substituting space for unsupported character {:?}", c);
            0
        }
    }
}

/// Checksum symbol index for `text`.
pub fn checksum(text: &str) -> usize {
    let sum = text
        .chars()
        .enumerate()
        .fold(START_CODE_B, |sum, (pos, c)| sum + (pos + 1) * resolve_index(c));
    sum % CHAR_COUNT
}

/// Encode `text` without a quiet zone.
pub fn encode(text: &str) -> ModuleSequence {
    encode_with_quiet_zone(text, false)
}

/// Encode `text`, optionally padding both ends with [`QUIET_ZONE_LEN`] spaces.
pub fn encode_with_quiet_zone(text: &str, add_quiet_zone: bool) -> ModuleSequence {
    let char_count = text.chars().count();
    let symbol_len = MODULE_LEN * (char_count + 2) + SEQUENCE_TERMINATOR.len();
    let quiet_len = if add_quiet_zone { QUIET_ZONE_LEN } else { 0 };

    let mut modules = Vec::with_capacity(symbol_len + 2 * quiet_len);
    modules.resize(quiet_len, false);

    push_pattern(&mut modules, table::pattern(START_CODE_B));

    let mut sum = START_CODE_B;
    for (pos, c) in text.chars().enumerate() {
        let index = resolve_index(c);
        push_pattern(&mut modules, table::pattern(index));
        sum += (pos + 1) * index;
    }

    let checksum_index = sum % CHAR_COUNT;
    push_pattern(&mut modules, table::pattern(checksum_index));
    push_pattern(&mut modules, table::pattern(STOP_CODE));
    push_pattern(&mut modules, SEQUENCE_TERMINATOR);

    modules.resize(modules.len() + quiet_len, false);

    log::debug!(
        "encoded {} chars into {} modules (checksum index {}, quiet zone {})",
        char_count,
        modules.len(),
        checksum_index,
        add_quiet_zone
    );

    ModuleSequence {
        modules,
        checksum_index,
        quiet_zone: add_quiet_zone,
    }
}

fn push_pattern(modules: &mut Vec<bool>, pattern: &str) {
    modules.extend(pattern.bytes().map(|b| b == b'1'));
}
