//! Cross-reference table: one fixed 20-byte record per object.
//!
//! ```text
//! xref
//! 0 4
//! 0000000002 65536 f \n   <- head of the free list
//! 0000000015 00000 n \n   <- in use: byte offset
//! 0000000000 00000 f \n   <- free: next free object number, 0 at the end
//! 0000000074 00000 n \n
//! ```
//!
//! Values that need more digits than their column has are rejected with
//! [`PdfError::FixedWidthOverflow`]; nothing is ever truncated.

use std::collections::BTreeSet;

use crate::document::IndirectObject;
use crate::error::{PdfError, Result, XrefField};

const OFFSET_WIDTH: usize = 10;
const GENERATION_WIDTH: usize = 5;

/// Generation written on entry 0.
pub const FREE_HEAD_GENERATION: u32 = 65536;

/// One cross-reference record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrefEntry {
    /// `oooooooooo ggggg n`
    InUse { offset: u64, generation: u16 },
    /// `nnnnnnnnnn ggggg f`; `next` is 0 at the end of the chain.
    Free { next: u64, generation: u32 },
}

impl XrefEntry {
    /// Append the 20-byte record (including the ` \n` terminator).
    pub fn render(&self, out: &mut Vec<u8>) -> Result<()> {
        let (first, first_field, generation, kind) = match *self {
            Self::InUse { offset, generation } => {
                (offset, XrefField::Offset, u64::from(generation), 'n')
            }
            Self::Free { next, generation } => {
                (next, XrefField::ObjectNumber, u64::from(generation), 'f')
            }
        };
        let first = fixed_width(first, OFFSET_WIDTH, first_field)?;
        let generation = fixed_width(generation, GENERATION_WIDTH, XrefField::Generation)?;
        out.extend_from_slice(format!("{first} {generation} {kind} \n").as_bytes());
        Ok(())
    }
}

/// Zero-padded decimal of exactly `width` digits, or an overflow error.
pub fn fixed_width(value: u64, width: usize, field: XrefField) -> Result<String> {
    let text = format!("{value:0width$}");
    if text.len() > width {
        return Err(PdfError::FixedWidthOverflow {
            field,
            value,
            width,
        });
    }
    Ok(text)
}

/// Accumulates entries during the body pass.
///
/// Objects must be recorded in ascending number order, the same order they
/// are written in.
#[derive(Debug, Clone)]
pub struct XrefTable {
    free: BTreeSet<u64>,
    entries: Vec<XrefEntry>,
}

impl XrefTable {
    /// Start a table whose free list links the numbers in `free`.
    pub fn new(free: BTreeSet<u64>) -> Self {
        let head = free.first().copied().unwrap_or(0);
        let entries = vec![XrefEntry::Free {
            next: head,
            generation: FREE_HEAD_GENERATION,
        }];
        Self { free, entries }
    }

    /// Record `object`, written at byte `offset`.
    ///
    /// Free objects link to the next free number above them; in-use objects
    /// store their offset. The object number must fit the 10-digit column
    /// either way.
    pub fn record(&mut self, object: &IndirectObject, offset: u64) -> Result<XrefEntry> {
        fixed_width(object.number, OFFSET_WIDTH, XrefField::ObjectNumber)?;

        let entry = if self.free.contains(&object.number) {
            let next = self
                .free
                .range(object.number + 1..)
                .next()
                .copied()
                .unwrap_or(0);
            XrefEntry::Free {
                next,
                generation: u32::from(object.generation),
            }
        } else {
            XrefEntry::InUse {
                offset,
                generation: object.generation,
            }
        };
        log::trace!("xref {}: {:?}", object.number, entry);
        self.entries.push(entry);
        Ok(entry)
    }

    /// Entries including the free-list head at index 0.
    pub fn entries(&self) -> &[XrefEntry] {
        &self.entries
    }

    /// Append `xref`, the `0 N` subsection header and every record.
    pub fn render(&self, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(format!("xref\n0 {}\n", self.entries.len()).as_bytes());
        for entry in &self.entries {
            entry.render(out)?;
        }
        Ok(())
    }
}
