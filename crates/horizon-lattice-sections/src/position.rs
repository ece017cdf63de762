//! Translation between section-local slots and flat-list positions.
//!
//! [`PositionTranslator`] maps both directions: a section-local slot to its
//! flat index ([`flat_index`](PositionTranslator::flat_index) and the
//! per-row-kind projections), and a flat position back to the owning section
//! and its tagged row kind ([`resolve`](PositionTranslator::resolve)).
//!
//! The translator is deliberately stateless: it borrows the registry and
//! recomputes every answer from the registry's current state, because a
//! mutation in any earlier section shifts the offsets of everything after
//! it. Every notification derives its flat index through this path; nothing
//! in the crate caches an offset.

use crate::error::{Result, SectionError};
use crate::registry::SectionRegistry;
use crate::section::{Section, SectionRow};

/// Stateless translator between section-local slots and flat positions.
///
/// Obtained from [`SectionRegistry::translator`]. Cheap to construct; create
/// one per query batch rather than holding one across mutations.
#[derive(Debug, Clone, Copy)]
pub struct PositionTranslator<'a> {
    sections: &'a SectionRegistry,
}

impl<'a> PositionTranslator<'a> {
    /// Creates a translator over the registry's current state.
    pub fn new(sections: &'a SectionRegistry) -> Self {
        Self { sections }
    }

    /// The flat position at which `id`'s first row sits (or would sit):
    /// the sum of the row counts of all visible sections ordered before it.
    ///
    /// The section's own visibility does not gate this: for an invisible
    /// section the result is the position it will occupy once visible.
    pub fn base_offset(&self, id: &str) -> Result<usize> {
        let mut offset = 0;
        for (entry_id, section) in self.sections.iter() {
            if entry_id == id {
                return Ok(offset);
            }
            offset += section.total_row_count();
        }
        Err(SectionError::unknown_section(id))
    }

    /// The flat index of a section-local slot: base offset plus slot.
    ///
    /// The slot is validated against the section's current layout.
    pub fn flat_index(&self, id: &str, slot: usize) -> Result<usize> {
        let section = self.sections.section(id)?;
        let slot_count = section.slot_count();
        if slot >= slot_count {
            return Err(SectionError::out_of_range(slot, slot_count));
        }
        Ok(self.base_offset(id)? + slot)
    }

    /// The flat index of the section's header row.
    pub fn header_index(&self, id: &str) -> Result<usize> {
        let section = self.sections.section(id)?;
        let slot = section.header_slot().ok_or_else(|| {
            SectionError::contract("header_index", format!("section '{id}' has no header"))
        })?;
        Ok(self.base_offset(id)? + slot)
    }

    /// The flat index of the section's footer row.
    pub fn footer_index(&self, id: &str) -> Result<usize> {
        let section = self.sections.section(id)?;
        let slot = section.footer_slot().ok_or_else(|| {
            SectionError::contract("footer_index", format!("section '{id}' has no footer"))
        })?;
        Ok(self.base_offset(id)? + slot)
    }

    /// The flat index of the section's state row.
    pub fn state_row_index(&self, id: &str) -> Result<usize> {
        let section = self.sections.section(id)?;
        Ok(self.base_offset(id)? + section.state_row_slot()?)
    }

    /// The flat index of content item `position` within the section.
    pub fn content_index(&self, id: &str, position: usize) -> Result<usize> {
        let section = self.sections.section(id)?;
        Ok(self.base_offset(id)? + section.content_slot(position)?)
    }

    /// Resolves a flat position to its owning section and row kind.
    ///
    /// Walks the visible sections in order; invisible sections contribute no
    /// rows and are skipped.
    pub fn resolve(&self, flat_position: usize) -> Result<(&'a str, SectionRow)> {
        let mut offset = 0;
        for (id, section) in self.sections.iter() {
            let span = section.total_row_count();
            if flat_position < offset + span {
                return Ok((id, section.row_at(flat_position - offset)?));
            }
            offset += span;
        }
        Err(SectionError::out_of_range(flat_position, offset))
    }

    /// The section-local content index at a flat position.
    ///
    /// Fails with a contract violation if the row at that position is a
    /// header, footer or state row.
    pub fn content_position(&self, flat_position: usize) -> Result<usize> {
        match self.resolve(flat_position)? {
            (_, SectionRow::Content(index)) => Ok(index),
            (id, row) => Err(SectionError::contract(
                "content_position",
                format!("flat position {flat_position} is {row:?} of section '{id}', not content"),
            )),
        }
    }

    /// The section owning a flat position.
    pub fn section_at(&self, flat_position: usize) -> Result<&'a Section> {
        let (id, _) = self.resolve(flat_position)?;
        self.sections.section(id)
    }

    /// Total length of the flat list.
    pub fn total_row_count(&self) -> usize {
        self.sections.total_row_count()
    }
}
