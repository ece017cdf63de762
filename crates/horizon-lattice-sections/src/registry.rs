//! Ordered, named collection of sections.
//!
//! The registry is the single owned home of all sections composed into one
//! flat list. Insertion order defines flat-list order among visible
//! sections. The registry itself never talks to the widget; flat-space
//! placement and notification emission are layered on top via
//! [`PositionTranslator`](crate::PositionTranslator) and
//! [`SectionNotifier`](crate::SectionNotifier), both of which borrow the
//! registry and recompute from its current state on every call.
//!
//! Not internally synchronized: all access is expected to happen on the one
//! thread that drives the host list view.

use crate::error::{Result, SectionError};
use crate::notifier::{ListUpdateListener, SectionNotifier};
use crate::position::PositionTranslator;
use crate::section::Section;

/// One registered section with its caller-chosen id.
#[derive(Debug, Clone)]
struct SectionEntry {
    id: String,
    section: Section,
}

/// Ordered, named mapping from section id to [`Section`].
///
/// Backed by a vector of entries: section counts are small, order is the
/// primary access axis, and id lookup is a linear scan.
///
/// # Example
///
/// ```
/// use horizon_lattice_sections::{Section, SectionRegistry, State};
///
/// let mut sections = SectionRegistry::new();
/// sections.add_section("news", Section::new().with_header().with_content_item_count(3))?;
/// sections.add_section("comments", Section::new().with_state(State::Loading))?;
///
/// assert_eq!(sections.total_row_count(), 5); // header + 3 items + loading row
/// # Ok::<(), horizon_lattice_sections::SectionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    entries: Vec<SectionEntry>,
}

impl SectionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a section at the end of the flat-list order.
    ///
    /// Fails with `DuplicateSection` if the id is already registered.
    pub fn add_section(&mut self, id: impl Into<String>, section: Section) -> Result<()> {
        let id = id.into();
        if self.contains(&id) {
            return Err(SectionError::duplicate_section(id));
        }
        self.entries.push(SectionEntry { id, section });
        Ok(())
    }

    /// Inserts a section at the given ordinal position.
    ///
    /// Fails with `DuplicateSection` if the id is already registered and
    /// with `OutOfRange` if `index > len()`.
    pub fn insert_section(
        &mut self,
        index: usize,
        id: impl Into<String>,
        section: Section,
    ) -> Result<()> {
        let id = id.into();
        if self.contains(&id) {
            return Err(SectionError::duplicate_section(id));
        }
        if index > self.entries.len() {
            return Err(SectionError::out_of_range(index, self.entries.len()));
        }
        self.entries.insert(index, SectionEntry { id, section });
        Ok(())
    }

    /// Removes and returns the section registered under `id`.
    pub fn remove_section(&mut self, id: &str) -> Result<Section> {
        let index = self.ordinal(id)?;
        Ok(self.entries.remove(index).section)
    }

    /// Removes every section.
    pub fn remove_all_sections(&mut self) {
        self.entries.clear();
    }

    /// Returns the section registered under `id`.
    pub fn section(&self, id: &str) -> Result<&Section> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.section)
            .ok_or_else(|| SectionError::unknown_section(id))
    }

    /// Returns mutable access to the section registered under `id`.
    pub fn section_mut(&mut self, id: &str) -> Result<&mut Section> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.section)
            .ok_or_else(|| SectionError::unknown_section(id))
    }

    /// Returns `true` if a section is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Returns the ordinal position of `id` in registration order.
    pub fn ordinal(&self, id: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| SectionError::unknown_section(id))
    }

    /// Returns the number of registered sections, visible or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no sections are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all sections in flat-list order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.entries
            .iter()
            .map(|entry| (entry.id.as_str(), &entry.section))
    }

    /// Iterates over the sections that currently contribute rows.
    pub fn visible_sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.iter().filter(|(_, section)| section.is_visible())
    }

    /// Total length of the flat list: the sum of every visible section's
    /// row count.
    pub fn total_row_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.section.total_row_count())
            .sum()
    }

    /// Returns a position translator over the registry's current state.
    pub fn translator(&self) -> PositionTranslator<'_> {
        PositionTranslator::new(self)
    }

    /// Returns a notifier for the section registered under `id`, emitting
    /// into `listener`.
    pub fn notifier<'a, L: ListUpdateListener>(
        &'a self,
        id: &'a str,
        listener: &'a mut L,
    ) -> SectionNotifier<'a, L> {
        SectionNotifier::new(self, id, listener)
    }
}
