//! Section configuration and section-local slot layout.
//!
//! A [`Section`] is one logically independent block of rows inside a flat
//! list: an optional header, an optional footer, and in between either its
//! content rows (when [`State::Loaded`]) or a single state row (when loading,
//! failed, or empty). The section computes its own *slot layout* (the
//! 0-based indices of its rows relative to itself), while flat-space
//! placement is the job of [`PositionTranslator`](crate::PositionTranslator).
//!
//! # Example
//!
//! ```
//! use horizon_lattice_sections::{Section, State};
//!
//! let mut section = Section::new().with_header().with_state(State::Loading);
//! assert_eq!(section.total_row_count(), 2); // header + state row
//!
//! section.set_state(State::Loaded);
//! section.set_content_item_count(3);
//! assert_eq!(section.total_row_count(), 4); // header + 3 content rows
//! ```

use crate::error::{Result, SectionError};

/// Loading state of a section.
///
/// `Loaded` exposes the section's content rows; each of the other three
/// states replaces the content with a single state row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Content is being fetched; a single loading row is shown.
    Loading,
    /// Content is available; `content_item_count` rows are shown (default).
    #[default]
    Loaded,
    /// Content failed to load; a single failure row is shown.
    Failed,
    /// Content loaded but is empty; a single empty-placeholder row is shown.
    Empty,
}

impl State {
    /// Returns `true` if this is the `Loaded` state.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// The kind of row occupying one slot of a section's layout.
///
/// Resolved per flat index by
/// [`PositionTranslator::resolve`](crate::PositionTranslator::resolve) so
/// hosts can dispatch binding without downcasting or inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRow {
    /// The section's header row.
    Header,
    /// The section's footer row.
    Footer,
    /// The single state row shown while the section is not loaded.
    State(State),
    /// A content row, carrying its section-local content index.
    Content(usize),
}

/// Configuration and row bookkeeping for one section of a flat list.
///
/// A section contributes rows to the list only while it is visible. Its
/// layout is, in slot order: header (if any), then either the content rows
/// (`Loaded`) or one state row (any other state), then footer (if any).
///
/// Mutations are plain setters; every mutation that changes the row layout
/// must be paired by the caller with the matching
/// [`SectionNotifier`](crate::SectionNotifier) operation so the host widget
/// stays in sync.
#[derive(Debug, Clone)]
pub struct Section {
    has_header: bool,
    has_footer: bool,
    visible: bool,
    state: State,
    content_item_count: usize,
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

impl Section {
    /// Creates a visible, loaded section with no header, no footer and no
    /// content items.
    pub fn new() -> Self {
        Self {
            has_header: false,
            has_footer: false,
            visible: true,
            state: State::Loaded,
            content_item_count: 0,
        }
    }

    /// Adds a header slot.
    pub fn with_header(mut self) -> Self {
        self.has_header = true;
        self
    }

    /// Adds a footer slot.
    pub fn with_footer(mut self) -> Self {
        self.has_footer = true;
        self
    }

    /// Sets the initial state.
    pub fn with_state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    /// Sets the initial content item count.
    pub fn with_content_item_count(mut self, count: usize) -> Self {
        self.content_item_count = count;
        self
    }

    /// Sets the initial visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Returns `true` if the section has a header slot.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Returns `true` if the section has a footer slot.
    pub fn has_footer(&self) -> bool {
        self.has_footer
    }

    /// Returns `true` if the section contributes rows to the flat list.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the number of content rows shown while `Loaded`.
    ///
    /// The value is meaningless in any other state.
    pub fn content_item_count(&self) -> usize {
        self.content_item_count
    }

    /// Sets header presence.
    pub fn set_has_header(&mut self, has_header: bool) {
        self.has_header = has_header;
    }

    /// Sets footer presence.
    pub fn set_has_footer(&mut self, has_footer: bool) {
        self.has_footer = has_footer;
    }

    /// Sets visibility.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Sets the state.
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }

    /// Sets the number of content rows.
    pub fn set_content_item_count(&mut self, count: usize) {
        self.content_item_count = count;
    }

    /// Number of slots the header occupies (0 or 1).
    #[inline]
    fn header_width(&self) -> usize {
        usize::from(self.has_header)
    }

    /// Number of slots the footer occupies (0 or 1).
    #[inline]
    fn footer_width(&self) -> usize {
        usize::from(self.has_footer)
    }

    /// Number of inner slots: the content rows while loaded, one state row
    /// otherwise.
    #[inline]
    fn inner_row_count(&self) -> usize {
        if self.state.is_loaded() {
            self.content_item_count
        } else {
            1
        }
    }

    /// The slot occupied by the header, if present.
    pub fn header_slot(&self) -> Option<usize> {
        self.has_header.then_some(0)
    }

    /// The slot occupied by the footer, if present. Always the last slot.
    pub fn footer_slot(&self) -> Option<usize> {
        self.has_footer.then(|| self.slot_count() - 1)
    }

    /// The slot occupied by the state row, immediately after the header.
    ///
    /// Fails with a contract violation while the section is `Loaded`: loaded
    /// sections show content rows, not a state row.
    pub fn state_row_slot(&self) -> Result<usize> {
        if self.state.is_loaded() {
            return Err(SectionError::contract(
                "state_row_slot",
                "loaded sections have no state row",
            ));
        }
        Ok(self.header_width())
    }

    /// The slot occupied by content item `index`, offset past the header.
    ///
    /// Fails with a contract violation unless the section is `Loaded`, and
    /// with `OutOfRange` if `index` is not a current content index.
    pub fn content_slot(&self, index: usize) -> Result<usize> {
        if !self.state.is_loaded() {
            return Err(SectionError::not_loaded("content_slot", self.state));
        }
        if index >= self.content_item_count {
            return Err(SectionError::out_of_range(index, self.content_item_count));
        }
        Ok(self.header_width() + index)
    }

    /// The size of the section-local layout, ignoring visibility.
    ///
    /// This is the row count the section had (or will have) while visible;
    /// `notify_section_changed_to_invisible` relies on it after the
    /// visibility flag has already been cleared.
    pub fn slot_count(&self) -> usize {
        self.header_width() + self.inner_row_count() + self.footer_width()
    }

    /// The number of rows this section currently contributes to the flat
    /// list: [`slot_count`](Self::slot_count) while visible, 0 otherwise.
    pub fn total_row_count(&self) -> usize {
        if self.visible { self.slot_count() } else { 0 }
    }

    /// Resolves the kind of row occupying a section-local slot.
    pub fn row_at(&self, slot: usize) -> Result<SectionRow> {
        let slot_count = self.slot_count();
        if slot >= slot_count {
            return Err(SectionError::out_of_range(slot, slot_count));
        }
        if self.has_header && slot == 0 {
            return Ok(SectionRow::Header);
        }
        if self.has_footer && slot == slot_count - 1 {
            return Ok(SectionRow::Footer);
        }
        let inner = slot - self.header_width();
        if self.state.is_loaded() {
            Ok(SectionRow::Content(inner))
        } else {
            Ok(SectionRow::State(self.state))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_counts() {
        let section = Section::new()
            .with_header()
            .with_footer()
            .with_content_item_count(4);
        assert_eq!(section.slot_count(), 6);
        assert_eq!(section.total_row_count(), 6);

        let bare = Section::new().with_content_item_count(4);
        assert_eq!(bare.total_row_count(), 4);
    }

    #[test]
    fn test_not_loaded_states_occupy_one_slot() {
        for state in [State::Loading, State::Failed, State::Empty] {
            let section = Section::new()
                .with_header()
                .with_state(state)
                .with_content_item_count(10);
            // Content count is ignored outside Loaded.
            assert_eq!(section.total_row_count(), 2);
            assert_eq!(section.state_row_slot().unwrap(), 1);
        }
    }

    #[test]
    fn test_invisible_section_contributes_no_rows() {
        let section = Section::new()
            .with_header()
            .with_content_item_count(3)
            .with_visible(false);
        assert_eq!(section.total_row_count(), 0);
        // The layout itself is still defined.
        assert_eq!(section.slot_count(), 4);
    }

    #[test]
    fn test_header_and_footer_slots() {
        let section = Section::new()
            .with_header()
            .with_footer()
            .with_content_item_count(2);
        assert_eq!(section.header_slot(), Some(0));
        assert_eq!(section.footer_slot(), Some(3));
        assert_eq!(section.content_slot(0).unwrap(), 1);
        assert_eq!(section.content_slot(1).unwrap(), 2);

        let headless = Section::new().with_content_item_count(2);
        assert_eq!(headless.header_slot(), None);
        assert_eq!(headless.footer_slot(), None);
        assert_eq!(headless.content_slot(0).unwrap(), 0);
    }

    #[test]
    fn test_content_slot_requires_loaded() {
        let section = Section::new().with_state(State::Loading);
        let err = section.content_slot(0).unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_content_slot_bounds() {
        let section = Section::new().with_content_item_count(2);
        assert!(section.content_slot(2).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_state_row_slot_requires_not_loaded() {
        let section = Section::new().with_content_item_count(1);
        assert!(section.state_row_slot().unwrap_err().is_contract_violation());
    }

    #[test]
    fn test_row_at_loaded_layout() {
        let section = Section::new()
            .with_header()
            .with_footer()
            .with_content_item_count(2);
        assert_eq!(section.row_at(0).unwrap(), SectionRow::Header);
        assert_eq!(section.row_at(1).unwrap(), SectionRow::Content(0));
        assert_eq!(section.row_at(2).unwrap(), SectionRow::Content(1));
        assert_eq!(section.row_at(3).unwrap(), SectionRow::Footer);
        assert!(section.row_at(4).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_row_at_state_layout() {
        let section = Section::new().with_header().with_state(State::Failed);
        assert_eq!(section.row_at(0).unwrap(), SectionRow::Header);
        assert_eq!(section.row_at(1).unwrap(), SectionRow::State(State::Failed));
        assert!(section.row_at(2).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_zero_content_loaded_section() {
        let section = Section::new().with_header().with_footer();
        assert_eq!(section.slot_count(), 2);
        assert_eq!(section.footer_slot(), Some(1));
        assert!(section.content_slot(0).unwrap_err().is_out_of_range());
    }
}
