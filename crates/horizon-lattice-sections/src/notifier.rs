//! Semantic section events translated into flat-space notifications.
//!
//! [`SectionNotifier`] is the emission half of the crate: the caller mutates
//! a [`Section`](crate::Section) (or its backing data), then invokes the
//! matching `notify_*` operation, and the notifier turns that one semantic
//! event into the exact primitive calls the host widget needs, at flat
//! positions freshly computed by
//! [`PositionTranslator`](crate::PositionTranslator).
//!
//! Ordering matters wherever a mutation changes the row count or the
//! presence of a slot. The translator only ever sees *current* state, so the
//! two-step transitions (`notify_state_changed_to_loaded`,
//! `notify_state_changed_from_loaded`, the visibility toggles) take the
//! pre-mutation magnitude as an explicit parameter instead of trying to diff
//! it back out.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_sections::{
//!     ListUpdateListener, Section, SectionRegistry, State,
//! };
//!
//! struct PrintListener;
//!
//! impl ListUpdateListener for PrintListener {
//!     type Payload = ();
//!
//!     fn item_inserted(&mut self, position: usize) {
//!         println!("insert row {position}");
//!     }
//!     fn item_range_inserted(&mut self, position: usize, count: usize) {
//!         println!("insert {count} rows at {position}");
//!     }
//!     fn item_removed(&mut self, position: usize) {
//!         println!("remove row {position}");
//!     }
//!     fn item_range_removed(&mut self, position: usize, count: usize) {
//!         println!("remove {count} rows at {position}");
//!     }
//!     fn item_changed(&mut self, position: usize, _payload: Option<&()>) {
//!         println!("change row {position}");
//!     }
//!     fn item_range_changed(&mut self, position: usize, count: usize, _payload: Option<&()>) {
//!         println!("change {count} rows at {position}");
//!     }
//!     fn item_moved(&mut self, from: usize, to: usize) {
//!         println!("move row {from} -> {to}");
//!     }
//! }
//!
//! let mut sections = SectionRegistry::new();
//! sections.add_section("feed", Section::new().with_state(State::Loading))?;
//!
//! sections.section_mut("feed")?.set_state(State::Loaded);
//! sections.section_mut("feed")?.set_content_item_count(2);
//! sections
//!     .notifier("feed", &mut PrintListener)
//!     .notify_state_changed_to_loaded(State::Loading)?;
//! # Ok::<(), horizon_lattice_sections::SectionError>(())
//! ```

use crate::error::{Result, SectionError};
use crate::registry::SectionRegistry;
use crate::section::{Section, State};

/// Primitive flat-space notification interface.
///
/// Implemented by the host's bridge to the list widget's base adapter. All
/// positions are 0-based flat indices; ranges are `(first, count)`. The
/// associated `Payload` travels through the change notifications verbatim;
/// `None` means a full rebind of the affected rows.
///
/// The notifier never invokes binding or rendering callbacks; the widget
/// framework does that itself in response to these calls.
pub trait ListUpdateListener {
    /// Opaque change payload forwarded to the widget.
    type Payload;

    /// One row was inserted at `position`.
    fn item_inserted(&mut self, position: usize);

    /// `count` rows were inserted starting at `position`.
    fn item_range_inserted(&mut self, position: usize, count: usize);

    /// The row at `position` was removed.
    fn item_removed(&mut self, position: usize);

    /// `count` rows starting at `position` were removed.
    fn item_range_removed(&mut self, position: usize, count: usize);

    /// The row at `position` changed in place.
    fn item_changed(&mut self, position: usize, payload: Option<&Self::Payload>);

    /// `count` rows starting at `position` changed in place.
    fn item_range_changed(&mut self, position: usize, count: usize, payload: Option<&Self::Payload>);

    /// The row at `from` moved to `to`.
    fn item_moved(&mut self, from: usize, to: usize);
}

/// Translates semantic events of one section into flat-space notifications.
///
/// Obtained from [`SectionRegistry::notifier`]. The notifier borrows the
/// registry immutably and recomputes every flat position at call time, so it
/// must be constructed *after* the paired section mutation has been applied.
///
/// Every operation requires the section to be visible, except the two
/// visibility toggles themselves: an invisible section contributes no rows,
/// so any other notification for it would desynchronize the widget.
pub struct SectionNotifier<'a, L: ListUpdateListener> {
    sections: &'a SectionRegistry,
    id: &'a str,
    listener: &'a mut L,
}

impl<'a, L: ListUpdateListener> SectionNotifier<'a, L> {
    /// Creates a notifier for the section registered under `id`.
    pub fn new(sections: &'a SectionRegistry, id: &'a str, listener: &'a mut L) -> Self {
        Self {
            sections,
            id,
            listener,
        }
    }

    fn section(&self) -> Result<&'a Section> {
        let sections: &'a SectionRegistry = self.sections;
        sections.section(self.id)
    }

    fn visible_section(&self, operation: &'static str) -> Result<&'a Section> {
        let section = self.section()?;
        if !section.is_visible() {
            return Err(SectionError::contract(
                operation,
                format!("section '{}' is invisible", self.id),
            ));
        }
        Ok(section)
    }

    fn loaded_section(&self, operation: &'static str) -> Result<&'a Section> {
        let section = self.visible_section(operation)?;
        if !section.state().is_loaded() {
            return Err(SectionError::not_loaded(operation, section.state()));
        }
        Ok(section)
    }

    /// Flat index of the first inner row (content or state), past the header.
    fn first_inner_index(&self, section: &Section) -> Result<usize> {
        let base = self.sections.translator().base_offset(self.id)?;
        Ok(base + usize::from(section.has_header()))
    }

    fn check_content_range(section: &Section, start: usize, count: usize) -> Result<()> {
        let length = section.content_item_count();
        if start > length {
            return Err(SectionError::out_of_range(start, length));
        }
        if count > length - start {
            return Err(SectionError::out_of_range(start + count - 1, length));
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Primitive emission, with trace logging
    // -------------------------------------------------------------------------

    fn emit_inserted(&mut self, position: usize) {
        tracing::trace!(target: "horizon_lattice_sections::notifier", section = self.id, position, "item inserted");
        self.listener.item_inserted(position);
    }

    fn emit_range_inserted(&mut self, position: usize, count: usize) {
        tracing::trace!(target: "horizon_lattice_sections::notifier", section = self.id, position, count, "item range inserted");
        self.listener.item_range_inserted(position, count);
    }

    fn emit_removed(&mut self, position: usize) {
        tracing::trace!(target: "horizon_lattice_sections::notifier", section = self.id, position, "item removed");
        self.listener.item_removed(position);
    }

    fn emit_range_removed(&mut self, position: usize, count: usize) {
        tracing::trace!(target: "horizon_lattice_sections::notifier", section = self.id, position, count, "item range removed");
        self.listener.item_range_removed(position, count);
    }

    fn emit_changed(&mut self, position: usize, payload: Option<&L::Payload>) {
        tracing::trace!(target: "horizon_lattice_sections::notifier", section = self.id, position, "item changed");
        self.listener.item_changed(position, payload);
    }

    fn emit_range_changed(&mut self, position: usize, count: usize, payload: Option<&L::Payload>) {
        tracing::trace!(target: "horizon_lattice_sections::notifier", section = self.id, position, count, "item range changed");
        self.listener.item_range_changed(position, count, payload);
    }

    fn emit_moved(&mut self, from: usize, to: usize) {
        tracing::trace!(target: "horizon_lattice_sections::notifier", section = self.id, from, to, "item moved");
        self.listener.item_moved(from, to);
    }

    // -------------------------------------------------------------------------
    // Content item operations
    // -------------------------------------------------------------------------

    /// One content item was inserted at section position `position`.
    ///
    /// Call after the section's content count already reflects the insertion.
    pub fn notify_item_inserted(&mut self, position: usize) -> Result<()> {
        self.loaded_section("notify_item_inserted")?;
        let flat = self.sections.translator().content_index(self.id, position)?;
        self.emit_inserted(flat);
        Ok(())
    }

    /// All of the section's current content items were inserted at once.
    pub fn notify_all_items_inserted(&mut self) -> Result<()> {
        let section = self.loaded_section("notify_all_items_inserted")?;
        let first = self.first_inner_index(section)?;
        self.emit_range_inserted(first, section.content_item_count());
        Ok(())
    }

    /// `item_count` content items were inserted starting at section position
    /// `position_start`.
    pub fn notify_item_range_inserted(
        &mut self,
        position_start: usize,
        item_count: usize,
    ) -> Result<()> {
        let section = self.loaded_section("notify_item_range_inserted")?;
        Self::check_content_range(section, position_start, item_count)?;
        let first = self.first_inner_index(section)? + position_start;
        self.emit_range_inserted(first, item_count);
        Ok(())
    }

    /// The content item at section position `position` was removed.
    ///
    /// Call *before* decrementing the section's content count, so the
    /// translator still sees the pre-removal layout.
    pub fn notify_item_removed(&mut self, position: usize) -> Result<()> {
        self.loaded_section("notify_item_removed")?;
        let flat = self.sections.translator().content_index(self.id, position)?;
        self.emit_removed(flat);
        Ok(())
    }

    /// `item_count` content items starting at `position_start` were removed.
    ///
    /// Same pre-mutation rule as [`notify_item_removed`](Self::notify_item_removed).
    pub fn notify_item_range_removed(
        &mut self,
        position_start: usize,
        item_count: usize,
    ) -> Result<()> {
        let section = self.loaded_section("notify_item_range_removed")?;
        Self::check_content_range(section, position_start, item_count)?;
        let first = self.first_inner_index(section)? + position_start;
        self.emit_range_removed(first, item_count);
        Ok(())
    }

    /// The content item at section position `position` changed in place.
    pub fn notify_item_changed(&mut self, position: usize) -> Result<()> {
        self.loaded_section("notify_item_changed")?;
        let flat = self.sections.translator().content_index(self.id, position)?;
        self.emit_changed(flat, None);
        Ok(())
    }

    /// Every content item of the section changed; full rebind.
    pub fn notify_all_items_changed(&mut self) -> Result<()> {
        let section = self.loaded_section("notify_all_items_changed")?;
        let first = self.first_inner_index(section)?;
        self.emit_range_changed(first, section.content_item_count(), None);
        Ok(())
    }

    /// `item_count` content items starting at `position_start` changed.
    ///
    /// The payload is forwarded verbatim; `None` requests a full rebind of
    /// the affected rows.
    pub fn notify_item_range_changed(
        &mut self,
        position_start: usize,
        item_count: usize,
        payload: Option<&L::Payload>,
    ) -> Result<()> {
        let section = self.loaded_section("notify_item_range_changed")?;
        Self::check_content_range(section, position_start, item_count)?;
        let first = self.first_inner_index(section)? + position_start;
        self.emit_range_changed(first, item_count, payload);
        Ok(())
    }

    /// The content item at `from_position` moved to `to_position`.
    pub fn notify_item_moved(&mut self, from_position: usize, to_position: usize) -> Result<()> {
        self.loaded_section("notify_item_moved")?;
        let translator = self.sections.translator();
        let from = translator.content_index(self.id, from_position)?;
        let to = translator.content_index(self.id, to_position)?;
        self.emit_moved(from, to);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Header and footer operations
    // -------------------------------------------------------------------------

    /// The header row changed in place.
    pub fn notify_header_changed(&mut self) -> Result<()> {
        self.visible_section("notify_header_changed")?;
        let flat = self.sections.translator().header_index(self.id)?;
        self.emit_changed(flat, None);
        Ok(())
    }

    /// The footer row changed in place.
    pub fn notify_footer_changed(&mut self) -> Result<()> {
        self.visible_section("notify_footer_changed")?;
        let flat = self.sections.translator().footer_index(self.id)?;
        self.emit_changed(flat, None);
        Ok(())
    }

    /// The section gained a header; `set_has_header(true)` must already be
    /// applied.
    pub fn notify_header_inserted(&mut self) -> Result<()> {
        let section = self.visible_section("notify_header_inserted")?;
        if !section.has_header() {
            return Err(SectionError::contract(
                "notify_header_inserted",
                "section has no header; apply set_has_header(true) first",
            ));
        }
        let flat = self.sections.translator().header_index(self.id)?;
        self.emit_inserted(flat);
        Ok(())
    }

    /// The section lost its header; `set_has_header(false)` must already be
    /// applied. The removed row sat at the section's base offset.
    pub fn notify_header_removed(&mut self) -> Result<()> {
        let section = self.visible_section("notify_header_removed")?;
        if section.has_header() {
            return Err(SectionError::contract(
                "notify_header_removed",
                "section still has a header; apply set_has_header(false) first",
            ));
        }
        let flat = self.sections.translator().base_offset(self.id)?;
        self.emit_removed(flat);
        Ok(())
    }

    /// The section gained a footer; `set_has_footer(true)` must already be
    /// applied.
    pub fn notify_footer_inserted(&mut self) -> Result<()> {
        let section = self.visible_section("notify_footer_inserted")?;
        if !section.has_footer() {
            return Err(SectionError::contract(
                "notify_footer_inserted",
                "section has no footer; apply set_has_footer(true) first",
            ));
        }
        let flat = self.sections.translator().footer_index(self.id)?;
        self.emit_inserted(flat);
        Ok(())
    }

    /// The section lost its footer; `set_has_footer(false)` must already be
    /// applied. The removed row sat one past the section's current last slot.
    pub fn notify_footer_removed(&mut self) -> Result<()> {
        let section = self.visible_section("notify_footer_removed")?;
        if section.has_footer() {
            return Err(SectionError::contract(
                "notify_footer_removed",
                "section still has a footer; apply set_has_footer(false) first",
            ));
        }
        let base = self.sections.translator().base_offset(self.id)?;
        self.emit_removed(base + section.slot_count());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // State transitions
    // -------------------------------------------------------------------------

    /// The section moved between two not-loaded states; the state row
    /// survives, only its rendered content changes.
    pub fn notify_not_loaded_state_changed(&mut self, previous_state: State) -> Result<()> {
        const OP: &str = "notify_not_loaded_state_changed";
        let section = self.visible_section(OP)?;
        if previous_state == section.state() {
            return Err(SectionError::contract(OP, "state did not change"));
        }
        if previous_state.is_loaded() {
            return Err(SectionError::contract(
                OP,
                "previous state is Loaded; use notify_state_changed_from_loaded",
            ));
        }
        if section.state().is_loaded() {
            return Err(SectionError::contract(
                OP,
                "section is Loaded; use notify_state_changed_to_loaded",
            ));
        }
        let flat = self.sections.translator().state_row_index(self.id)?;
        self.emit_changed(flat, None);
        Ok(())
    }

    /// The section left `previous_state` and is now `Loaded`: the state row
    /// is removed, then the current content items are inserted in its place.
    ///
    /// The remove is emitted first because it is computed against the
    /// pre-transition layout. With zero content items only the remove is
    /// emitted.
    pub fn notify_state_changed_to_loaded(&mut self, previous_state: State) -> Result<()> {
        const OP: &str = "notify_state_changed_to_loaded";
        let section = self.visible_section(OP)?;
        if previous_state.is_loaded() {
            return Err(SectionError::contract(
                OP,
                "previous state is already Loaded",
            ));
        }
        if !section.state().is_loaded() {
            return Err(SectionError::not_loaded(OP, section.state()));
        }
        let first = self.first_inner_index(section)?;
        self.emit_removed(first);
        let item_count = section.content_item_count();
        if item_count > 0 {
            self.emit_range_inserted(first, item_count);
        }
        Ok(())
    }

    /// The section left `Loaded`: its `previous_content_item_count` content
    /// rows are removed, then the new state row is inserted in their place.
    ///
    /// The remove is emitted first (skipped when the previous count was 0),
    /// computed against the pre-transition layout the caller reports.
    pub fn notify_state_changed_from_loaded(
        &mut self,
        previous_content_item_count: usize,
    ) -> Result<()> {
        const OP: &str = "notify_state_changed_from_loaded";
        let section = self.visible_section(OP)?;
        if section.state().is_loaded() {
            return Err(SectionError::contract(
                OP,
                "section is still Loaded; apply set_state first",
            ));
        }
        let first = self.first_inner_index(section)?;
        if previous_content_item_count > 0 {
            self.emit_range_removed(first, previous_content_item_count);
        }
        self.emit_inserted(first);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Visibility transitions
    // -------------------------------------------------------------------------

    /// The section became visible; `set_visible(true)` must already be
    /// applied. Inserts the section's full row range at its new base offset.
    pub fn notify_section_changed_to_visible(&mut self) -> Result<()> {
        let section = self.section()?;
        if !section.is_visible() {
            return Err(SectionError::contract(
                "notify_section_changed_to_visible",
                "section is invisible; apply set_visible(true) first",
            ));
        }
        let base = self.sections.translator().base_offset(self.id)?;
        self.emit_range_inserted(base, section.total_row_count());
        Ok(())
    }

    /// The section became invisible; `set_visible(false)` must already be
    /// applied. Removes the row range the section occupied at
    /// `previous_section_position` before the toggle.
    pub fn notify_section_changed_to_invisible(
        &mut self,
        previous_section_position: usize,
    ) -> Result<()> {
        let section = self.section()?;
        if section.is_visible() {
            return Err(SectionError::contract(
                "notify_section_changed_to_invisible",
                "section is still visible; apply set_visible(false) first",
            ));
        }
        self.emit_range_removed(previous_section_position, section.slot_count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Update {
        Inserted(usize),
        RangeInserted(usize, usize),
        Removed(usize),
        RangeRemoved(usize, usize),
        Changed(usize, Option<&'static str>),
        RangeChanged(usize, usize, Option<&'static str>),
        Moved(usize, usize),
    }

    #[derive(Default)]
    struct RecordingListener {
        updates: Arc<Mutex<Vec<Update>>>,
    }

    impl ListUpdateListener for RecordingListener {
        type Payload = &'static str;

        fn item_inserted(&mut self, position: usize) {
            self.updates.lock().push(Update::Inserted(position));
        }
        fn item_range_inserted(&mut self, position: usize, count: usize) {
            self.updates.lock().push(Update::RangeInserted(position, count));
        }
        fn item_removed(&mut self, position: usize) {
            self.updates.lock().push(Update::Removed(position));
        }
        fn item_range_removed(&mut self, position: usize, count: usize) {
            self.updates.lock().push(Update::RangeRemoved(position, count));
        }
        fn item_changed(&mut self, position: usize, payload: Option<&&'static str>) {
            self.updates.lock().push(Update::Changed(position, payload.copied()));
        }
        fn item_range_changed(
            &mut self,
            position: usize,
            count: usize,
            payload: Option<&&'static str>,
        ) {
            self.updates
                .lock()
                .push(Update::RangeChanged(position, count, payload.copied()));
        }
        fn item_moved(&mut self, from: usize, to: usize) {
            self.updates.lock().push(Update::Moved(from, to));
        }
    }

    /// One loaded section of 3 rows, then a header + loading section.
    /// Flat layout: [ads 0..3, comments header 3, comments state row 4].
    fn feed() -> (SectionRegistry, RecordingListener, Arc<Mutex<Vec<Update>>>) {
        let mut sections = SectionRegistry::new();
        sections
            .add_section("ads", Section::new().with_content_item_count(3))
            .unwrap();
        sections
            .add_section(
                "comments",
                Section::new().with_header().with_state(State::Loading),
            )
            .unwrap();
        let listener = RecordingListener::default();
        let updates = listener.updates.clone();
        (sections, listener, updates)
    }

    #[test]
    fn test_item_inserted_translates_to_flat_space() {
        let (mut sections, mut listener, updates) = feed();
        sections.section_mut("ads").unwrap().set_content_item_count(4);
        sections
            .notifier("ads", &mut listener)
            .notify_item_inserted(1)
            .unwrap();
        assert_eq!(*updates.lock(), [Update::Inserted(1)]);
    }

    #[test]
    fn test_all_items_inserted_spans_content_rows() {
        let (sections, mut listener, updates) = feed();
        sections
            .notifier("ads", &mut listener)
            .notify_all_items_inserted()
            .unwrap();
        assert_eq!(*updates.lock(), [Update::RangeInserted(0, 3)]);
    }

    #[test]
    fn test_item_range_inserted_offsets_past_header() {
        let (mut sections, mut listener, updates) = feed();
        {
            let comments = sections.section_mut("comments").unwrap();
            comments.set_state(State::Loaded);
            comments.set_content_item_count(2);
        }
        sections
            .notifier("comments", &mut listener)
            .notify_item_range_inserted(0, 2)
            .unwrap();
        assert_eq!(*updates.lock(), [Update::RangeInserted(4, 2)]);
    }

    #[test]
    fn test_item_removed_uses_pre_mutation_count() {
        let (sections, mut listener, updates) = feed();
        // Last item of "ads": notify first, then the caller decrements.
        sections
            .notifier("ads", &mut listener)
            .notify_item_removed(2)
            .unwrap();
        assert_eq!(*updates.lock(), [Update::Removed(2)]);
    }

    #[test]
    fn test_item_range_removed_bounds_check() {
        let (sections, mut listener, _) = feed();
        let err = sections
            .notifier("ads", &mut listener)
            .notify_item_range_removed(1, 3)
            .unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_not_loaded_state_changed_scenario() {
        let (mut sections, mut listener, updates) = feed();
        sections.section_mut("comments").unwrap().set_state(State::Empty);
        sections
            .notifier("comments", &mut listener)
            .notify_not_loaded_state_changed(State::Loading)
            .unwrap();
        // Header at 3, state row at 4.
        assert_eq!(*updates.lock(), [Update::Changed(4, None)]);
    }

    #[test]
    fn test_state_changed_to_loaded_scenario() {
        let (mut sections, mut listener, updates) = feed();
        {
            let comments = sections.section_mut("comments").unwrap();
            comments.set_state(State::Loaded);
            comments.set_content_item_count(2);
        }
        sections
            .notifier("comments", &mut listener)
            .notify_state_changed_to_loaded(State::Loading)
            .unwrap();
        assert_eq!(
            *updates.lock(),
            [Update::Removed(4), Update::RangeInserted(4, 2)]
        );
    }

    #[test]
    fn test_state_changed_to_loaded_with_no_content() {
        let (mut sections, mut listener, updates) = feed();
        {
            let comments = sections.section_mut("comments").unwrap();
            comments.set_state(State::Loaded);
            comments.set_content_item_count(0);
        }
        sections
            .notifier("comments", &mut listener)
            .notify_state_changed_to_loaded(State::Loading)
            .unwrap();
        assert_eq!(*updates.lock(), [Update::Removed(4)]);
    }

    #[test]
    fn test_state_changed_from_loaded() {
        let (mut sections, mut listener, updates) = feed();
        {
            let ads = sections.section_mut("ads").unwrap();
            ads.set_state(State::Failed);
        }
        sections
            .notifier("ads", &mut listener)
            .notify_state_changed_from_loaded(3)
            .unwrap();
        assert_eq!(
            *updates.lock(),
            [Update::RangeRemoved(0, 3), Update::Inserted(0)]
        );
    }

    #[test]
    fn test_state_changed_from_loaded_with_no_previous_content() {
        let (mut sections, mut listener, updates) = feed();
        {
            let ads = sections.section_mut("ads").unwrap();
            ads.set_state(State::Empty);
            ads.set_content_item_count(0);
        }
        sections
            .notifier("ads", &mut listener)
            .notify_state_changed_from_loaded(0)
            .unwrap();
        assert_eq!(*updates.lock(), [Update::Inserted(0)]);
    }

    #[test]
    fn test_header_and_footer_changed() {
        let (sections, mut listener, updates) = feed();
        sections
            .notifier("comments", &mut listener)
            .notify_header_changed()
            .unwrap();
        assert_eq!(*updates.lock(), [Update::Changed(3, None)]);

        let err = sections
            .notifier("ads", &mut listener)
            .notify_footer_changed()
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_header_insert_and_remove() {
        let (mut sections, mut listener, updates) = feed();
        sections.section_mut("ads").unwrap().set_has_header(true);
        sections
            .notifier("ads", &mut listener)
            .notify_header_inserted()
            .unwrap();
        assert_eq!(*updates.lock(), [Update::Inserted(0)]);

        updates.lock().clear();
        sections.section_mut("ads").unwrap().set_has_header(false);
        sections
            .notifier("ads", &mut listener)
            .notify_header_removed()
            .unwrap();
        assert_eq!(*updates.lock(), [Update::Removed(0)]);
    }

    #[test]
    fn test_footer_insert_and_remove() {
        let (mut sections, mut listener, updates) = feed();
        sections.section_mut("comments").unwrap().set_has_footer(true);
        sections
            .notifier("comments", &mut listener)
            .notify_footer_inserted()
            .unwrap();
        // Header 3, state row 4, footer 5.
        assert_eq!(*updates.lock(), [Update::Inserted(5)]);

        updates.lock().clear();
        sections.section_mut("comments").unwrap().set_has_footer(false);
        sections
            .notifier("comments", &mut listener)
            .notify_footer_removed()
            .unwrap();
        assert_eq!(*updates.lock(), [Update::Removed(5)]);
    }

    #[test]
    fn test_section_visibility_toggles() {
        let (mut sections, mut listener, updates) = feed();

        // "comments" disappears from rows 3..5.
        sections.section_mut("comments").unwrap().set_visible(false);
        sections
            .notifier("comments", &mut listener)
            .notify_section_changed_to_invisible(3)
            .unwrap();
        assert_eq!(*updates.lock(), [Update::RangeRemoved(3, 2)]);

        updates.lock().clear();
        sections.section_mut("comments").unwrap().set_visible(true);
        sections
            .notifier("comments", &mut listener)
            .notify_section_changed_to_visible()
            .unwrap();
        assert_eq!(*updates.lock(), [Update::RangeInserted(3, 2)]);
    }

    #[test]
    fn test_section_changed_to_invisible_uses_previous_position() {
        let mut sections = SectionRegistry::new();
        sections
            .add_section("a", Section::new().with_content_item_count(3))
            .unwrap();
        sections
            .add_section(
                "b",
                Section::new()
                    .with_header()
                    .with_footer()
                    .with_content_item_count(3),
            )
            .unwrap();
        let mut listener = RecordingListener::default();
        let updates = listener.updates.clone();

        sections.section_mut("b").unwrap().set_visible(false);
        sections
            .notifier("b", &mut listener)
            .notify_section_changed_to_invisible(3)
            .unwrap();
        assert_eq!(*updates.lock(), [Update::RangeRemoved(3, 5)]);
    }

    #[test]
    fn test_all_items_changed_is_idempotent() {
        let (sections, mut listener, updates) = feed();
        let mut notifier = sections.notifier("ads", &mut listener);
        notifier.notify_all_items_changed().unwrap();
        notifier.notify_all_items_changed().unwrap();
        assert_eq!(
            *updates.lock(),
            [
                Update::RangeChanged(0, 3, None),
                Update::RangeChanged(0, 3, None)
            ]
        );
    }

    #[test]
    fn test_payload_forwarded_verbatim() {
        let (sections, mut listener, updates) = feed();
        sections
            .notifier("ads", &mut listener)
            .notify_item_range_changed(1, 2, Some(&"badge-only"))
            .unwrap();
        assert_eq!(*updates.lock(), [Update::RangeChanged(1, 2, Some("badge-only"))]);
    }

    #[test]
    fn test_item_moved() {
        let (sections, mut listener, updates) = feed();
        sections
            .notifier("ads", &mut listener)
            .notify_item_moved(0, 2)
            .unwrap();
        assert_eq!(*updates.lock(), [Update::Moved(0, 2)]);
    }

    #[test]
    fn test_item_changed_single() {
        let (sections, mut listener, updates) = feed();
        sections
            .notifier("ads", &mut listener)
            .notify_item_changed(2)
            .unwrap();
        assert_eq!(*updates.lock(), [Update::Changed(2, None)]);
    }

    #[test]
    fn test_insert_then_remove_round_trip_restores_offsets() {
        let (mut sections, mut listener, _) = feed();
        let before_total = sections.total_row_count();
        let before_comments = sections.translator().base_offset("comments").unwrap();

        sections.section_mut("ads").unwrap().set_content_item_count(4);
        sections
            .notifier("ads", &mut listener)
            .notify_item_inserted(1)
            .unwrap();
        assert_eq!(sections.translator().base_offset("comments").unwrap(), 4);

        sections
            .notifier("ads", &mut listener)
            .notify_item_removed(1)
            .unwrap();
        sections.section_mut("ads").unwrap().set_content_item_count(3);

        assert_eq!(sections.total_row_count(), before_total);
        assert_eq!(
            sections.translator().base_offset("comments").unwrap(),
            before_comments
        );
    }

    #[test]
    fn test_content_notifications_require_loaded() {
        let (sections, mut listener, _) = feed();
        let err = sections
            .notifier("comments", &mut listener)
            .notify_item_inserted(0)
            .unwrap_err();
        assert!(err.is_contract_violation());

        let err = sections
            .notifier("comments", &mut listener)
            .notify_all_items_changed()
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_state_notifications_require_not_loaded() {
        let (sections, mut listener, _) = feed();
        let err = sections
            .notifier("ads", &mut listener)
            .notify_not_loaded_state_changed(State::Loading)
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_not_loaded_state_changed_rejects_no_change() {
        let (sections, mut listener, _) = feed();
        let err = sections
            .notifier("comments", &mut listener)
            .notify_not_loaded_state_changed(State::Loading)
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_invisible_section_rejects_item_notifications() {
        let (mut sections, mut listener, _) = feed();
        sections.section_mut("ads").unwrap().set_visible(false);
        let err = sections
            .notifier("ads", &mut listener)
            .notify_item_changed(0)
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_visibility_toggle_preconditions() {
        let (sections, mut listener, _) = feed();
        // Still visible: the toggle was not applied first.
        let err = sections
            .notifier("ads", &mut listener)
            .notify_section_changed_to_invisible(0)
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_unknown_section() {
        let (sections, mut listener, _) = feed();
        let err = sections
            .notifier("missing", &mut listener)
            .notify_all_items_changed()
            .unwrap_err();
        assert!(matches!(err, SectionError::UnknownSection { .. }));
    }
}
