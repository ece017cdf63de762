//! Sectioned item composition for flat list views.
//!
//! This crate lets a host screen compose multiple independently-managed
//! sections (each with its own optional header and footer, its content
//! rows, and a loading/empty/failed placeholder row) into the single flat
//! index space a list widget renders, and keeps the widget's fine-grained
//! change notifications consistent with that composition at all times.
//!
//! # Core Types
//!
//! - [`Section`]: one section's configuration, state and local slot layout
//! - [`State`]: `Loading`, `Loaded`, `Failed` or `Empty`
//! - [`SectionRegistry`]: the ordered, named collection of sections
//! - [`PositionTranslator`]: section-local slot ↔ flat position mapping
//! - [`SectionRow`]: tagged row kind resolved per flat position
//! - [`ListUpdateListener`]: the primitive notification interface the host
//!   implements
//! - [`SectionNotifier`]: semantic events translated into primitive calls
//!
//! # Example
//!
//! ```
//! use horizon_lattice_sections::{Section, SectionRegistry, State};
//!
//! let mut sections = SectionRegistry::new();
//! sections.add_section(
//!     "news",
//!     Section::new().with_header().with_content_item_count(3),
//! )?;
//! sections.add_section(
//!     "comments",
//!     Section::new().with_header().with_state(State::Loading),
//! )?;
//!
//! // The widget asks: what is row 5?
//! let translator = sections.translator();
//! let (id, row) = translator.resolve(5)?;
//! assert_eq!(id, "comments");
//! assert_eq!(row, horizon_lattice_sections::SectionRow::State(State::Loading));
//!
//! // A mutation in an earlier section shifts everything after it.
//! sections.section_mut("news")?.set_content_item_count(5);
//! assert_eq!(sections.translator().base_offset("comments")?, 6);
//! # Ok::<(), horizon_lattice_sections::SectionError>(())
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────┐     ┌────────────────────┐     ┌────────────────────┐
//! │ SectionRegistry  │<────│ PositionTranslator │<────│  SectionNotifier   │
//! │ (ordered, named) │     │ (stateless, fresh  │     │ (semantic event →  │
//! │                  │     │  on every call)    │     │  primitive calls)  │
//! └──────────────────┘     └────────────────────┘     └─────────┬──────────┘
//!                                                               │
//!                                                     ┌─────────▼──────────┐
//!                                                     │ ListUpdateListener │
//!                                                     │ (host widget seam) │
//!                                                     └────────────────────┘
//! ```
//!
//! The caller mutates a [`Section`] (and its backing data) first, then calls
//! the matching [`SectionNotifier`] operation; the notifier recomputes flat
//! offsets from the registry's current state and emits one or more primitive
//! notifications. Flat positions are never cached.
//!
//! # Threading
//!
//! Nothing here is internally synchronized. All mutation and notification is
//! expected to happen on the one thread that drives the host list view, the
//! same single-writer discipline the widget itself imposes.

mod error;
mod notifier;
mod position;
mod registry;
mod section;

pub use error::{Result, SectionError};
pub use notifier::{ListUpdateListener, SectionNotifier};
pub use position::PositionTranslator;
pub use registry::SectionRegistry;
pub use section::{Section, SectionRow, State};
