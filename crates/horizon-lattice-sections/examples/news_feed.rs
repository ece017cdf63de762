//! Drives a small sectioned news feed and prints the notification stream a
//! list widget would receive.
//!
//! Run with `RUST_LOG=horizon_lattice_sections=trace` to also see the
//! crate's own trace output.

use horizon_lattice_sections::{
    ListUpdateListener, Section, SectionError, SectionRegistry, State,
};

/// Stands in for the bridge to a real list widget's adapter.
struct ConsoleListener;

impl ListUpdateListener for ConsoleListener {
    type Payload = String;

    fn item_inserted(&mut self, position: usize) {
        println!("  -> insert row {position}");
    }

    fn item_range_inserted(&mut self, position: usize, count: usize) {
        println!("  -> insert {count} rows at {position}");
    }

    fn item_removed(&mut self, position: usize) {
        println!("  -> remove row {position}");
    }

    fn item_range_removed(&mut self, position: usize, count: usize) {
        println!("  -> remove {count} rows at {position}");
    }

    fn item_changed(&mut self, position: usize, payload: Option<&String>) {
        match payload {
            Some(payload) => println!("  -> change row {position} (payload: {payload})"),
            None => println!("  -> change row {position} (full rebind)"),
        }
    }

    fn item_range_changed(&mut self, position: usize, count: usize, payload: Option<&String>) {
        match payload {
            Some(payload) => {
                println!("  -> change {count} rows at {position} (payload: {payload})");
            }
            None => println!("  -> change {count} rows at {position} (full rebind)"),
        }
    }

    fn item_moved(&mut self, from: usize, to: usize) {
        println!("  -> move row {from} -> {to}");
    }
}

fn main() -> Result<(), SectionError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut sections = SectionRegistry::new();
    sections.add_section(
        "headlines",
        Section::new().with_header().with_content_item_count(3),
    )?;
    sections.add_section(
        "comments",
        Section::new().with_header().with_state(State::Loading),
    )?;

    let mut listener = ConsoleListener;

    println!("initial flat list has {} rows", sections.total_row_count());

    println!("comments failed to load:");
    sections.section_mut("comments")?.set_state(State::Failed);
    sections
        .notifier("comments", &mut listener)
        .notify_not_loaded_state_changed(State::Loading)?;

    println!("retry succeeds with 2 comments:");
    {
        let comments = sections.section_mut("comments")?;
        comments.set_state(State::Loaded);
        comments.set_content_item_count(2);
    }
    sections
        .notifier("comments", &mut listener)
        .notify_state_changed_to_loaded(State::Failed)?;

    println!("a headline is updated in place:");
    sections
        .notifier("headlines", &mut listener)
        .notify_item_range_changed(0, 1, Some(&"headline-text".to_string()))?;

    println!("headlines collapse:");
    let previous_position = sections.translator().base_offset("headlines")?;
    sections.section_mut("headlines")?.set_visible(false);
    sections
        .notifier("headlines", &mut listener)
        .notify_section_changed_to_invisible(previous_position)?;

    println!("final flat list has {} rows", sections.total_row_count());

    Ok(())
}
