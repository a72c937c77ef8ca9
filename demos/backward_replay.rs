//! Backward Replay
//!
//! This example links actions into a history and walks it from the newest
//! node back to the root.
//!
//! Key concepts:
//! - Appending fills in the predecessor's `next` link
//! - Backward iteration is lazy and yields newest first
//! - An exhausted iterator keeps returning `None`
//!
//! Run with: cargo run --example backward_replay

use actionlog::history::{History, HistoryError};
use actionlog::todo::TodoAction;

fn main() -> Result<(), HistoryError> {
    println!("=== Backward Replay Example ===\n");

    let mut history = History::new();
    let mut tip = None;
    for text in ["A", "B", "C", "D"] {
        tip = Some(history.append(tip, TodoAction::Add(text.to_string()))?);
    }
    println!("Recorded {} actions", history.len());

    let mut iter = history.iter_back(tip)?;
    for action in iter.by_ref() {
        println!("  {action:?}");
    }
    println!("Exhausted: {}", iter.is_exhausted());
    println!("Next call after exhaustion: {:?}", iter.next());

    let empty = history.iter_back(None)?.count();
    println!("Walking from no node yields {empty} actions");

    println!("\n=== Example Complete ===");
    Ok(())
}
