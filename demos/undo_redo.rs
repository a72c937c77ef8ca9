//! Undo and Redo
//!
//! This example drives a store through dispatch, undo, redo, and a dry run
//! of a batch before committing it.
//!
//! Key concepts:
//! - The store records every accepted action in its history
//! - Undo and redo move the head along the chain
//! - Dispatching after an undo discards the undone actions
//! - Preflight reports every rejection in a batch at once
//!
//! Run with: cargo run --example undo_redo

use actionlog::core::Action;
use actionlog::store::{Store, StoreError};
use actionlog::todo::{TodoAction, TodoReducer};
use stillwater::validation::Validation;

fn main() -> Result<(), StoreError> {
    println!("=== Undo and Redo Example ===\n");

    let mut store = Store::new(TodoReducer);
    store.dispatch(TodoAction::Add("buy milk".to_string()))?;
    store.dispatch(TodoAction::Add("walk dog".to_string()))?;
    store.dispatch(TodoAction::RemoveOne(0))?;
    println!("Current:     {:?}", store.current_state().todos);

    store.undo()?;
    println!("After undo:  {:?}", store.current_state().todos);
    store.undo()?;
    println!("After undo:  {:?}", store.current_state().todos);

    store.redo()?;
    println!("After redo:  {:?}", store.current_state().todos);
    println!("Can redo:    {}", store.can_redo());

    store.dispatch(TodoAction::Add("file taxes".to_string()))?;
    println!("New branch:  {:?}", store.current_state().todos);
    println!("Can redo:    {}", store.can_redo());

    let replayed: Vec<_> = store.replay().map(|action| action.kind()).collect();
    println!("Replay:      {replayed:?}");

    println!("\n--- Preflight ---");
    let batch = [
        TodoAction::RemoveOne(9),
        TodoAction::Add("call mom".to_string()),
        TodoAction::RemoveOne(5),
    ];
    match store.preflight(&batch) {
        Validation::Success(state) => println!("Batch would leave {:?}", state.todos),
        Validation::Failure(errors) => {
            println!("Batch rejected ({} problems):", errors.len());
            for error in errors.iter() {
                println!("  {error}");
            }
        }
    }
    println!("State untouched: {:?}", store.current_state().todos);

    println!("\n=== Example Complete ===");
    Ok(())
}
