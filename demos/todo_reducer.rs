//! Todo Reducer
//!
//! This example applies actions to a todo list through a pure reducer.
//!
//! Key concepts:
//! - Actions are tagged records declared with `action_enum!`
//! - The reducer is exhaustive over the closed set of kinds
//! - Removing at an index past the end is rejected and the state is kept
//!
//! Run with: cargo run --example todo_reducer

use actionlog::core::{Action, Reducer};
use actionlog::todo::{todo_reducer, TodoAction, TodoReducer};

fn main() {
    println!("=== Todo Reducer Example ===\n");

    let actions = [
        TodoAction::Add("buy milk".to_string()),
        TodoAction::Add("walk dog".to_string()),
        TodoAction::Add("file taxes".to_string()),
        TodoAction::RemoveOne(1),
        TodoAction::RemoveOne(7),
    ];

    // Start from no state at all; the reducer falls back to the default.
    let mut state = match todo_reducer(None, &actions[0]) {
        Ok(state) => state,
        Err(error) => {
            println!("First action rejected: {error}");
            return;
        }
    };
    println!("{:<12} -> {:?}", actions[0].kind(), state.todos);

    for action in &actions[1..] {
        match TodoReducer.reduce(&state, action) {
            Ok(next) => {
                state = next;
                println!("{:<12} -> {:?}", action.kind(), state.todos);
            }
            Err(error) => println!("{:<12} -> rejected: {error}", action.kind()),
        }
    }

    let cleared = TodoReducer.reduce(&state, &TodoAction::RemoveAll);
    println!("\nAfter 'Remove All': {:?}", cleared.map(|s| s.todos));

    println!("\nDeclared kinds: {:?}", TodoAction::kinds());
    println!("\n=== Example Complete ===");
}
