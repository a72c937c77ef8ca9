//! Integrity checks that accumulate every problem instead of failing fast.
//!
//! Both checks here use Stillwater's `Validation`, so a single pass reports
//! all broken links in a history, or all rejected actions in a batch.
//!
//! # Example
//!
//! ```rust
//! use actionlog::history::History;
//! use actionlog::integrity::verify;
//! use actionlog::todo::TodoAction;
//!
//! let mut history = History::new();
//! let root = history.append(None, TodoAction::Add("a".into())).unwrap();
//! history.append(Some(root), TodoAction::RemoveAll).unwrap();
//!
//! assert!(verify(&history).is_success());
//! ```

pub mod preflight;
pub mod rules;
pub mod violations;

pub use preflight::preflight;
pub use rules::verify;
pub use violations::{LinkViolation, PreflightError};
