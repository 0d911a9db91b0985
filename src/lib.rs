#![warn(missing_docs)]
//! Operational transformation for collaborative plain-text editing.
//!
//! Operational Transformation (OT) enables real-time collaborative
//! editing by letting two (or more) users change the same document at
//! the same time. Every edit is a [`TextOperation`] — a run of retain,
//! insert and delete ops — and concurrent edits are reconciled by
//! [`transform`](TextOperation::transform), which rewrites each edit so
//! that both sites converge on the same document no matter which edit
//! arrived first.
//!
//! The engine is a pure in-memory algebra: besides `transform` it
//! offers [`apply`](TextOperation::apply) to run an operation against a
//! string, [`invert`](TextOperation::invert) to undo one,
//! [`compose`](TextOperation::compose) to merge consecutive operations,
//! and the [`should_be_composed_with`](TextOperation::should_be_composed_with)
//! heuristics that undo stacks use to group keystrokes. Client/server
//! protocols, revision histories and transports are left to the caller.
//!
//! All lengths count Unicode scalar values (`char`s), in builders,
//! cached lengths and the wire form alike.
//!
//! # Usage
//!
//! ```
//! use weft::TextOperation;
//!
//! let alice = TextOperation::new().retain(5).insert(",").retain(6);
//! let bob = TextOperation::new().retain(11).insert("!");
//!
//! let (alice_prime, bob_prime) = alice.transform(&bob).unwrap();
//!
//! assert_eq!(
//!     bob_prime.apply(&alice.apply("Hello World").unwrap()).unwrap(),
//!     alice_prime.apply(&bob.apply("Hello World").unwrap()).unwrap(),
//! );
//! ```

mod compose;
mod error;
mod iter;
mod len;
mod op;
mod operation;
mod transform;
mod undo;
mod wire;

pub use error::OperationError;
pub use len::Len;
pub use op::Op;
pub use operation::TextOperation;
