//! Provides snapshot based undo-redo functionality.
//!
//! It is an implementation of the memento pattern, where the state of an
//! [`Originator`] is captured in immutable [`Snapshot`]s that are kept by a
//! [`History`]. Undoing and redoing hands the snapshots back so the
//! originator can be restored to them.
//!
//! # Features
//!
//! * [`Originator`] owns the content and can save it to, and restore it from, a [`Snapshot`].
//! * [`History`] keeps an undo and a redo stack of snapshots.
//!   Saving a new snapshot clears the redo stack.
//! * The amount of snapshots kept can be limited so only the `N` most recent are stored.
//! * A [`Slot`] can be connected to get notified when the ability to undo or redo changes.
//! * Configurable display formatting, with colors when the `colored` feature is enabled.
//! * Time stamps on snapshots when the `chrono` feature is enabled.
//! * Serialization when the `serde` feature is enabled.
//!
//! # Examples
//!
//! ```
//! use memento::{History, Originator};
//!
//! let mut editor = Originator::<String>::new();
//! let mut history = History::new();
//!
//! editor.write("First version");
//! history.save(editor.save());
//! editor.write("Second version");
//! history.save(editor.save());
//! editor.write("Third version");
//!
//! editor.restore(history.undo());
//! assert_eq!(editor.read(), "First version");
//! assert!(history.undo().is_none());
//! editor.restore(history.redo());
//! editor.restore(history.redo());
//! assert_eq!(editor.read(), "Second version");
//! ```

#![doc(html_root_url = "https://docs.rs/memento")]
#![deny(missing_docs)]

mod format;
pub mod history;
mod originator;
mod snapshot;
mod socket;

pub use self::{
    history::History,
    originator::Originator,
    snapshot::Snapshot,
    socket::{Signal, Slot},
};
