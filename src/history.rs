//! A history of snapshots.

mod builder;
mod display;

pub use builder::Builder;
pub use display::Display;

use crate::socket::{Signal, Slot, Socket};
use crate::Snapshot;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// A history of snapshots that can be undone and redone.
///
/// The history keeps two stacks. The top of the undo stack is the current state,
/// undoing moves it to the redo stack and returns the snapshot below it,
/// redoing moves the top of the redo stack back and returns it.
/// Saving a new snapshot invalidates everything on the redo stack.
///
/// # Examples
/// ```
/// # use memento::{History, Originator};
/// let mut editor = Originator::<String>::new();
/// let mut history = History::new();
///
/// editor.write("First version");
/// history.save(editor.save());
/// editor.write("Second version");
/// history.save(editor.save());
/// editor.write("Third version");
///
/// editor.restore(history.undo());
/// assert_eq!(editor.read(), "First version");
///
/// // There is no state before the first snapshot, so the content is kept.
/// editor.restore(history.undo());
/// assert_eq!(editor.read(), "First version");
///
/// editor.restore(history.redo());
/// assert_eq!(editor.read(), "First version");
/// editor.restore(history.redo());
/// assert_eq!(editor.read(), "Second version");
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))
)]
#[derive(Clone, Debug)]
pub struct History<T, S = ()> {
    undo: VecDeque<Snapshot<T>>,
    redo: Vec<Snapshot<T>>,
    limit: NonZeroUsize,
    #[cfg_attr(feature = "serde", serde(skip))]
    socket: Socket<S>,
}

impl<T> History<T> {
    /// Returns a new history.
    pub fn new() -> History<T> {
        History::builder().build()
    }
}

impl<T, S> History<T, S> {
    /// Returns a new history builder.
    pub fn builder() -> Builder<T, S> {
        Builder::new()
    }

    /// Returns the number of snapshots on the undo stack.
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    /// Returns `true` if the undo stack is empty.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// Returns the number of snapshots on the redo stack.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Returns the limit of the history.
    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Sets how the signal should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Returns `true` if the history can undo.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if the history can redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Returns the snapshot on top of the undo stack.
    pub fn current(&self) -> Option<&Snapshot<T>> {
        self.undo.back()
    }

    /// Returns an iterator over the undo stack, from the oldest snapshot to the current one.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot<T>> {
        self.undo.iter()
    }

    /// Returns an iterator over the redo stack,
    /// in the order they would be returned by [`History::redo`].
    pub fn redo_snapshots(&self) -> impl Iterator<Item = &Snapshot<T>> {
        self.redo.iter().rev()
    }

    /// Returns a structure for configurable formatting of the history.
    pub fn display(&self) -> Display<T, S> {
        Display::from(self)
    }
}

impl<T, S: Slot> History<T, S> {
    /// Pushes `snapshot` on top of the undo stack and clears the redo stack.
    ///
    /// If the limit is reached the oldest snapshots are dropped.
    pub fn save(&mut self, snapshot: Snapshot<T>) {
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        self.redo.clear();
        while self.undo.len() >= self.limit.get() {
            self.undo.pop_front();
            tracing::trace!(limit = self.limit.get(), "oldest snapshot dropped");
        }
        self.undo.push_back(snapshot);
        self.socket.emit_if(!could_undo, || Signal::Undo(true));
        self.socket.emit_if(could_redo, || Signal::Redo(false));
        tracing::trace!(undo = self.undo.len(), redo = 0, "snapshot saved");
    }

    /// Moves the current snapshot to the redo stack and returns the one below it.
    ///
    /// Returns `None` if the undo stack was empty, or if the moved snapshot
    /// was the last one on it.
    pub fn undo(&mut self) -> Option<&Snapshot<T>> {
        let could_redo = self.can_redo();
        let Some(current) = self.undo.pop_back() else {
            tracing::debug!("nothing to undo");
            return None;
        };
        self.redo.push(current);
        self.socket.emit_if(self.undo.is_empty(), || Signal::Undo(false));
        self.socket.emit_if(!could_redo, || Signal::Redo(true));
        tracing::trace!(undo = self.undo.len(), redo = self.redo.len(), "undone");
        if self.undo.is_empty() {
            tracing::debug!("no earlier snapshot");
        }
        self.undo.back()
    }

    /// Moves the top of the redo stack back to the undo stack and returns it.
    ///
    /// Returns `None` if the redo stack is empty.
    pub fn redo(&mut self) -> Option<&Snapshot<T>> {
        let could_undo = self.can_undo();
        let Some(snapshot) = self.redo.pop() else {
            tracing::debug!("nothing to redo");
            return None;
        };
        self.undo.push_back(snapshot);
        self.socket.emit_if(!could_undo, || Signal::Undo(true));
        self.socket.emit_if(self.redo.is_empty(), || Signal::Redo(false));
        tracing::trace!(undo = self.undo.len(), redo = self.redo.len(), "redone");
        self.undo.back()
    }

    /// Removes all snapshots from the history.
    pub fn clear(&mut self) {
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        self.undo.clear();
        self.redo.clear();
        self.socket.emit_if(could_undo, || Signal::Undo(false));
        self.socket.emit_if(could_redo, || Signal::Redo(false));
    }
}

impl<T> Default for History<T> {
    fn default() -> History<T> {
        History::new()
    }
}
