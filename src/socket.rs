//! Notifications about what the history can do next.
//!
//! A [`History`](crate::History) emits a [`Signal`] to its connected [`Slot`]
//! whenever a save, undo, redo or clear flips whether there is anything left
//! to undo or redo. Signals are not sent when the answer stays the same, so
//! a slot can mirror the state of undo and redo buttons directly.

use core::mem;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{Sender, SyncSender};

/// The slot a history emits to, if one is connected.
#[derive(Clone, Debug)]
pub(crate) struct Socket<S>(Option<S>);

impl<S> Socket<S> {
    pub const fn new(slot: S) -> Socket<S> {
        Socket(Some(slot))
    }

    pub fn connect(&mut self, slot: Option<S>) -> Option<S> {
        mem::replace(&mut self.0, slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.0.take()
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Self {
        Socket(None)
    }
}

impl<S: Slot> Socket<S> {
    pub fn emit(&mut self, signal: impl FnOnce() -> Signal) {
        if let Some(slot) = &mut self.0 {
            slot.on_emit(signal());
        }
    }

    pub fn emit_if(&mut self, cond: bool, signal: impl FnOnce() -> Signal) {
        if cond {
            self.emit(signal);
        }
    }
}

/// Whether the history gained or lost the ability to undo or redo.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
#[non_exhaustive]
pub enum Signal {
    /// `true` once there is a snapshot to step back to, `false` once there is none.
    Undo(bool),
    /// `true` once an undone snapshot can be brought back, `false` once none can.
    Redo(bool),
}

/// Receiver of the signals a [`History`](crate::History) emits.
///
/// Implemented for closures and `mpsc` senders, and for `()` which ignores them.
///
/// # Examples
/// ```
/// # use std::sync::mpsc;
/// # use memento::{History, Originator, Signal};
/// let (sender, receiver) = mpsc::channel();
/// let mut iter = receiver.try_iter();
///
/// let mut editor = Originator::<String>::new();
/// let mut history = History::builder().connect(sender).build();
///
/// editor.write("a");
/// history.save(editor.save());
/// assert_eq!(iter.next(), Some(Signal::Undo(true)));
/// assert_eq!(iter.next(), None);
///
/// history.undo();
/// assert_eq!(iter.next(), Some(Signal::Undo(false)));
/// assert_eq!(iter.next(), Some(Signal::Redo(true)));
/// assert_eq!(iter.next(), None);
/// ```
pub trait Slot {
    /// Called once for every signal, in the order they are emitted.
    fn on_emit(&mut self, signal: Signal);
}

impl Slot for () {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}

impl Slot for SyncSender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}
