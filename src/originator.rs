use crate::Snapshot;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Owner of the content that is saved to and restored from a [`History`](crate::History).
///
/// # Examples
/// ```
/// # use memento::Originator;
/// let mut editor = Originator::<String>::new();
/// editor.write("First version");
/// let first = editor.save();
/// editor.write("Second version");
/// editor.restore(Some(&first));
/// assert_eq!(editor.read(), "First version");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct Originator<T> {
    content: T,
}

impl<T: Default> Originator<T> {
    /// Returns a new originator holding the default content.
    pub fn new() -> Originator<T> {
        Originator::default()
    }
}

impl<T> Originator<T> {
    /// Replaces the content.
    pub fn write(&mut self, content: impl Into<T>) {
        self.content = content.into();
        tracing::debug!("content written");
    }

    /// Returns a reference to the content.
    pub fn read(&self) -> &T {
        &self.content
    }

    /// Consumes the originator, returning the content.
    pub fn into_inner(self) -> T {
        self.content
    }
}

impl<T: Clone> Originator<T> {
    /// Takes a snapshot of the current content.
    pub fn save(&self) -> Snapshot<T> {
        Snapshot::new(self.content.clone())
    }

    /// Sets the content to the value captured by `snapshot`.
    ///
    /// Does nothing if `snapshot` is `None`, so the result of
    /// [`History::undo`](crate::History::undo) or [`History::redo`](crate::History::redo)
    /// can be passed in directly.
    pub fn restore(&mut self, snapshot: Option<&Snapshot<T>>) {
        match snapshot {
            Some(snapshot) => {
                self.content = snapshot.get().clone();
                tracing::debug!("content restored");
            }
            None => tracing::trace!("nothing to restore"),
        }
    }
}

impl<T> From<T> for Originator<T> {
    fn from(content: T) -> Self {
        Originator { content }
    }
}
