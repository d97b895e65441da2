use crate::format::Format;
use crate::{History, Snapshot};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use core::fmt;

/// Configurable display formatting for the [`History`].
///
/// The snapshots are listed newest first, starting with the redo stack.
///
/// # Examples
/// ```
/// # use memento::{History, Snapshot};
/// let mut history = History::new();
/// history.save(Snapshot::new("a"));
/// history.save(Snapshot::new("b"));
/// history.undo();
///
/// let mut display = history.display();
/// display.detailed(false);
/// # #[cfg(feature = "colored")]
/// # display.colored(false);
/// assert_eq!(display.to_string(), "* 2 b\n* 1 [HEAD] a\n");
/// ```
pub struct Display<'a, T, S> {
    history: &'a History<T, S>,
    format: Format,
}

impl<T, S> Display<'_, T, S> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show detailed output (on by default).
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Show the current snapshot in the output (on by default).
    pub fn head(&mut self, on: bool) -> &mut Self {
        self.format.head = on;
        self
    }
}

impl<T: fmt::Display, S> Display<'_, T, S> {
    fn fmt_entry(
        &self,
        f: &mut fmt::Formatter,
        position: usize,
        snapshot: &Snapshot<T>,
        redo: bool,
        #[cfg(feature = "chrono")] now: DateTime<Utc>,
    ) -> fmt::Result {
        self.format.mark(f, redo)?;
        self.format.position(f, position)?;

        #[cfg(feature = "chrono")]
        if self.format.detailed {
            self.format.elapsed(f, now - snapshot.created_at())?;
        }

        self.format.head(f, !redo && position == self.history.len())?;
        if self.format.detailed {
            writeln!(f)?;
        }
        self.format.message(f, snapshot.get())
    }
}

impl<'a, T, S> From<&'a History<T, S>> for Display<'a, T, S> {
    fn from(history: &'a History<T, S>) -> Self {
        Display {
            history,
            format: Format::default(),
        }
    }
}

impl<T: fmt::Display, S> fmt::Display for Display<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[cfg(feature = "chrono")]
        let now = Utc::now();
        let len = self.history.len();
        let redo_len = self.history.redo_len();
        // The bottom of the redo stack is the newest snapshot.
        for (j, snapshot) in self.history.redo.iter().enumerate() {
            self.fmt_entry(
                f,
                len + redo_len - j,
                snapshot,
                true,
                #[cfg(feature = "chrono")]
                now,
            )?;
        }
        for (i, snapshot) in self.history.undo.iter().enumerate().rev() {
            self.fmt_entry(
                f,
                i + 1,
                snapshot,
                false,
                #[cfg(feature = "chrono")]
                now,
            )?;
        }
        Ok(())
    }
}
