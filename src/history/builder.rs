use crate::socket::Socket;
use crate::History;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

/// Builder for a [`History`].
///
/// # Examples
/// ```
/// # use memento::{History, Snapshot};
/// let mut history = History::builder()
///     .limit(100)
///     .capacity(100)
///     .connect(|s| { dbg!(s); })
///     .build();
/// # history.save(Snapshot::new('a'));
/// ```
#[derive(Debug)]
pub struct Builder<T, S = ()> {
    capacity: usize,
    limit: NonZeroUsize,
    socket: Socket<S>,
    pd: PhantomData<T>,
}

impl<T, S> Builder<T, S> {
    /// Returns a builder for a history.
    pub fn new() -> Builder<T, S> {
        Builder {
            capacity: 0,
            limit: NonZeroUsize::MAX,
            socket: Socket::default(),
            pd: PhantomData,
        }
    }

    /// Sets the capacity for the history.
    pub fn capacity(mut self, capacity: usize) -> Builder<T, S> {
        self.capacity = capacity;
        self
    }

    /// Sets the `limit` of the history.
    ///
    /// # Panics
    /// Panics if `limit` is `0`.
    pub fn limit(mut self, limit: usize) -> Builder<T, S> {
        self.limit = NonZeroUsize::new(limit).expect("limit can not be `0`");
        self
    }

    /// Connects the slot.
    pub fn connect(mut self, slot: S) -> Builder<T, S> {
        self.socket = Socket::new(slot);
        self
    }

    /// Builds the history.
    pub fn build(self) -> History<T, S> {
        History {
            undo: VecDeque::with_capacity(self.capacity),
            redo: Vec::new(),
            limit: self.limit,
            socket: self.socket,
        }
    }
}

impl<T, S> Default for Builder<T, S> {
    fn default() -> Self {
        Builder::new()
    }
}
