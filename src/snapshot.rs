#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable capture of the content of an [`Originator`](crate::Originator).
///
/// Snapshots are only compared through the value they hold,
/// two snapshots taken of the same content are still distinct.
///
/// # Examples
/// ```
/// # use memento::Snapshot;
/// let snapshot = Snapshot::new("First version");
/// assert_eq!(*snapshot.get(), "First version");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Snapshot<T> {
    value: T,
    #[cfg(feature = "chrono")]
    created_at: DateTime<Utc>,
}

impl<T> Snapshot<T> {
    /// Captures `value`.
    pub fn new(value: T) -> Snapshot<T> {
        Snapshot {
            value,
            #[cfg(feature = "chrono")]
            created_at: Utc::now(),
        }
    }

    /// Returns a reference to the captured value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consumes the snapshot, returning the captured value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns the time the snapshot was taken.
    #[cfg(feature = "chrono")]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl<T> From<T> for Snapshot<T> {
    fn from(value: T) -> Self {
        Snapshot::new(value)
    }
}
