#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wrapper around a command that holds the metadata the history tracks for it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Entry<C> {
    pub(crate) command: C,
    #[cfg(feature = "chrono")]
    pub(crate) timestamp: DateTime<Utc>,
}

impl<C> Entry<C> {
    /// Returns a reference to the command.
    pub fn get(&self) -> &C {
        &self.command
    }

    /// Returns the time the command was first applied.
    #[cfg(feature = "chrono")]
    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }
}

impl<C> From<C> for Entry<C> {
    fn from(command: C) -> Entry<C> {
        Entry {
            command,
            #[cfg(feature = "chrono")]
            timestamp: Utc::now(),
        }
    }
}

impl<C: Display> Display for Entry<C> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.command.fmt(f)
    }
}
