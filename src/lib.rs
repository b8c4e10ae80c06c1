//! Provides undo-redo command history with manual merging and macro commands.
//!
//! It is an implementation of the command pattern, where all modifications are done
//! by creating objects of commands that applies the modifications. All commands knows
//! how to undo the changes it applies, and by using the provided [`History`] it is
//! easy to apply, undo, and redo changes made to a target.
//!
//! # Features
//!
//! * [`Command`] provides the base functionality for all commands.
//! * [`History`] provides linear undo-redo functionality, together with
//!   [`can_undo`](History::can_undo) and [`can_redo`](History::can_redo) queries
//!   and [signals](socket::Signal) for keeping undo-redo controls up to date.
//! * [`Chain`] runs an ordered list of commands as a single command,
//!   undoing them in reverse order.
//! * Commands can be merged after being applied by implementing the
//!   [`merge`](Command::merge) method on the command. This allows smaller changes
//!   made gradually to be merged into larger operations that can be undone and
//!   redone in a single step.
//! * The target can be marked as being saved to disk and the history will track
//!   the saved state and notify when it changes.
//! * The amount of changes being tracked can be configured by the user so only
//!   the `N` most recent changes are stored.
//! * Configurable display formatting through [`History::display`].
//! * Time stamps and time travel is provided when the `chrono` feature is enabled.
//! * Serialization and deserialization is provided when the `serde` feature is enabled.
//!
//! # Examples
//!
//! Add this to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rewind = "0.3"
//! ```
//!
//! And this to `main.rs`:
//!
//! ```
//! use rewind::{Command, History};
//!
//! struct Add(char);
//!
//! impl Command for Add {
//!     type Target = String;
//!     type Error = &'static str;
//!
//!     fn apply(&mut self, s: &mut String) -> Result<(), Self::Error> {
//!         s.push(self.0);
//!         Ok(())
//!     }
//!
//!     fn undo(&mut self, s: &mut String) -> Result<(), Self::Error> {
//!         s.pop().ok_or("`s` is empty")?;
//!         Ok(())
//!     }
//! }
//!
//! fn main() {
//!     let mut target = String::new();
//!     let mut history = History::new();
//!
//!     history.apply(&mut target, Add('a')).unwrap();
//!     history.apply(&mut target, Add('b')).unwrap();
//!     history.apply(&mut target, Add('c')).unwrap();
//!     assert_eq!(target, "abc");
//!
//!     history.undo(&mut target).unwrap().unwrap();
//!     history.undo(&mut target).unwrap().unwrap();
//!     history.undo(&mut target).unwrap().unwrap();
//!     assert_eq!(target, "");
//!
//!     history.redo(&mut target).unwrap().unwrap();
//!     history.redo(&mut target).unwrap().unwrap();
//!     history.redo(&mut target).unwrap().unwrap();
//!     assert_eq!(target, "abc");
//! }
//! ```

#![no_std]
#![doc(html_root_url = "https://docs.rs/rewind")]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod add;
mod any;
mod chain;
mod entry;
mod format;
mod from_fn;
pub mod history;
pub mod socket;

use alloc::boxed::Box;
use core::error;
use core::fmt::{self, Formatter};

pub use self::add::Add;
pub use self::any::AnyCommand;
pub use self::chain::{Chain, ChainError};
pub use self::entry::Entry;
pub use self::from_fn::{FromFn, TryFromFn};
pub use self::history::History;
pub use self::socket::{Nop, Signal, Slot};

/// Base functionality for all commands.
pub trait Command {
    /// The type of the target the command applies to.
    type Target;
    /// The error type returned when applying or undoing the command fails.
    type Error;

    /// Applies the command on the target.
    ///
    /// The command must capture whatever it needs to restore the target later,
    /// such as the previous value it overwrites.
    fn apply(&mut self, target: &mut Self::Target) -> Result<(), Self::Error>;

    /// Restores the state of the target as it was before the command was applied.
    fn undo(&mut self, target: &mut Self::Target) -> Result<(), Self::Error>;

    /// Reapplies the command on the target.
    ///
    /// The default implementation uses the [`apply`](Command::apply) implementation.
    fn redo(&mut self, target: &mut Self::Target) -> Result<(), Self::Error> {
        self.apply(target)
    }

    /// Used for manual merging of commands after they are applied.
    ///
    /// Returning [`Merged::Yes`] means `self` has absorbed `other`, so the two
    /// changes are undone and redone as a single step. [`Merged::Annul`] means
    /// the commands cancel each other out and both are removed from the history.
    /// The default implementation hands `other` back unchanged, keeping one
    /// entry per command.
    ///
    /// # Examples
    /// ```
    /// # use rewind::{Command, History, Merged};
    /// struct Text(String);
    ///
    /// impl Command for Text {
    ///     type Target = String;
    ///     type Error = &'static str;
    ///
    ///     fn apply(&mut self, s: &mut String) -> Result<(), Self::Error> {
    ///         s.push_str(&self.0);
    ///         Ok(())
    ///     }
    ///
    ///     fn undo(&mut self, s: &mut String) -> Result<(), Self::Error> {
    ///         let len = s.len() - self.0.len();
    ///         s.truncate(len);
    ///         Ok(())
    ///     }
    ///
    ///     fn merge(&mut self, other: Self) -> Merged<Self> {
    ///         self.0.push_str(&other.0);
    ///         Merged::Yes
    ///     }
    /// }
    ///
    /// let mut target = String::new();
    /// let mut history = History::new();
    ///
    /// history.apply(&mut target, Text("a".into())).unwrap();
    /// history.apply(&mut target, Text("b".into())).unwrap();
    /// assert_eq!(history.len(), 1);
    /// assert_eq!(target, "ab");
    ///
    /// history.undo(&mut target).unwrap().unwrap();
    /// assert_eq!(target, "");
    /// ```
    fn merge(&mut self, other: Self) -> Merged<Self>
    where
        Self: Sized,
    {
        Merged::No(other)
    }
}

impl<C: Command + ?Sized> Command for Box<C> {
    type Target = C::Target;
    type Error = C::Error;

    fn apply(&mut self, target: &mut Self::Target) -> Result<(), Self::Error> {
        (**self).apply(target)
    }

    fn undo(&mut self, target: &mut Self::Target) -> Result<(), Self::Error> {
        (**self).undo(target)
    }

    fn redo(&mut self, target: &mut Self::Target) -> Result<(), Self::Error> {
        (**self).redo(target)
    }
}

/// Says if the command have been merged with another command.
pub enum Merged<C> {
    /// The commands have been merged.
    Yes,
    /// The commands cancel each other out, and the previous command
    /// is removed from the history as well.
    Annul,
    /// The commands have not been merged.
    No(C),
}

/// Returned by [`History::apply`] when applying the command failed.
///
/// The failed command is handed back to the caller together with the reason,
/// since the history never stores commands that could not be applied. For a
/// [`Chain`] this is what makes manual correction possible: the returned chain
/// still knows which children ran and can undo them.
pub struct Error<C: Command> {
    command: C,
    error: C::Error,
}

impl<C: Command> Error<C> {
    pub(crate) fn new(command: C, error: C::Error) -> Error<C> {
        Error { command, error }
    }

    /// Returns a reference to the command that failed.
    pub fn command(&self) -> &C {
        &self.command
    }

    /// Returns a reference to the error returned by the command.
    pub fn error(&self) -> &C::Error {
        &self.error
    }

    /// Consumes the error, returning the failed command and its error.
    pub fn into_parts(self) -> (C, C::Error) {
        (self.command, self.error)
    }
}

impl<C: Command> fmt::Debug for Error<C>
where
    C::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Error")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<C: Command> fmt::Display for Error<C>
where
    C::Error: fmt::Display,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl<C: Command> error::Error for Error<C>
where
    C::Error: error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error)
    }
}
