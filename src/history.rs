//! A linear history of commands.

mod builder;
mod display;

pub use builder::Builder;
pub use display::Display;

use crate::socket::{Nop, Signal, Slot, Socket};
use crate::{Command, Entry, Error, Merged};
use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use core::fmt::{self, Debug, Formatter};
use core::num::NonZeroUsize;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A linear history of commands.
///
/// The history can roll the targets state backwards and forwards by using
/// the undo and redo methods. In addition, the history can notify the user
/// about changes to the stack or the target through [`Signal`].
/// The user can give the history a function that is called each time the state
/// changes by using the [`builder`](History::builder).
///
/// When a command is applied while there are commands that can be redone,
/// those commands are discarded, keeping the history linear.
///
/// # Examples
/// ```
/// # use rewind::{Add, History};
/// let mut target = String::new();
/// let mut history = History::new();
///
/// history.apply(&mut target, Add('a')).unwrap();
/// history.apply(&mut target, Add('b')).unwrap();
/// history.apply(&mut target, Add('c')).unwrap();
/// assert_eq!(target, "abc");
///
/// history.undo(&mut target).unwrap().unwrap();
/// history.undo(&mut target).unwrap().unwrap();
/// assert_eq!(target, "a");
///
/// history.redo(&mut target).unwrap().unwrap();
/// assert_eq!(target, "ab");
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(serialize = "C: Serialize", deserialize = "C: Deserialize<'de>"))
)]
#[derive(Clone)]
pub struct History<C, S = Nop> {
    entries: VecDeque<Entry<C>>,
    limit: NonZeroUsize,
    index: usize,
    saved: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default, skip))]
    socket: Socket<S>,
}

impl<C> History<C> {
    /// Returns a new history.
    pub fn new() -> History<C> {
        History::builder().build()
    }
}

impl<C, S> History<C, S> {
    /// Returns a new history builder.
    pub fn builder() -> Builder<C, S> {
        Builder::new()
    }

    /// Reserves capacity for at least `additional` more commands.
    ///
    /// # Panics
    /// Panics if the new capacity overflows usize.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Returns the capacity of the history.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Shrinks the capacity of the history as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    /// Returns the number of commands in the history.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
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
        self.index > 0
    }

    /// Returns `true` if the history can redo.
    pub fn can_redo(&self) -> bool {
        self.index < self.len()
    }

    /// Returns `true` if the target is in a saved state, `false` otherwise.
    pub fn is_saved(&self) -> bool {
        self.saved.map_or(false, |saved| saved == self.index)
    }

    /// Returns the position of the head of the history.
    ///
    /// This is the number of commands that are currently applied to the target.
    pub fn head(&self) -> usize {
        self.index
    }

    /// Returns an iterator over the entries of the history.
    ///
    /// The oldest entry comes first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<C>> {
        self.entries.iter()
    }

    /// Returns a structure for configurable formatting of the history.
    pub fn display(&self) -> Display<C, S> {
        Display::from(self)
    }
}

impl<C: Command, S: Slot> History<C, S> {
    /// Pushes the command on top of the history and executes its
    /// [`apply`](Command::apply) method.
    ///
    /// Commands that can be redone are discarded, unless the new command
    /// [merges](Command::merge) with or annuls the previous one.
    ///
    /// # Errors
    /// If the command fails it is handed back to the caller together with the
    /// error, and the history is left exactly as it was.
    pub fn apply(&mut self, target: &mut C::Target, mut command: C) -> Result<(), Error<C>> {
        if let Err(error) = command.apply(target) {
            return Err(Error::new(command, error));
        }
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        let was_saved = self.is_saved();
        // Pop off all elements after the head.
        self.entries.truncate(self.index);
        // Check if the saved state was popped off.
        self.saved = self.saved.filter(|&saved| saved <= self.index);
        // Try to merge commands unless the target is in a saved state.
        let merged = match self.entries.back_mut() {
            Some(last) if !was_saved => last.command.merge(command),
            _ => Merged::No(command),
        };
        match merged {
            Merged::Yes => {}
            Merged::Annul => {
                self.entries.pop_back();
                self.index -= 1;
            }
            // If the command is not merged or annulled push it onto the history.
            Merged::No(command) => {
                // If limit is reached, pop off the first command.
                if self.limit() == self.index {
                    self.entries.pop_front();
                    self.saved = self.saved.and_then(|saved| saved.checked_sub(1));
                } else {
                    self.index += 1;
                }
                self.entries.push_back(Entry::from(command));
            }
        }
        let can_undo = self.can_undo();
        let is_saved = self.is_saved();
        self.socket.emit_if(could_redo, Signal::Redo(false));
        self.socket
            .emit_if(could_undo != can_undo, Signal::Undo(can_undo));
        self.socket
            .emit_if(was_saved != is_saved, Signal::Saved(is_saved));
        Ok(())
    }

    /// Calls the [`undo`](Command::undo) method for the active command and sets
    /// the previous one as the new active one.
    ///
    /// Returns `None` if there is nothing to undo.
    ///
    /// # Errors
    /// If the command fails the error is returned and the head stays where it was.
    pub fn undo(&mut self, target: &mut C::Target) -> Option<Result<(), C::Error>> {
        self.can_undo().then(|| {
            let was_saved = self.is_saved();
            let old = self.index;
            self.entries[self.index - 1].command.undo(target)?;
            self.index -= 1;
            let is_saved = self.is_saved();
            self.socket.emit_if(old == self.len(), Signal::Redo(true));
            self.socket.emit_if(old == 1, Signal::Undo(false));
            self.socket
                .emit_if(was_saved != is_saved, Signal::Saved(is_saved));
            Ok(())
        })
    }

    /// Calls the [`redo`](Command::redo) method for the next command and sets
    /// it as the new active one.
    ///
    /// Returns `None` if there is nothing to redo.
    ///
    /// # Errors
    /// If the command fails the error is returned and the head stays where it was.
    pub fn redo(&mut self, target: &mut C::Target) -> Option<Result<(), C::Error>> {
        self.can_redo().then(|| {
            let was_saved = self.is_saved();
            let old = self.index;
            self.entries[self.index].command.redo(target)?;
            self.index += 1;
            let is_saved = self.is_saved();
            self.socket
                .emit_if(old == self.len() - 1, Signal::Redo(false));
            self.socket.emit_if(old == 0, Signal::Undo(true));
            self.socket
                .emit_if(was_saved != is_saved, Signal::Saved(is_saved));
            Ok(())
        })
    }

    /// Marks the target as currently being in a saved or unsaved state.
    pub fn set_saved(&mut self, saved: bool) {
        let was_saved = self.is_saved();
        if saved {
            self.saved = Some(self.index);
            self.socket.emit_if(!was_saved, Signal::Saved(true));
        } else {
            self.saved = None;
            self.socket.emit_if(was_saved, Signal::Saved(false));
        }
    }

    /// Removes all commands from the history without undoing them.
    pub fn clear(&mut self) {
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        self.entries.clear();
        self.saved = self.is_saved().then_some(0);
        self.index = 0;
        self.socket.emit_if(could_redo, Signal::Redo(false));
        self.socket.emit_if(could_undo, Signal::Undo(false));
    }

    /// Repeatedly calls [`undo`](Command::undo) or [`redo`](Command::redo)
    /// until the command at `index` is reached.
    ///
    /// Returns `None` if `index` is outside of the history.
    ///
    /// # Errors
    /// If a command fails the error is returned and the head stays at the
    /// command that could not be passed.
    pub fn go_to(&mut self, target: &mut C::Target, index: usize) -> Option<Result<(), C::Error>> {
        if index > self.len() {
            return None;
        }
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        let was_saved = self.is_saved();
        // Temporarily remove the slot so it is not called for every step.
        let slot = self.socket.disconnect();
        // Decide if we need to undo or redo to reach index.
        let f = if index > self.index {
            History::redo
        } else {
            History::undo
        };
        while self.index != index {
            if let Some(Err(error)) = f(self, target) {
                self.socket.connect(slot);
                return Some(Err(error));
            }
        }
        self.socket.connect(slot);
        let can_undo = self.can_undo();
        let can_redo = self.can_redo();
        let is_saved = self.is_saved();
        self.socket
            .emit_if(could_redo != can_redo, Signal::Redo(can_redo));
        self.socket
            .emit_if(could_undo != can_undo, Signal::Undo(can_undo));
        self.socket
            .emit_if(was_saved != is_saved, Signal::Saved(is_saved));
        Some(Ok(()))
    }

    /// Revert the changes done to the target since the saved state.
    ///
    /// Returns `None` if the saved state is not in the history.
    pub fn revert(&mut self, target: &mut C::Target) -> Option<Result<(), C::Error>> {
        self.saved.and_then(|saved| self.go_to(target, saved))
    }

    /// Go back or forward in the history to the command that was made closest
    /// to the datetime provided.
    ///
    /// Returns `None` if the history is empty.
    #[cfg(feature = "chrono")]
    pub fn time_travel(
        &mut self,
        target: &mut C::Target,
        to: &DateTime<Utc>,
    ) -> Option<Result<(), C::Error>> {
        if self.entries.is_empty() {
            return None;
        }
        // Entries are ordered by the time they were first applied.
        let index = match self
            .entries
            .binary_search_by(|entry| entry.timestamp.cmp(to))
        {
            Ok(index) => index + 1,
            Err(index) => index,
        };
        self.go_to(target, index)
    }
}

impl<C: ToString, S> History<C, S> {
    /// Returns the string of the command which will be undone
    /// in the next call to [`undo`](History::undo).
    pub fn undo_text(&self) -> Option<String> {
        self.index.checked_sub(1).and_then(|i| self.text(i))
    }

    /// Returns the string of the command which will be redone
    /// in the next call to [`redo`](History::redo).
    pub fn redo_text(&self) -> Option<String> {
        self.text(self.index)
    }

    fn text(&self, i: usize) -> Option<String> {
        self.entries.get(i).map(|entry| entry.command.to_string())
    }
}

impl<C> Default for History<C> {
    fn default() -> History<C> {
        History::new()
    }
}

impl<C: Debug, S> Debug for History<C, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("History")
            .field("entries", &self.entries)
            .field("limit", &self.limit)
            .field("index", &self.index)
            .field("saved", &self.saved)
            .field("socket", &self.socket)
            .finish()
    }
}
