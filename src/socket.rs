//! Module used to communicate changes in the history.

use core::fmt::{self, Formatter};
use core::mem;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "std")]
use std::sync::mpsc::{Sender, SyncSender};

/// Slot wrapper that adds some additional functionality.
#[derive(Clone)]
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

impl<S> fmt::Debug for Socket<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad("Socket")
    }
}

impl<S: Slot> Socket<S> {
    pub fn emit(&mut self, signal: Signal) {
        if let Some(slot) = &mut self.0 {
            slot.on_emit(signal);
        }
    }

    pub fn emit_if(&mut self, cond: bool, signal: Signal) {
        if cond {
            self.emit(signal);
        }
    }
}

/// The `Signal` describes the state change done to the history.
///
/// See [`Slot`] for more information.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Signal {
    /// Emitted when the ability to undo has changed.
    Undo(bool),
    /// Emitted when the ability to redo has changed.
    Redo(bool),
    /// Emitted when the saved state has changed.
    Saved(bool),
}

/// Use this to handle signals emitted.
///
/// This allows you to trigger events on certain state changes, which is
/// usually used to keep undo-redo controls in sync with the history.
///
/// # Examples
/// ```
/// use rewind::{Add, History, Signal};
/// use std::sync::mpsc;
///
/// let (sender, receiver) = mpsc::channel();
/// let mut iter = receiver.try_iter();
///
/// let mut target = String::new();
/// let mut history = History::builder().connect(sender).build();
///
/// history.apply(&mut target, Add('a')).unwrap();
/// assert_eq!(iter.next(), Some(Signal::Undo(true)));
/// assert_eq!(iter.next(), Some(Signal::Saved(false)));
/// assert_eq!(iter.next(), None);
///
/// history.undo(&mut target).unwrap().unwrap();
/// assert_eq!(iter.next(), Some(Signal::Redo(true)));
/// assert_eq!(iter.next(), Some(Signal::Undo(false)));
/// assert_eq!(iter.next(), Some(Signal::Saved(true)));
/// assert_eq!(iter.next(), None);
/// ```
pub trait Slot {
    /// Receives a signal that describes the state change done to the history.
    fn on_emit(&mut self, signal: Signal);
}

/// The default slot that does nothing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Nop;

impl Slot for Nop {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

#[cfg(feature = "std")]
impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}

#[cfg(feature = "std")]
impl Slot for SyncSender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}
