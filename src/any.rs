use crate::Command;
use alloc::boxed::Box;
use core::fmt::{self, Debug, Formatter};

/// Any command type.
///
/// This allows you to use multiple different commands in the same history
/// as long as they all share the same target and error type.
pub struct AnyCommand<T, E> {
    command: Box<dyn Command<Target = T, Error = E>>,
}

impl<T, E> AnyCommand<T, E> {
    /// Creates an `AnyCommand` from the provided command.
    ///
    /// # Examples
    /// ```
    /// # use rewind::{Add, AnyCommand, History};
    /// let mut target = String::new();
    /// let mut history = History::new();
    ///
    /// history.apply(&mut target, AnyCommand::new(Add('a'))).unwrap();
    /// assert_eq!(target, "a");
    /// ```
    pub fn new<C>(command: C) -> AnyCommand<T, E>
    where
        C: Command<Target = T, Error = E>,
        C: 'static,
    {
        AnyCommand {
            command: Box::new(command),
        }
    }
}

impl<T, E> Command for AnyCommand<T, E> {
    type Target = T;
    type Error = E;

    fn apply(&mut self, target: &mut T) -> Result<(), E> {
        self.command.apply(target)
    }

    fn undo(&mut self, target: &mut T) -> Result<(), E> {
        self.command.undo(target)
    }

    fn redo(&mut self, target: &mut T) -> Result<(), E> {
        self.command.redo(target)
    }
}

impl<T, E> Debug for AnyCommand<T, E> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("AnyCommand").finish_non_exhaustive()
    }
}
