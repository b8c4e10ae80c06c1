use crate::Command;
use alloc::vec::Vec;
use core::error;
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A command made from a sequence of commands.
///
/// The commands are applied in the order they were added to the chain
/// and undone in the reverse order. If one of them fails, the chain as
/// a whole fails with a [`ChainError`] that tells you which one it was.
///
/// # Examples
/// ```
/// # use rewind::{Add, Chain, History};
/// let mut target = String::new();
/// let mut history = History::new();
///
/// let chain: Chain<Add> = [Add('a'), Add('b'), Add('c')].into_iter().collect();
/// history.apply(&mut target, chain).unwrap();
/// assert_eq!(target, "abc");
///
/// history.undo(&mut target).unwrap().unwrap();
/// assert_eq!(target, "");
///
/// history.redo(&mut target).unwrap().unwrap();
/// assert_eq!(target, "abc");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug)]
pub struct Chain<C> {
    commands: Vec<C>,
    applied: usize,
    best_effort: bool,
}

impl<C> Chain<C> {
    /// Creates a chain from the commands.
    pub fn new(commands: Vec<C>) -> Chain<C> {
        Chain::from(commands)
    }

    /// Returns the number of commands in the chain.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the chain holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sets whether the chain keeps going when a command fails.
    ///
    /// By default the chain stops at the first failure and reports its
    /// position. In best effort mode the remaining commands are still
    /// attempted and the first failure is reported at the end.
    ///
    /// Only the leading run of successful commands is tracked for undo,
    /// so commands that succeed after a failure are the caller's
    /// responsibility to reverse. This is why fail fast is the default.
    pub fn set_best_effort(&mut self, on: bool) {
        self.best_effort = on;
    }
}

impl<C: Command> Chain<C> {
    fn run(
        &mut self,
        target: &mut C::Target,
        f: fn(&mut C, &mut C::Target) -> Result<(), C::Error>,
    ) -> Result<(), ChainError<C::Error>> {
        self.applied = 0;
        let mut failed = None;
        for (index, command) in self.commands.iter_mut().enumerate() {
            match f(command, target) {
                Ok(()) => {
                    if failed.is_none() {
                        self.applied = index + 1;
                    }
                }
                Err(source) => {
                    let error = ChainError { index, source };
                    if !self.best_effort {
                        return Err(error);
                    }
                    failed.get_or_insert(error);
                }
            }
        }
        match failed {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl<C: Command> Command for Chain<C> {
    type Target = C::Target;
    type Error = ChainError<C::Error>;

    fn apply(&mut self, target: &mut Self::Target) -> Result<(), Self::Error> {
        self.run(target, C::apply)
    }

    fn undo(&mut self, target: &mut Self::Target) -> Result<(), Self::Error> {
        while self.applied > 0 {
            let index = self.applied - 1;
            self.commands[index]
                .undo(target)
                .map_err(|source| ChainError { index, source })?;
            self.applied = index;
        }
        Ok(())
    }

    fn redo(&mut self, target: &mut Self::Target) -> Result<(), Self::Error> {
        self.run(target, C::redo)
    }
}

impl<C> Default for Chain<C> {
    fn default() -> Self {
        Chain::from(Vec::new())
    }
}

impl<C> From<Vec<C>> for Chain<C> {
    fn from(commands: Vec<C>) -> Self {
        Chain {
            commands,
            applied: 0,
            best_effort: false,
        }
    }
}

impl<C> FromIterator<C> for Chain<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Chain::from(iter.into_iter().collect::<Vec<C>>())
    }
}

impl<C: Display> Display for Chain<C> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut first = true;
        for command in &self.commands {
            if !first {
                f.write_str(" + ")?;
            }
            write!(f, "{command}")?;
            first = false;
        }
        Ok(())
    }
}

/// Error type of the [`Chain`] command.
///
/// Tells you which command in the chain failed and with what error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChainError<E> {
    index: usize,
    source: E,
}

impl<E> ChainError<E> {
    /// Returns the position of the command that failed within the chain.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns a reference to the error of the failed command.
    pub fn inner(&self) -> &E {
        &self.source
    }

    /// Consumes the error, returning the error of the failed command.
    pub fn into_inner(self) -> E {
        self.source
    }
}

impl<E> Display for ChainError<E> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "command {} of the chain failed", self.index)
    }
}

impl<E: error::Error + 'static> error::Error for ChainError<E> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::Chain;
    use crate::{AnyCommand, Command};
    use alloc::string::{String, ToString};

    struct Push(char);

    impl Command for Push {
        type Target = String;
        type Error = &'static str;

        fn apply(&mut self, s: &mut String) -> Result<(), Self::Error> {
            s.push(self.0);
            Ok(())
        }

        fn undo(&mut self, s: &mut String) -> Result<(), Self::Error> {
            if s.pop() == Some(self.0) {
                Ok(())
            } else {
                Err("popped char out of order")
            }
        }
    }

    struct Fail;

    impl Command for Fail {
        type Target = String;
        type Error = &'static str;

        fn apply(&mut self, _: &mut String) -> Result<(), Self::Error> {
            Err("fail")
        }

        fn undo(&mut self, _: &mut String) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn stops_at_first_failure() {
        let mut target = String::new();
        let mut chain: Chain<AnyCommand<String, &'static str>> = [
            AnyCommand::new(Push('a')),
            AnyCommand::new(Fail),
            AnyCommand::new(Push('b')),
        ]
        .into_iter()
        .collect();
        let error = chain.apply(&mut target).unwrap_err();
        assert_eq!(error.index(), 1);
        assert_eq!(error.to_string(), "command 1 of the chain failed");
        assert_eq!(target, "a");
        // The applied prefix can still be rolled back.
        chain.undo(&mut target).unwrap();
        assert_eq!(target, "");
    }

    #[test]
    fn best_effort_attempts_all() {
        let mut target = String::new();
        let mut chain: Chain<AnyCommand<String, &'static str>> = [
            AnyCommand::new(Push('a')),
            AnyCommand::new(Fail),
            AnyCommand::new(Push('c')),
        ]
        .into_iter()
        .collect();
        chain.set_best_effort(true);
        let error = chain.apply(&mut target).unwrap_err();
        assert_eq!(error.index(), 1);
        assert_eq!(*error.inner(), "fail");
        assert_eq!(target, "ac");
    }

    #[test]
    fn empty_chain_is_noop() {
        let mut target = String::new();
        let mut chain: Chain<Push> = Chain::default();
        chain.apply(&mut target).unwrap();
        chain.undo(&mut target).unwrap();
        assert_eq!(target, "");
    }
}
