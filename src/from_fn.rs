use crate::Command;
use core::convert::Infallible;
use core::mem;

/// Command made from a function.
#[derive(Clone, Debug)]
pub struct FromFn<F, T> {
    f: F,
    target: Option<T>,
}

impl<F, T> FromFn<F, T> {
    /// Creates a new `FromFn` from `f`.
    ///
    /// # Examples
    /// ```
    /// # use rewind::{FromFn, History};
    /// let mut target = String::new();
    /// let mut history = History::new();
    ///
    /// let exclaim = FromFn::new(|s: &mut String| s.push('!'));
    /// history.apply(&mut target, exclaim).unwrap();
    /// assert_eq!(target, "!");
    ///
    /// history.undo(&mut target).unwrap().unwrap();
    /// assert_eq!(target, "");
    ///
    /// history.redo(&mut target).unwrap().unwrap();
    /// assert_eq!(target, "!");
    /// ```
    pub fn new(f: F) -> Self {
        FromFn { f, target: None }
    }
}

impl<F, T> Command for FromFn<F, T>
where
    F: FnMut(&mut T),
    T: Clone,
{
    type Target = T;
    type Error = Infallible;

    fn apply(&mut self, target: &mut T) -> Result<(), Self::Error> {
        self.target = Some(target.clone());
        (self.f)(target);
        Ok(())
    }

    fn undo(&mut self, target: &mut T) -> Result<(), Self::Error> {
        if let Some(old) = self.target.as_mut() {
            mem::swap(old, target);
        }
        Ok(())
    }

    fn redo(&mut self, target: &mut T) -> Result<(), Self::Error> {
        if let Some(new) = self.target.as_mut() {
            mem::swap(new, target);
        }
        Ok(())
    }
}

/// Command made from a fallible function.
#[derive(Clone, Debug)]
pub struct TryFromFn<F, T> {
    f: F,
    target: Option<T>,
}

impl<F, T> TryFromFn<F, T> {
    /// Creates a new `TryFromFn` from `f`.
    pub fn new(f: F) -> Self {
        TryFromFn { f, target: None }
    }
}

impl<F, T, E> Command for TryFromFn<F, T>
where
    F: FnMut(&mut T) -> Result<(), E>,
    T: Clone,
{
    type Target = T;
    type Error = E;

    fn apply(&mut self, target: &mut T) -> Result<(), E> {
        let old = target.clone();
        (self.f)(target)?;
        // Only keep the snapshot if the function succeeded.
        self.target = Some(old);
        Ok(())
    }

    fn undo(&mut self, target: &mut T) -> Result<(), E> {
        if let Some(old) = self.target.as_mut() {
            mem::swap(old, target);
        }
        Ok(())
    }

    fn redo(&mut self, target: &mut T) -> Result<(), E> {
        if let Some(new) = self.target.as_mut() {
            mem::swap(new, target);
        }
        Ok(())
    }
}
