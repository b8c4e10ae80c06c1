use crate::format::Format;
use crate::{Entry, History};
use core::fmt::{self, Write};

/// Configurable display formatting for the [`History`].
///
/// # Examples
/// ```
/// # use rewind::{Add, History};
/// let mut target = String::new();
/// let mut history = History::new();
/// history.apply(&mut target, Add('a')).unwrap();
/// history.apply(&mut target, Add('b')).unwrap();
/// println!("{}", history.display().detailed(false));
/// ```
pub struct Display<'a, C, S> {
    history: &'a History<C, S>,
    format: Format,
}

impl<C, S> Display<'_, C, S> {
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

    /// Show the head of the history in the output (on by default).
    pub fn head(&mut self, on: bool) -> &mut Self {
        self.format.head = on;
        self
    }

    /// Show the position of the command (on by default).
    pub fn position(&mut self, on: bool) -> &mut Self {
        self.format.position = on;
        self
    }

    /// Show the saved command (on by default).
    pub fn saved(&mut self, on: bool) -> &mut Self {
        self.format.saved = on;
        self
    }
}

impl<C: fmt::Display, S> Display<'_, C, S> {
    fn fmt_list(&self, f: &mut fmt::Formatter, at: usize, entry: Option<&Entry<C>>) -> fmt::Result {
        self.format.position(f, at)?;

        #[cfg(feature = "chrono")]
        if let Some(entry) = entry {
            if self.format.detailed {
                self.format.timestamp(f, &entry.timestamp)?;
            }
        }

        self.format
            .labels(f, at, self.history.head(), self.history.saved)?;

        if let Some(entry) = entry {
            if self.format.detailed {
                writeln!(f)?;
                self.format.message(f, entry)?;
            } else {
                f.write_char(' ')?;
                self.format.message(f, entry)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<'a, C, S> From<&'a History<C, S>> for Display<'a, C, S> {
    fn from(history: &'a History<C, S>) -> Self {
        Display {
            history,
            format: Format::default(),
        }
    }
}

impl<C: fmt::Display, S> fmt::Display for Display<'_, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, entry) in self.history.entries.iter().enumerate().rev() {
            self.fmt_list(f, i + 1, Some(entry))?;
        }
        self.fmt_list(f, 0, None)
    }
}
