use crate::Command;
use alloc::string::String;
use core::convert::Infallible;
use core::fmt::{self, Display, Formatter};

/// This is the command used in all the examples.
///
/// Not part of the API and can change at any time.
#[doc(hidden)]
pub struct Add(pub char);

impl Command for Add {
    type Target = String;
    type Error = Infallible;

    fn apply(&mut self, string: &mut String) -> Result<(), Self::Error> {
        string.push(self.0);
        Ok(())
    }

    fn undo(&mut self, string: &mut String) -> Result<(), Self::Error> {
        self.0 = string.pop().unwrap();
        Ok(())
    }
}

impl Display for Add {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Add '{}'", self.0)
    }
}

