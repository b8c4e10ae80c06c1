use alloc::string::ToString;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Local, Utc};
#[cfg(feature = "colored")]
use colored::Colorize;
use core::fmt;

#[derive(Copy, Clone, Debug)]
pub(crate) struct Format {
    #[cfg(feature = "colored")]
    pub colored: bool,
    pub detailed: bool,
    pub head: bool,
    pub position: bool,
    pub saved: bool,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            #[cfg(feature = "colored")]
            colored: true,
            detailed: true,
            head: true,
            position: true,
            saved: true,
        }
    }
}

impl Format {
    pub fn message(self, f: &mut fmt::Formatter, entry: &impl ToString) -> fmt::Result {
        let msg = entry.to_string();
        let lines = msg.lines();
        if self.detailed {
            for line in lines {
                writeln!(f, "{}", line.trim())?;
            }
        } else if let Some(line) = lines.map(str::trim).find(|s| !s.is_empty()) {
            f.write_str(line)?;
        }
        Ok(())
    }

    pub fn position(self, f: &mut fmt::Formatter, at: usize) -> fmt::Result {
        if !self.position {
            return Ok(());
        }
        #[cfg(feature = "colored")]
        if self.colored {
            let position = alloc::format!("{at}");
            return write!(f, "{}", position.yellow().bold());
        }
        write!(f, "{at}")
    }

    pub fn labels(
        self,
        f: &mut fmt::Formatter,
        at: usize,
        head: usize,
        saved: Option<usize>,
    ) -> fmt::Result {
        match (
            self.head && at == head,
            self.saved && matches!(saved, Some(saved) if saved == at),
        ) {
            (true, true) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(
                        f,
                        " {}{}{} {}{}",
                        "(".yellow(),
                        "head".cyan().bold(),
                        ",".yellow(),
                        "saved".green().bold(),
                        ")".yellow()
                    );
                }
                f.write_str(" (head, saved)")
            }
            (true, false) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(
                        f,
                        " {}{}{}",
                        "(".yellow(),
                        "head".cyan().bold(),
                        ")".yellow()
                    );
                }
                f.write_str(" (head)")
            }
            (false, true) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(
                        f,
                        " {}{}{}",
                        "(".yellow(),
                        "saved".green().bold(),
                        ")".yellow()
                    );
                }
                f.write_str(" (saved)")
            }
            (false, false) => Ok(()),
        }
    }

    #[cfg(feature = "chrono")]
    pub fn timestamp(self, f: &mut fmt::Formatter, timestamp: &DateTime<Utc>) -> fmt::Result {
        let rfc2822 = timestamp.with_timezone(&Local).to_rfc2822();
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, " {}{}{}", "[".yellow(), rfc2822.yellow(), "]".yellow());
        }
        write!(f, " [{rfc2822}]")
    }
}
