use rewind::{Command, History};
use std::fmt::{self, Display, Formatter};

enum Edit {
    Insert {
        text: String,
        at: usize,
    },
    Delete {
        at: usize,
        len: usize,
        deleted: Option<String>,
    },
}

impl Command for Edit {
    type Target = String;
    type Error = &'static str;

    fn apply(&mut self, document: &mut String) -> Result<(), Self::Error> {
        match self {
            Edit::Insert { text, at } => {
                if *at > document.len() {
                    return Err("insert position out of bounds");
                }
                document.insert_str(*at, text);
                Ok(())
            }
            Edit::Delete { at, len, deleted } => {
                let end = *at + *len;
                if end > document.len() {
                    return Err("delete range out of bounds");
                }
                *deleted = Some(document[*at..end].to_string());
                document.replace_range(*at..end, "");
                Ok(())
            }
        }
    }

    fn undo(&mut self, document: &mut String) -> Result<(), Self::Error> {
        match self {
            Edit::Insert { text, at } => {
                document.replace_range(*at..*at + text.len(), "");
                Ok(())
            }
            Edit::Delete { at, deleted, .. } => {
                let text = deleted.as_ref().ok_or("nothing was deleted")?;
                document.insert_str(*at, text);
                Ok(())
            }
        }
    }
}

impl Display for Edit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Edit::Insert { text, at } => write!(f, "insert {text:?} at {at}"),
            Edit::Delete { at, len, .. } => write!(f, "delete {len} characters at {at}"),
        }
    }
}

fn main() {
    let mut document = String::new();
    let mut history = History::new();

    history
        .apply(
            &mut document,
            Edit::Insert {
                text: "Hello World".into(),
                at: 0,
            },
        )
        .unwrap();
    history
        .apply(
            &mut document,
            Edit::Insert {
                text: "!".into(),
                at: 11,
            },
        )
        .unwrap();
    assert_eq!(document, "Hello World!");

    history.set_saved(true);

    history
        .apply(
            &mut document,
            Edit::Delete {
                at: 5,
                len: 6,
                deleted: None,
            },
        )
        .unwrap();
    assert_eq!(document, "Hello!");

    history.undo(&mut document).unwrap().unwrap();
    assert_eq!(document, "Hello World!");
    assert!(history.is_saved());

    println!("{}", history.display());
}
