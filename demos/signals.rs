use rewind::{Add, History, Signal};

fn main() {
    let mut target = String::new();
    let mut history = History::builder()
        .connect(|signal| match signal {
            Signal::Undo(on) => println!("undo button enabled: {on}"),
            Signal::Redo(on) => println!("redo button enabled: {on}"),
            Signal::Saved(on) => {
                println!("document: {}", if on { "saved" } else { "unsaved" })
            }
            _ => (),
        })
        .build();

    history.apply(&mut target, Add('a')).unwrap();
    history.apply(&mut target, Add('b')).unwrap();
    assert_eq!(target, "ab");

    history.undo(&mut target).unwrap().unwrap();
    history.redo(&mut target).unwrap().unwrap();

    history.set_saved(true);
    assert!(history.is_saved());
}
