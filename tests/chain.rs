use rewind::{Add, AnyCommand, Chain, Command, History};

// Appends on undo instead of reverting, so the order of the
// child calls shows up in the target.
struct Trace(char);

impl Command for Trace {
    type Target = String;
    type Error = &'static str;

    fn apply(&mut self, s: &mut String) -> Result<(), Self::Error> {
        s.push(self.0.to_ascii_uppercase());
        Ok(())
    }

    fn undo(&mut self, s: &mut String) -> Result<(), Self::Error> {
        s.push(self.0.to_ascii_lowercase());
        Ok(())
    }
}

struct Push(char);

impl Command for Push {
    type Target = String;
    type Error = &'static str;

    fn apply(&mut self, s: &mut String) -> Result<(), Self::Error> {
        s.push(self.0);
        Ok(())
    }

    fn undo(&mut self, s: &mut String) -> Result<(), Self::Error> {
        s.pop().ok_or("nothing to pop")?;
        Ok(())
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
        Err("fail")
    }
}

#[test]
fn undo_reverses_child_order() {
    let mut target = String::new();
    let mut history = History::new();

    let chain: Chain<Trace> = "abc".chars().map(Trace).collect();
    history.apply(&mut target, chain).unwrap();
    assert_eq!(target, "ABC");

    history.undo(&mut target).unwrap().unwrap();
    assert_eq!(target, "ABCcba");
}

#[test]
fn chain_is_one_entry() {
    let mut target = String::new();
    let mut history = History::new();

    let chain: Chain<Add> = "abc".chars().map(Add).collect();
    assert_eq!(chain.to_string(), "Add 'a' + Add 'b' + Add 'c'");

    history.apply(&mut target, chain).unwrap();
    assert_eq!(target, "abc");
    assert_eq!(history.len(), 1);

    history.undo(&mut target).unwrap().unwrap();
    assert_eq!(target, "");
    assert_eq!(history.head(), 0);

    history.redo(&mut target).unwrap().unwrap();
    assert_eq!(target, "abc");
    assert_eq!(history.head(), 1);
}

#[test]
fn failed_child_hands_chain_back() {
    let mut target = String::new();
    let mut history = History::new();

    let chain = Chain::from(vec![
        AnyCommand::new(Push('a')),
        AnyCommand::new(Push('b')),
        AnyCommand::new(Fail),
    ]);

    let error = history.apply(&mut target, chain).unwrap_err();
    assert_eq!(error.error().index(), 2);
    assert_eq!(*error.error().inner(), "fail");

    // The history is untouched, but the applied prefix is still
    // in the target until the chain is asked to undo it.
    assert!(history.is_empty());
    assert_eq!(target, "ab");

    let (mut chain, _) = error.into_parts();
    chain.undo(&mut target).unwrap();
    assert_eq!(target, "");
}

#[test]
fn nested_chains() {
    let mut target = String::new();
    let mut history = History::new();

    let ab: Chain<Add> = "ab".chars().map(Add).collect();
    let cd: Chain<Add> = "cd".chars().map(Add).collect();
    let outer = Chain::from(vec![ab, cd]);

    history.apply(&mut target, outer).unwrap();
    assert_eq!(target, "abcd");
    assert_eq!(history.len(), 1);

    history.undo(&mut target).unwrap().unwrap();
    assert_eq!(target, "");
}
