use memento::{History, Originator, Signal, Snapshot};
use std::sync::mpsc;

fn undo_contents(history: &History<String>) -> Vec<&str> {
    history.snapshots().map(|s| s.get().as_str()).collect()
}

fn redo_contents(history: &History<String>) -> Vec<&str> {
    history.redo_snapshots().map(|s| s.get().as_str()).collect()
}

#[test]
fn walk_through() {
    let mut editor = Originator::<String>::new();
    let mut history = History::new();

    editor.write("First version");
    history.save(editor.save());
    assert_eq!(undo_contents(&history), ["First version"]);
    assert!(redo_contents(&history).is_empty());

    editor.write("Second version");
    history.save(editor.save());
    assert_eq!(undo_contents(&history), ["First version", "Second version"]);

    editor.write("Third version");
    assert_eq!(editor.read(), "Third version");
    assert_eq!(history.len(), 2);

    editor.restore(history.undo());
    assert_eq!(editor.read(), "First version");
    assert_eq!(undo_contents(&history), ["First version"]);
    assert_eq!(redo_contents(&history), ["Second version"]);

    let prior = history.undo();
    assert!(prior.is_none());
    editor.restore(prior);
    assert_eq!(editor.read(), "First version");
    assert!(undo_contents(&history).is_empty());
    assert_eq!(redo_contents(&history), ["First version", "Second version"]);

    editor.restore(history.redo());
    assert_eq!(editor.read(), "First version");
    assert_eq!(undo_contents(&history), ["First version"]);
    assert_eq!(redo_contents(&history), ["Second version"]);
}

#[test]
fn undo_then_redo_keeps_length() {
    let mut history = History::new();
    history.save(Snapshot::new(String::from("s1")));
    history.save(Snapshot::new(String::from("s2")));
    let len = history.len();
    history.undo();
    let redone = history.redo().map(|s| s.get().clone());
    assert_eq!(redone.as_deref(), Some("s2"));
    assert_eq!(history.len(), len);
}

#[test]
fn empty_history() {
    let mut history = History::<String>::new();
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
    assert!(history.is_empty());
    assert_eq!(history.redo_len(), 0);
}

#[test]
fn redo_without_undo() {
    let mut history = History::new();
    history.save(Snapshot::new(String::from("a")));
    assert!(history.redo().is_none());
    assert_eq!(undo_contents(&history), ["a"]);
}

#[test]
fn equal_content_is_kept_twice() {
    let mut editor = Originator::<String>::new();
    let mut history = History::new();
    editor.write("same");
    history.save(editor.save());
    history.save(editor.save());
    assert_eq!(history.len(), 2);
    assert_eq!(history.undo().map(|s| s.get().as_str()), Some("same"));
}

#[test]
fn limit() {
    let mut history: History<String> = History::builder().limit(3).build();
    let mut editor = Originator::<String>::new();
    for content in ["a", "b", "c", "d", "e"] {
        editor.write(content);
        history.save(editor.save());
    }
    assert_eq!(undo_contents(&history), ["c", "d", "e"]);
    while history.undo().is_some() {}
    assert_eq!(history.len() + history.redo_len(), 3);
}

#[test]
#[should_panic(expected = "limit can not be `0`")]
fn zero_limit() {
    let _: History<String> = History::builder().limit(0).build();
}

#[test]
fn signals() {
    let (sender, receiver) = mpsc::channel();
    let mut iter = receiver.try_iter();
    let mut history = History::builder().connect(sender).build();

    history.save(Snapshot::new(String::from("a")));
    assert_eq!(iter.next(), Some(Signal::Undo(true)));
    history.save(Snapshot::new(String::from("b")));
    assert_eq!(iter.next(), None);

    history.undo();
    assert_eq!(iter.next(), Some(Signal::Redo(true)));
    assert_eq!(iter.next(), None);

    history.undo();
    assert_eq!(iter.next(), Some(Signal::Undo(false)));
    assert_eq!(iter.next(), None);

    history.undo();
    assert_eq!(iter.next(), None);

    history.redo();
    assert_eq!(iter.next(), Some(Signal::Undo(true)));
    assert_eq!(iter.next(), None);

    history.save(Snapshot::new(String::from("c")));
    assert_eq!(iter.next(), Some(Signal::Redo(false)));
    assert_eq!(iter.next(), None);

    history.clear();
    assert_eq!(iter.next(), Some(Signal::Undo(false)));
    assert_eq!(iter.next(), None);
}

#[test]
fn connect_and_disconnect() {
    let (sender, receiver) = mpsc::channel();
    let mut history: History<String, mpsc::Sender<Signal>> = History::builder().build();
    assert!(history.connect(sender).is_none());
    assert!(history.disconnect().is_some());
    history.save(Snapshot::new(String::from("a")));
    assert!(receiver.try_recv().is_err());
}

#[test]
fn display() {
    let mut history = History::new();
    history.save(Snapshot::new("a"));
    history.save(Snapshot::new("b"));
    history.save(Snapshot::new("c"));
    history.undo();
    history.undo();

    let mut display = history.display();
    display.detailed(false);
    #[cfg(feature = "colored")]
    display.colored(false);
    assert_eq!(display.to_string(), "* 3 c\n* 2 b\n* 1 [HEAD] a\n");

    display.head(false);
    assert_eq!(display.to_string(), "* 3 c\n* 2 b\n* 1 a\n");
}

#[test]
fn display_detailed() {
    let mut history = History::new();
    history.save(Snapshot::new("a"));
    history.save(Snapshot::new("b\n  second"));
    history.undo();

    let mut display = history.display();
    display.detailed(true).head(true);
    #[cfg(feature = "colored")]
    display.colored(false);
    let output = display.to_string();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("* 2"));
    assert!(!lines[0].ends_with("[HEAD]"));
    assert_eq!(&lines[1..3], ["| b", "| second"]);
    assert!(lines[3].starts_with("* 1"));
    assert!(lines[3].ends_with(" [HEAD]"));
    assert_eq!(lines[4], "| a");

    #[cfg(not(feature = "chrono"))]
    assert_eq!(output, "* 2\n| b\n| second\n* 1 [HEAD]\n| a\n");
}

#[cfg(feature = "chrono")]
#[test]
fn timestamps() {
    let mut history = History::new();
    history.save(Snapshot::new("a"));
    history.save(Snapshot::new("b"));
    let times: Vec<_> = history.snapshots().map(|s| s.created_at()).collect();
    assert!(times[0] <= times[1]);
    assert!(times[1] <= chrono::Utc::now());

    let mut display = history.display();
    display.head(false);
    #[cfg(feature = "colored")]
    display.colored(false);
    let output = display.to_string();
    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with('*')).collect();
    assert_eq!(headers.len(), 2);
    // Each header carries the time elapsed since the snapshot was taken.
    assert!(headers[0].starts_with("* 2 "));
    assert!(headers[1].starts_with("* 1 "));
    assert!(headers.iter().all(|h| h.len() > 4));
}

#[cfg(feature = "serde")]
#[test]
fn serde() {
    let mut history = History::new();
    history.save(Snapshot::new(String::from("a")));
    history.save(Snapshot::new(String::from("b")));
    history.undo();
    let json = serde_json::to_string(&history).unwrap();
    let mut history: History<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(undo_contents(&history), ["a"]);
    assert_eq!(history.redo().map(|s| s.get().as_str()), Some("b"));
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_over_limit() {
    let mut history = History::new();
    for value in 0..5 {
        history.save(Snapshot::new(value));
    }
    let mut json = serde_json::to_value(&history).unwrap();
    json["limit"] = 2.into();
    let mut history: History<i32> = serde_json::from_value(json).unwrap();
    assert_eq!(history.len(), 5);
    assert_eq!(history.limit(), 2);

    history.save(Snapshot::new(9));
    assert_eq!(history.len(), 2);
    assert_eq!(history.snapshots().map(|s| *s.get()).collect::<Vec<_>>(), [4, 9]);
}
