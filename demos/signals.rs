use memento::{History, Originator};
use std::sync::mpsc;

fn main() {
    let (sender, receiver) = mpsc::channel();
    let mut editor = Originator::<String>::new();
    let mut history = History::builder().limit(2).connect(sender).build();

    for content in ["a", "ab", "abc"] {
        editor.write(content);
        history.save(editor.save());
    }
    editor.restore(history.undo());
    editor.restore(history.undo());
    editor.restore(history.redo());

    for signal in receiver.try_iter() {
        println!("{signal:?}");
    }
    println!("Content: {}", editor.read());
}
