use memento::{History, Originator};

fn main() {
    let mut editor = Originator::<String>::new();
    let mut history = History::new();

    for content in ["Lorem ipsum", "Lorem ipsum dolor", "Lorem ipsum dolor sit amet"] {
        editor.write(content);
        history.save(editor.save());
    }
    editor.restore(history.undo());

    println!("{}", history.display());
}
