use memento::{History, Originator};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut editor = Originator::<String>::new();
    let mut history = History::new();

    editor.write("First version");
    println!("Text set to: {}", editor.read());
    history.save(editor.save());

    editor.write("Second version");
    println!("Text set to: {}", editor.read());
    history.save(editor.save());

    editor.write("Third version");
    println!("Text set to: {}", editor.read());

    for _ in 0..2 {
        match history.undo() {
            Some(snapshot) => {
                editor.restore(Some(snapshot));
                println!("Text restored to: {}", editor.read());
            }
            None => println!("Nothing earlier to restore"),
        }
    }

    if let Some(snapshot) = history.redo() {
        editor.restore(Some(snapshot));
        println!("Text restored to: {}", editor.read());
    }
}
