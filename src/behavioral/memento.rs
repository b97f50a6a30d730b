// Memento: the editor snapshots its own state; the history only stores
// snapshots and can't look inside them.

use crate::error::{PatternError, Result};
use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorMemento {
    content: String,
}

#[derive(Debug, Default)]
pub struct TextEditor {
    content: String,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_words(&mut self, words: &str) {
        self.content.push_str(words);
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn save(&self) -> EditorMemento {
        EditorMemento {
            content: self.content.clone(),
        }
    }

    pub fn restore(&mut self, memento: EditorMemento) {
        self.content = memento.content;
    }
}

#[derive(Debug, Default)]
pub struct History {
    mementos: Vec<EditorMemento>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, memento: EditorMemento) {
        self.mementos.push(memento);
    }

    pub fn pop(&mut self) -> Result<EditorMemento> {
        self.mementos.pop().ok_or(PatternError::EmptyHistory)
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

pub fn demo() -> Transcript {
    let mut editor = TextEditor::new();
    let mut history = History::new();

    // Empty state first, so the last restore brings the editor back to "".
    history.push(editor.save());
    editor.type_words("Hello, ");
    history.push(editor.save());
    editor.type_words("world!");

    let mut out = Transcript::new();
    out.push(editor.content());
    while let Ok(memento) = history.pop() {
        editor.restore(memento);
        out.push(editor.content());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_returns_to_snapshot() {
        let mut editor = TextEditor::new();
        editor.type_words("draft");
        let snapshot = editor.save();
        editor.type_words(" v2");

        editor.restore(snapshot);
        assert_eq!(editor.content(), "draft");
    }

    #[test]
    fn test_pop_empty_history() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert!(matches!(history.pop(), Err(PatternError::EmptyHistory)));
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(demo().lines(), ["Hello, world!", "Hello, ", ""]);
    }
}
