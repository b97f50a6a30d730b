// Command: edits are objects. The manager keeps them in a history so they
// can be undone and redone against the shared editor.

use std::cell::RefCell;
use std::rc::Rc;

use crate::transcript::Transcript;

#[derive(Debug, Default)]
pub struct TextEditor {
    content: String,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn type_text(&mut self, text: &str) -> String {
        self.content.push_str(text);
        self.status()
    }

    /// Removes the last `count` characters.
    pub fn delete(&mut self, count: usize) -> String {
        let keep = self.content.chars().count().saturating_sub(count);
        let cut = self
            .content
            .char_indices()
            .nth(keep)
            .map_or(self.content.len(), |(i, _)| i);
        self.content.truncate(cut);
        self.status()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    fn status(&self) -> String {
        format!("Text Editor Content: \"{}\"", self.content)
    }
}

pub trait Command {
    fn execute(&mut self) -> String;
    fn undo(&mut self) -> String;
}

pub struct TypeCommand {
    editor: Rc<RefCell<TextEditor>>,
    text: String,
}

impl TypeCommand {
    pub fn new(editor: &Rc<RefCell<TextEditor>>, text: impl Into<String>) -> Self {
        Self {
            editor: Rc::clone(editor),
            text: text.into(),
        }
    }
}

impl Command for TypeCommand {
    fn execute(&mut self) -> String {
        self.editor.borrow_mut().type_text(&self.text)
    }

    fn undo(&mut self) -> String {
        self.editor.borrow_mut().delete(self.text.chars().count())
    }
}

pub struct DeleteCommand {
    editor: Rc<RefCell<TextEditor>>,
    count: usize,
    deleted: String,
}

impl DeleteCommand {
    pub fn new(editor: &Rc<RefCell<TextEditor>>, count: usize) -> Self {
        Self {
            editor: Rc::clone(editor),
            count,
            deleted: String::new(),
        }
    }
}

impl Command for DeleteCommand {
    fn execute(&mut self) -> String {
        let mut editor = self.editor.borrow_mut();
        let content = editor.content();
        let skip = content.chars().count().saturating_sub(self.count);
        self.deleted = content.chars().skip(skip).collect();
        editor.delete(self.count)
    }

    fn undo(&mut self) -> String {
        self.editor.borrow_mut().type_text(&self.deleted)
    }
}

/// Invoker. Commands past `current` are undone ones, available to `redo`
/// until a new command is executed.
#[derive(Default)]
pub struct CommandManager {
    history: Vec<Box<dyn Command>>,
    current: usize,
}

impl CommandManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute_command(&mut self, mut command: Box<dyn Command>) -> String {
        let line = command.execute();
        self.history.truncate(self.current);
        self.history.push(command);
        self.current += 1;
        line
    }

    /// `None` when there is nothing to undo.
    pub fn undo_command(&mut self) -> Option<String> {
        if self.current == 0 {
            tracing::debug!("undo with empty history ignored");
            return None;
        }
        self.current -= 1;
        Some(self.history[self.current].undo())
    }

    pub fn redo_command(&mut self) -> Option<String> {
        let command = self.history.get_mut(self.current)?;
        let line = command.execute();
        self.current += 1;
        Some(line)
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }
}

pub fn demo() -> Transcript {
    let editor = TextEditor::shared();
    let mut manager = CommandManager::new();

    let mut out = Transcript::new();
    out.push(manager.execute_command(Box::new(TypeCommand::new(&editor, "Hello, "))));
    out.push(manager.execute_command(Box::new(TypeCommand::new(&editor, "world!"))));
    out.extend(manager.undo_command());
    out.extend(manager.undo_command());
    out
}
