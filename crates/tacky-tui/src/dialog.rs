use crossterm::event::KeyCode;
use tacky_core::TextInput;
use tacky_domain::{Card, List, ListId, LABELS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    Confirm,
}

/// Line editing shared by every prompt. A `required` prompt refuses to
/// confirm while blank.
pub fn handle_dialog_input(input: &mut TextInput, key_code: KeyCode, required: bool) -> DialogAction {
    match key_code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter if required && input.is_blank() => DialogAction::None,
        KeyCode::Enter => DialogAction::Confirm,
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Title,
    Description,
    Due,
    Labels,
}

impl CardField {
    pub const ALL: [CardField; 4] = [
        CardField::Title,
        CardField::Description,
        CardField::Due,
        CardField::Labels,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CardField::Title => "Title",
            CardField::Description => "Description",
            CardField::Due => "Due (YYYY-MM-DD)",
            CardField::Labels => "Labels (1-8 toggle)",
        }
    }

    fn next(self) -> Self {
        match self {
            CardField::Title => CardField::Description,
            CardField::Description => CardField::Due,
            CardField::Due => CardField::Labels,
            CardField::Labels => CardField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            CardField::Title => CardField::Labels,
            CardField::Description => CardField::Title,
            CardField::Due => CardField::Description,
            CardField::Labels => CardField::Due,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CardEditor {
    pub list_id: ListId,
    card: Card,
    pub focus: CardField,
    pub title: TextInput,
    pub description: TextInput,
    pub due: TextInput,
    pub labels: Vec<String>,
}

impl CardEditor {
    pub fn new(list_id: ListId, card: &Card) -> Self {
        Self {
            list_id,
            card: card.clone(),
            focus: CardField::Title,
            title: TextInput::with_text(card.title.clone()),
            description: TextInput::with_text(card.description.clone()),
            due: TextInput::with_text(card.due.clone()),
            labels: card.labels.clone(),
        }
    }

    pub fn input(&self, field: CardField) -> Option<&TextInput> {
        match field {
            CardField::Title => Some(&self.title),
            CardField::Description => Some(&self.description),
            CardField::Due => Some(&self.due),
            CardField::Labels => None,
        }
    }

    /// Enter saves from any field; Tab and BackTab cycle focus.
    pub fn handle_key(&mut self, key_code: KeyCode) -> DialogAction {
        match key_code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return DialogAction::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return DialogAction::None;
            }
            KeyCode::Enter if self.title.is_blank() => {
                self.focus = CardField::Title;
                return DialogAction::None;
            }
            KeyCode::Enter => return DialogAction::Confirm,
            _ => {}
        }
        let input = match self.focus {
            CardField::Title => &mut self.title,
            CardField::Description => &mut self.description,
            CardField::Due => &mut self.due,
            CardField::Labels => return self.handle_label_key(key_code),
        };
        handle_dialog_input(input, key_code, false)
    }

    fn handle_label_key(&mut self, key_code: KeyCode) -> DialogAction {
        match key_code {
            KeyCode::Esc => DialogAction::Cancel,
            KeyCode::Char(c) => {
                let slot = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1));
                if let Some(label) = slot.and_then(|i| LABELS.get(i)) {
                    self.toggle_label(label);
                }
                DialogAction::None
            }
            _ => DialogAction::None,
        }
    }

    pub fn toggle_label(&mut self, label: &str) {
        if let Some(pos) = self.labels.iter().position(|l| l == label) {
            self.labels.remove(pos);
        } else {
            self.labels.push(label.to_string());
        }
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// The edited card, keeping its id.
    pub fn to_card(&self) -> Card {
        Card {
            title: self.title.as_str().trim().to_string(),
            description: self.description.as_str().to_string(),
            due: self.due.as_str().trim().to_string(),
            labels: self.labels.clone(),
            ..self.card.clone()
        }
    }
}

#[derive(Debug, Clone)]
pub enum Dialog {
    EditCard(CardEditor),
    RenameList { list_id: ListId, title: TextInput },
    ConfirmDeleteList { list_id: ListId, name: String },
}

impl Dialog {
    pub fn edit_card(list_id: ListId, card: &Card) -> Self {
        Dialog::EditCard(CardEditor::new(list_id, card))
    }

    pub fn rename_list(list: &List) -> Self {
        Dialog::RenameList {
            list_id: list.id.clone(),
            title: TextInput::with_text(list.title.clone()),
        }
    }

    pub fn confirm_delete_list(list: &List) -> Self {
        Dialog::ConfirmDeleteList {
            list_id: list.id.clone(),
            name: list.title.clone(),
        }
    }

    pub fn handle_key(&mut self, key_code: KeyCode) -> DialogAction {
        match self {
            Dialog::EditCard(editor) => editor.handle_key(key_code),
            Dialog::RenameList { title, .. } => handle_dialog_input(title, key_code, true),
            Dialog::ConfirmDeleteList { .. } => match key_code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => DialogAction::Confirm,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => DialogAction::Cancel,
                _ => DialogAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(editor: &mut CardEditor, text: &str) {
        for c in text.chars() {
            editor.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_required_prompt_refuses_blank() {
        let mut input = TextInput::with_text("  ");
        assert_eq!(
            handle_dialog_input(&mut input, KeyCode::Enter, true),
            DialogAction::None
        );
        assert_eq!(
            handle_dialog_input(&mut input, KeyCode::Enter, false),
            DialogAction::Confirm
        );
        assert_eq!(
            handle_dialog_input(&mut input, KeyCode::Esc, true),
            DialogAction::Cancel
        );
    }

    #[test]
    fn test_card_editor_edits_every_field() {
        let card = Card::new("Draft").with_labels(["#ff6b6b"]);
        let mut editor = CardEditor::new(ListId::from("todo"), &card);

        type_text(&mut editor, " plan ");
        editor.handle_key(KeyCode::Tab);
        type_text(&mut editor, "notes");
        editor.handle_key(KeyCode::Tab);
        type_text(&mut editor, "2030-01-02");
        editor.handle_key(KeyCode::Tab);
        assert_eq!(editor.focus, CardField::Labels);
        type_text(&mut editor, "1");
        type_text(&mut editor, "3");
        type_text(&mut editor, "9");

        assert_eq!(editor.handle_key(KeyCode::Enter), DialogAction::Confirm);
        let edited = editor.to_card();
        assert_eq!(edited.id, card.id);
        assert_eq!(edited.title, "Draft plan");
        assert_eq!(edited.description, "notes");
        assert_eq!(edited.due, "2030-01-02");
        assert_eq!(edited.labels, vec![LABELS[2].to_string()]);
    }

    #[test]
    fn test_card_editor_needs_a_title() {
        let card = Card::new("x");
        let mut editor = CardEditor::new(ListId::from("todo"), &card);
        editor.handle_key(KeyCode::Backspace);
        editor.handle_key(KeyCode::BackTab);
        assert_eq!(editor.focus, CardField::Labels);

        assert_eq!(editor.handle_key(KeyCode::Enter), DialogAction::None);
        assert_eq!(editor.focus, CardField::Title);
        assert_eq!(editor.handle_key(KeyCode::Esc), DialogAction::Cancel);
    }

    #[test]
    fn test_confirm_delete_keys() {
        let list = List::new("Done");
        let mut dialog = Dialog::confirm_delete_list(&list);
        assert_eq!(dialog.handle_key(KeyCode::Char('x')), DialogAction::None);
        assert_eq!(dialog.handle_key(KeyCode::Char('n')), DialogAction::Cancel);
        assert_eq!(dialog.handle_key(KeyCode::Char('y')), DialogAction::Confirm);
    }
}
