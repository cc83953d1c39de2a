use crate::dialog::{CardEditor, CardField, Dialog};
use crate::theme::{self, focused_border, label_color, popup_bg};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tacky_core::TextInput;
use tacky_domain::LABELS;

/// A box `percent_x` wide and `height` rows tall, centred in `r`.
pub fn popup_area(percent_x: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    area
}

fn render_popup_block(frame: &mut Frame, title: &str, area: Rect) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .style(popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn render_input(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let border = if focused {
        focused_border()
    } else {
        theme::label_text()
    };
    let field = Paragraph::new(input.as_str()).style(theme::normal_text()).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(field, area);

    if focused {
        let column = u16::try_from(input.cursor_column()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(column)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_hint(frame: &mut Frame, area: Rect, hint: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(hint, theme::label_text())),
        area,
    );
}

pub fn render_dialog(frame: &mut Frame, dialog: &Dialog) {
    match dialog {
        Dialog::EditCard(editor) => render_card_editor(frame, editor),
        Dialog::RenameList { title, .. } => {
            let inner = render_popup_block(frame, "Rename list", popup_area(50, 6, frame.area()));
            let [field, hint] =
                Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(inner);
            render_input(frame, field, "Title", title, true);
            render_hint(frame, hint, "Enter: save · Esc: cancel");
        }
        Dialog::ConfirmDeleteList { name, .. } => {
            let inner = render_popup_block(frame, "Delete list", popup_area(50, 5, frame.area()));
            let [message, _, hint] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);
            let text = Line::from(vec![
                Span::styled("Cards inside ", theme::normal_text()),
                Span::styled(name.as_str(), theme::highlight_text()),
                Span::styled(" will also be deleted.", theme::normal_text()),
            ]);
            frame.render_widget(Paragraph::new(text), message);
            render_hint(frame, hint, "y: delete list · n: keep it");
        }
    }
}

fn render_card_editor(frame: &mut Frame, editor: &CardEditor) {
    let inner = render_popup_block(frame, "Edit card", popup_area(60, 15, frame.area()));
    let [title, description, due, labels, hint] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    for (field, area) in CardField::ALL.into_iter().zip([title, description, due]) {
        if let Some(input) = editor.input(field) {
            render_input(frame, area, field.name(), input, editor.focus == field);
        }
    }

    let mut swatches = Vec::new();
    for (i, label) in LABELS.iter().enumerate() {
        let color = label_color(label).map_or(Style::default(), |c| Style::default().fg(c));
        let mark = if editor.has_label(label) { "■" } else { "□" };
        swatches.push(Span::styled(format!("{}{} ", i + 1, mark), color));
    }
    let border = if editor.focus == CardField::Labels {
        focused_border()
    } else {
        theme::label_text()
    };
    frame.render_widget(
        Paragraph::new(Line::from(swatches)).block(
            Block::default()
                .title(CardField::Labels.name())
                .borders(Borders::ALL)
                .border_style(border),
        ),
        labels,
    );
    render_hint(frame, hint, "Tab: next field · Enter: save · Esc: cancel");
}
