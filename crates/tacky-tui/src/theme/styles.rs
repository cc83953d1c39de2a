use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn column_border(lifted: bool) -> Style {
    if lifted {
        Style::default().fg(LIFTED_BORDER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLUMN_BORDER)
    }
}

pub fn card_border(lifted: bool) -> Style {
    if lifted {
        Style::default().fg(LIFTED_BORDER)
    } else {
        Style::default().fg(CARD_BORDER)
    }
}

pub fn placeholder() -> Style {
    Style::default().fg(PLACEHOLDER).add_modifier(Modifier::DIM)
}

pub fn drop_indicator() -> Style {
    Style::default().fg(DROP_INDICATOR).add_modifier(Modifier::BOLD)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn card_title() -> Style {
    normal_text().add_modifier(Modifier::BOLD)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn overdue() -> Style {
    Style::default().fg(OVERDUE).add_modifier(Modifier::BOLD)
}

pub fn title_bar() -> Style {
    Style::default()
        .bg(TITLE_BAR_BG)
        .fg(NORMAL_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG).fg(NORMAL_TEXT)
}

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER).add_modifier(Modifier::BOLD)
}
