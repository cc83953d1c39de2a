use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect as CellRect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tacky_core::Rect;
use tacky_domain::{Card, List};

use crate::layout::CARD_HEIGHT;
use crate::theme::{self, label_color};

pub struct CardWidget<'a> {
    pub card: &'a Card,
    pub lifted: bool,
    pub today: NaiveDate,
}

impl Widget for CardWidget<'_> {
    fn render(self, area: CellRect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::card_border(self.lifted));
        let inner = block.inner(area);
        block.render(area, buf);

        let title = if self.card.title.is_empty() {
            Span::styled("(untitled)", theme::label_text())
        } else {
            Span::styled(self.card.title.as_str(), theme::card_title())
        };

        let mut meta: Vec<Span> = self
            .card
            .labels
            .iter()
            .map(|label| match label_color(label) {
                Some(color) => Span::styled("■ ", ratatui::style::Style::default().fg(color)),
                None => Span::styled(format!("{} ", label), theme::label_text()),
            })
            .collect();
        if !self.card.due.is_empty() {
            let style = if self.card.is_overdue(self.today) {
                theme::overdue()
            } else {
                theme::highlight_text()
            };
            meta.push(Span::styled(format!("due {}", self.card.due), style));
        }

        Paragraph::new(vec![Line::from(title), Line::from(meta)]).render(inner, buf);
    }
}

pub struct ColumnWidget<'a> {
    pub list: &'a List,
    pub lifted: bool,
    /// Paint the cards too, stacked from the top. Used when the whole column
    /// is detached from the board.
    pub with_cards: bool,
    pub today: NaiveDate,
}

impl Widget for ColumnWidget<'_> {
    fn render(self, area: CellRect, buf: &mut Buffer) {
        let title = format!(" {} ({}) ", self.list.title, self.list.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme::column_border(self.lifted));
        let inner = block.inner(area);
        block.render(area, buf);

        if !self.with_cards {
            return;
        }
        let height = CARD_HEIGHT as u16;
        for (i, card) in self.list.cards.iter().enumerate() {
            let y = inner.y.saturating_add((i as u16).saturating_mul(height));
            if y.saturating_add(height) > inner.bottom() {
                break;
            }
            CardWidget {
                card,
                lifted: false,
                today: self.today,
            }
            .render(CellRect::new(inner.x, y, inner.width, height), buf);
        }
    }
}

pub struct Placeholder;

impl Widget for Placeholder {
    fn render(self, area: CellRect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(theme::placeholder())
            .render(area, buf);
    }
}

/// Renders `widget` as if it occupied `rect` (which may hang off-screen)
/// and copies only the cells inside `clip` onto `buf`.
pub fn blit<W: Widget>(widget: W, rect: Rect, clip: CellRect, buf: &mut Buffer) {
    let width = rect.width.round().max(0.0) as u16;
    let height = rect.height.round().max(0.0) as u16;
    if width == 0 || height == 0 {
        return;
    }
    let mut scratch = Buffer::empty(CellRect::new(0, 0, width, height));
    widget.render(scratch.area, &mut scratch);

    let clip = clip.intersection(buf.area);
    let origin_x = rect.x.round() as i32;
    let origin_y = rect.y.round() as i32;
    for dy in 0..height {
        for dx in 0..width {
            let (x, y) = (origin_x + i32::from(dx), origin_y + i32::from(dy));
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            if !clip.contains(Position::new(x, y)) {
                continue;
            }
            if let (Some(src), Some(dst)) = (scratch.cell((dx, dy)), buf.cell_mut((x, y))) {
                *dst = src.clone();
            }
        }
    }
}

/// Converts a layout rect to whole cells, clipped to `bounds`.
pub fn to_cells(rect: Rect, bounds: CellRect) -> CellRect {
    let left = rect.left().round().max(0.0) as u16;
    let top = rect.top().round().max(0.0) as u16;
    let right = rect.right().round().max(0.0) as u16;
    let bottom = rect.bottom().round().max(0.0) as u16;
    CellRect::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
        .intersection(bounds)
}
