use crate::app::App;
use crate::layout::BoardLayout;
use crate::popup::render_dialog;
use crate::theme::*;
use crate::widgets::{blit, to_cells, CardWidget, ColumnWidget, Placeholder};
use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect as CellRect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
    Frame,
};
use tacky_core::Rect;
use tacky_dnd::{DragSnapshot, DragStyle, DraggableId, DropLocation, RenderItem, RenderLayer};
use tacky_domain::{Card, List};

/// Title bar, board strip, status line.
pub fn screen_areas(area: CellRect) -> [CellRect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let [title, board, status] = screen_areas(frame.area());
    app.resize(board);

    render_title(app, frame, title);
    render_board(app, frame, board);
    render_status(app, frame, status);

    if let Some(dialog) = app.dialog() {
        render_dialog(frame, dialog);
    }
}

fn render_title(app: &App, frame: &mut Frame, area: CellRect) {
    let text = match app.board() {
        Some(board) => format!(
            " tacky │ {} │ {} lists · {} cards ",
            board.name,
            board.lists.len(),
            board.card_count()
        ),
        None => " tacky ".to_string(),
    };
    frame.render_widget(Paragraph::new(text).style(title_bar()), area);
}

fn render_status(app: &App, frame: &mut Frame, area: CellRect) {
    let line = if let Some(active) = app.controller().active() {
        let what = match active.item {
            DraggableId::List(_) => "list",
            DraggableId::Card(_) => "card",
        };
        Line::from(vec![
            Span::styled(format!(" Moving {} ", what), highlight_text()),
            Span::styled("· release to drop · Esc to cancel", label_text()),
        ])
    } else if let Some(message) = app.status() {
        Line::from(Span::styled(format!(" {}", message), normal_text()))
    } else {
        Line::from(Span::styled(
            " drag with the mouse · a/r/x: add/rename/delete list · n/e/d: add/edit/delete card · q: quit",
            label_text(),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

enum Node<'a> {
    Column(&'a List),
    /// A card and the list body it is clipped to while in flow.
    Card(&'a Card, CellRect),
}

/// Paints in-flow items straight onto the frame, clipped to their scroll
/// container.
struct FlowLayer<'b> {
    buf: &'b mut Buffer,
    strip: CellRect,
    today: NaiveDate,
}

impl RenderLayer<Node<'_>> for FlowLayer<'_> {
    fn paint(&mut self, node: &Node<'_>, rect: Rect, style: &DragStyle) {
        let lifted = style.z_index.is_some();
        match node {
            Node::Column(list) => {
                let widget = ColumnWidget {
                    list,
                    lifted,
                    with_cards: false,
                    today: self.today,
                };
                blit(widget, rect, self.strip, self.buf);
            }
            Node::Card(card, body) => {
                let widget = CardWidget {
                    card,
                    lifted,
                    today: self.today,
                };
                blit(widget, rect, *body, self.buf);
            }
        }
    }
}

/// Detached items go to a separate buffer that is composited over the frame
/// after everything else, unclipped by any list or the strip.
struct OverlayLayer {
    buf: Buffer,
    painted: Vec<CellRect>,
    today: NaiveDate,
}

impl OverlayLayer {
    fn new(area: CellRect, today: NaiveDate) -> Self {
        Self {
            buf: Buffer::empty(area),
            painted: Vec::new(),
            today,
        }
    }

    fn composite(&self, target: &mut Buffer) {
        for area in &self.painted {
            Clear.render(*area, target);
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    let position = Position::new(x, y);
                    if let (Some(src), Some(dst)) =
                        (self.buf.cell(position), target.cell_mut(position))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

impl RenderLayer<Node<'_>> for OverlayLayer {
    fn paint(&mut self, node: &Node<'_>, rect: Rect, style: &DragStyle) {
        let lifted = style.z_index.is_some();
        let area = self.buf.area;
        match node {
            Node::Column(list) => {
                let widget = ColumnWidget {
                    list,
                    lifted,
                    with_cards: true,
                    today: self.today,
                };
                blit(widget, rect, area, &mut self.buf);
            }
            Node::Card(card, _) => {
                let widget = CardWidget {
                    card,
                    lifted,
                    today: self.today,
                };
                blit(widget, rect, area, &mut self.buf);
            }
        }
        self.painted.push(to_cells(rect, area));
    }
}

fn render_board(app: &App, frame: &mut Frame, area: CellRect) {
    let Some(board) = app.board() else {
        frame.render_widget(
            Paragraph::new(Span::styled(" No board to show", label_text())),
            area,
        );
        return;
    };
    let layout = app.layout();
    let controller = app.controller();
    let today = app.today();

    let mut entries: Vec<(DraggableId, Node, Rect, DragSnapshot)> = Vec::new();
    let mut placeholders: Vec<(Rect, CellRect)> = Vec::new();
    for (list, list_layout) in board.lists.iter().zip(&layout.lists) {
        let id = DraggableId::List(list.id.clone());
        let snapshot = controller.snapshot(&id);
        entries.push((id, Node::Column(list), list_layout.column, snapshot));
        if snapshot.is_detached() {
            placeholders.push((list_layout.column, area));
            continue;
        }

        let body = to_cells(list_layout.body, area);
        for (card, (_, rect)) in list.cards.iter().zip(&list_layout.cards) {
            let id = DraggableId::Card(card.id.clone());
            let snapshot = controller.snapshot(&id);
            if snapshot.is_detached() {
                placeholders.push((*rect, body));
            }
            entries.push((id, Node::Card(card, body), *rect, snapshot));
        }
    }

    let frame_area = frame.area();
    let mut overlay = OverlayLayer::new(frame_area, today);
    {
        let mut flow = FlowLayer {
            buf: frame.buffer_mut(),
            strip: area,
            today,
        };
        let items = entries.iter().map(|(id, node, rect, snapshot)| RenderItem {
            id,
            node,
            layout: *rect,
            snapshot: *snapshot,
        });
        app.overlay().paint_all(items, &mut flow, &mut overlay);

        for (rect, clip) in placeholders {
            blit(Placeholder, rect, clip, flow.buf);
        }
    }

    if let Some(active) = controller.active() {
        if let Some(candidate) = &active.candidate {
            render_indicator(layout, &active.item, candidate, area, frame.buffer_mut());
        }
    }

    overlay.composite(frame.buffer_mut());
}

fn render_indicator(
    layout: &BoardLayout,
    item: &DraggableId,
    candidate: &DropLocation,
    area: CellRect,
    buf: &mut Buffer,
) {
    let Some(rect) = layout.indicator(item, candidate) else {
        return;
    };
    let clip = match candidate.list_id().and_then(|id| layout.list(id)) {
        Some(list) => to_cells(list.body, area),
        None => area,
    };
    let cells = to_cells(rect, clip);
    let symbol = if rect.width <= 1.0 { "┃" } else { "━" };
    for y in cells.top()..cells.bottom() {
        for x in cells.left()..cells.right() {
            if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                cell.set_symbol(symbol).set_style(drop_indicator());
            }
        }
    }
}
