//! Board geometry in terminal cells.
//!
//! Lists are fixed-width columns in a horizontally scrolled strip; each
//! list body scrolls vertically on its own. Rects are screen positions with
//! the scroll offsets already applied, and off-screen items keep their
//! (off-screen) rects so hit-testing and drop targets stay consistent.

use std::collections::HashMap;

use tacky_core::{Point, Rect, Vector};
use tacky_dnd::{Container, DraggableId, DropLocation, DropTargets, ListTarget, ScrollViewport};
use tacky_domain::{Board, CardId, ListId};

pub const LIST_WIDTH: f64 = 30.0;
pub const LIST_GAP: f64 = 2.0;
pub const CARD_HEIGHT: f64 = 4.0;

/// Auto-scroll tuning is written in pixels; one cell is taken as eight.
pub const CELLS_PER_PIXEL: f64 = 0.125;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    pub strip_x: f64,
    lists: HashMap<ListId, f64>,
}

impl ScrollState {
    pub fn list_offset(&self, list_id: &ListId) -> f64 {
        self.lists.get(list_id).copied().unwrap_or(0.0)
    }

    pub fn set_list_offset(&mut self, list_id: &ListId, offset: f64) {
        self.lists.insert(list_id.clone(), offset);
    }

    /// Drops offsets of lists that no longer exist and re-clamps the rest.
    pub fn clamp_to(&mut self, layout: &BoardLayout) {
        self.strip_x = self.strip_x.clamp(0.0, layout.max_strip_scroll);
        self.lists.retain(|id, offset| match layout.list(id) {
            Some(list) => {
                *offset = offset.clamp(0.0, list.max_scroll);
                true
            }
            None => false,
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListLayout {
    pub list_id: ListId,
    pub index: usize,
    pub column: Rect,
    pub body: Rect,
    pub cards: Vec<(CardId, Rect)>,
    pub max_scroll: f64,
}

impl ListLayout {
    pub fn header_contains(&self, point: Point) -> bool {
        self.column.contains(point) && point.y < self.body.top()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Hit {
    ListHeader { list_id: ListId, index: usize },
    Card { list_id: ListId, card_id: CardId, index: usize },
    ListBody { list_id: ListId },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardLayout {
    pub strip: Rect,
    pub lists: Vec<ListLayout>,
    pub max_strip_scroll: f64,
}

impl BoardLayout {
    pub fn compute(board: &Board, strip: Rect, scroll: &ScrollState) -> Self {
        let content_width = board.lists.len() as f64 * (LIST_WIDTH + LIST_GAP) - LIST_GAP;
        let max_strip_scroll = (content_width - strip.width).max(0.0);
        let strip_x = scroll.strip_x.clamp(0.0, max_strip_scroll);

        let lists = board
            .lists
            .iter()
            .enumerate()
            .map(|(index, list)| {
                let x = strip.x + index as f64 * (LIST_WIDTH + LIST_GAP) - strip_x;
                let column = Rect::new(x, strip.y, LIST_WIDTH, strip.height);
                let body = Rect::new(
                    x + 1.0,
                    strip.y + 1.0,
                    LIST_WIDTH - 2.0,
                    (strip.height - 2.0).max(0.0),
                );
                let content_height = list.cards.len() as f64 * CARD_HEIGHT;
                let max_scroll = (content_height - body.height).max(0.0);
                let offset = scroll.list_offset(&list.id).clamp(0.0, max_scroll);
                let cards = list
                    .cards
                    .iter()
                    .enumerate()
                    .map(|(i, card)| {
                        let y = body.y + i as f64 * CARD_HEIGHT - offset;
                        (card.id.clone(), Rect::new(body.x, y, body.width, CARD_HEIGHT))
                    })
                    .collect();
                ListLayout {
                    list_id: list.id.clone(),
                    index,
                    column,
                    body,
                    cards,
                    max_scroll,
                }
            })
            .collect();

        Self {
            strip,
            lists,
            max_strip_scroll,
        }
    }

    pub fn list(&self, list_id: &ListId) -> Option<&ListLayout> {
        self.lists.iter().find(|l| &l.list_id == list_id)
    }

    pub fn list_at(&self, point: Point) -> Option<&ListLayout> {
        if !self.strip.contains(point) {
            return None;
        }
        self.lists.iter().find(|l| l.column.contains(point))
    }

    pub fn hit(&self, point: Point) -> Option<Hit> {
        let list = self.list_at(point)?;
        if list.header_contains(point) {
            return Some(Hit::ListHeader {
                list_id: list.list_id.clone(),
                index: list.index,
            });
        }
        if !list.body.contains(point) {
            return None;
        }
        let card = list
            .cards
            .iter()
            .enumerate()
            .find(|(_, (_, rect))| point.y >= rect.top() && point.y < rect.bottom());
        Some(match card {
            Some((index, (card_id, _))) => Hit::Card {
                list_id: list.list_id.clone(),
                card_id: card_id.clone(),
                index,
            },
            None => Hit::ListBody {
                list_id: list.list_id.clone(),
            },
        })
    }

    pub fn rect_of(&self, item: &DraggableId) -> Option<Rect> {
        match item {
            DraggableId::List(list_id) => self.list(list_id).map(|l| l.column),
            DraggableId::Card(card_id) => self
                .lists
                .iter()
                .flat_map(|l| l.cards.iter())
                .find(|(id, _)| id == card_id)
                .map(|(_, rect)| *rect),
        }
    }

    pub fn drop_targets(&self) -> DropTargets {
        let mut targets = DropTargets::new(self.strip);
        for list in &self.lists {
            let mut target = ListTarget::new(list.list_id.clone(), list.column, list.body);
            for (card_id, rect) in &list.cards {
                target = target.with_card(card_id.clone(), *rect);
            }
            targets.push_list(target);
        }
        targets
    }

    /// One-cell line marking where `item` would be inserted at `candidate`:
    /// a vertical bar between columns or a horizontal rule between cards.
    pub fn indicator(&self, item: &DraggableId, candidate: &DropLocation) -> Option<Rect> {
        match (&candidate.container, item) {
            (Container::Board, DraggableId::List(dragged)) => {
                let siblings: Vec<_> = self.lists.iter().filter(|l| &l.list_id != dragged).collect();
                let x = match siblings.get(candidate.index) {
                    Some(next) => next.column.left() - 1.0,
                    None => siblings.last().map_or(self.strip.left(), |l| l.column.right()),
                };
                Some(Rect::new(x, self.strip.y, 1.0, self.strip.height))
            }
            (Container::List(list_id), DraggableId::Card(dragged)) => {
                let list = self.list(list_id)?;
                let siblings: Vec<_> = list.cards.iter().filter(|(id, _)| id != dragged).collect();
                let y = match siblings.get(candidate.index) {
                    Some((_, next)) => next.top(),
                    None => siblings
                        .last()
                        .map_or(list.body.top(), |(_, rect)| rect.bottom()),
                };
                Some(Rect::new(list.body.x, y, list.body.width, 1.0))
            }
            _ => None,
        }
    }
}

/// The strip and list bodies as seen by the auto-scroll engine.
pub struct ScrollSurface<'a> {
    pub scroll: &'a mut ScrollState,
    pub layout: &'a BoardLayout,
}

impl ScrollViewport for ScrollSurface<'_> {
    fn outer_bounds(&self) -> Option<Rect> {
        Some(self.layout.strip)
    }

    // The strip never overflows vertically, so only dx matters.
    fn scroll_outer(&mut self, delta: Vector) {
        self.scroll.strip_x =
            (self.scroll.strip_x + delta.dx).clamp(0.0, self.layout.max_strip_scroll);
    }

    fn inner_bounds(&self, list_id: &ListId) -> Option<Rect> {
        self.layout.list(list_id).map(|l| l.body)
    }

    fn scroll_inner(&mut self, list_id: &ListId, dy: f64) {
        if let Some(list) = self.layout.list(list_id) {
            let offset = (self.scroll.list_offset(list_id) + dy).clamp(0.0, list.max_scroll);
            self.scroll.set_list_offset(list_id, offset);
        }
    }
}
