//! Drop-target geometry.
//!
//! Rectangles are registered from layout (where items sit in flow), never
//! from where an overlay is being painted, so a dragged item hovering over a
//! list cannot shadow the targets underneath it.

use tacky_core::{Axis, Point, Rect};
use tacky_domain::{CardId, ListId};

use crate::session::{Container, DraggableId, DropLocation};

/// One list column: its whole column rect, the scrollable card body, and the
/// in-flow rect of every card in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ListTarget {
    pub list_id: ListId,
    pub column: Rect,
    pub body: Rect,
    pub cards: Vec<(CardId, Rect)>,
}

impl ListTarget {
    pub fn new(list_id: ListId, column: Rect, body: Rect) -> Self {
        Self {
            list_id,
            column,
            body,
            cards: Vec::new(),
        }
    }

    pub fn with_card(mut self, card_id: CardId, rect: Rect) -> Self {
        self.cards.push((card_id, rect));
        self
    }

    pub fn card_rect(&self, card_id: &CardId) -> Option<Rect> {
        self.cards
            .iter()
            .find(|(id, _)| id == card_id)
            .map(|(_, rect)| *rect)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropTargets {
    strip: Option<Rect>,
    lists: Vec<ListTarget>,
}

impl DropTargets {
    pub fn new(strip: Rect) -> Self {
        Self {
            strip: Some(strip),
            lists: Vec::new(),
        }
    }

    pub fn push_list(&mut self, target: ListTarget) {
        self.lists.push(target);
    }

    pub fn with_list(mut self, target: ListTarget) -> Self {
        self.push_list(target);
        self
    }

    pub fn strip(&self) -> Option<Rect> {
        self.strip
    }

    pub fn lists(&self) -> &[ListTarget] {
        &self.lists
    }

    pub fn list(&self, list_id: &ListId) -> Option<&ListTarget> {
        self.lists.iter().find(|t| &t.list_id == list_id)
    }

    /// Layout rect of a list column or card, if it is registered.
    pub fn rect_of(&self, item: &DraggableId) -> Option<Rect> {
        match item {
            DraggableId::List(list_id) => self.list(list_id).map(|t| t.column),
            DraggableId::Card(card_id) => self.lists.iter().find_map(|t| t.card_rect(card_id)),
        }
    }

    fn in_strip(&self, point: Point) -> bool {
        self.strip.map_or(true, |strip| strip.contains(point))
    }

    /// The list column whose horizontal span holds the pointer.
    pub fn list_at(&self, point: Point) -> Option<&ListTarget> {
        if !self.in_strip(point) {
            return None;
        }
        self.lists.iter().find(|t| t.column.spans_x(point.x))
    }

    /// Where `item` would land if released at `pointer`.
    ///
    /// The index counts siblings (the dragged item excluded) whose midpoint
    /// along the container axis lies before the pointer, so it addresses the
    /// sequence with the dragged item already removed.
    pub fn candidate(&self, item: &DraggableId, pointer: Point) -> Option<DropLocation> {
        match item {
            DraggableId::List(dragged) => {
                if !self.in_strip(pointer) {
                    return None;
                }
                let index = self
                    .lists
                    .iter()
                    .filter(|t| &t.list_id != dragged)
                    .filter(|t| t.column.midpoint(Axis::Horizontal) < pointer.x)
                    .count();
                Some(DropLocation::new(Container::Board, index))
            }
            DraggableId::Card(dragged) => {
                let target = self.list_at(pointer)?;
                let index = target
                    .cards
                    .iter()
                    .filter(|(id, _)| id != dragged)
                    .filter(|(_, rect)| rect.midpoint(Axis::Vertical) < pointer.y)
                    .count();
                Some(DropLocation::new(
                    Container::List(target.list_id.clone()),
                    index,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_id(s: &str) -> ListId {
        ListId::from(s)
    }

    fn card_id(s: &str) -> CardId {
        CardId::from(s)
    }

    /// Three 100-wide columns at x = 0, 110, 220; list "a" holds three
    /// 40-tall cards.
    fn layout() -> DropTargets {
        let column = |x: f64| Rect::new(x, 0.0, 100.0, 400.0);
        let body = |x: f64| Rect::new(x, 30.0, 100.0, 370.0);
        DropTargets::new(Rect::new(0.0, 0.0, 600.0, 400.0))
            .with_list(
                ListTarget::new(list_id("a"), column(0.0), body(0.0))
                    .with_card(card_id("a1"), Rect::new(0.0, 30.0, 100.0, 40.0))
                    .with_card(card_id("a2"), Rect::new(0.0, 80.0, 100.0, 40.0))
                    .with_card(card_id("a3"), Rect::new(0.0, 130.0, 100.0, 40.0)),
            )
            .with_list(ListTarget::new(list_id("b"), column(110.0), body(110.0)))
            .with_list(ListTarget::new(list_id("c"), column(220.0), body(220.0)))
    }

    #[test]
    fn test_list_index_counts_midpoints_before_pointer() {
        let targets = layout();
        let item = DraggableId::List(list_id("a"));

        let at = |x: f64| targets.candidate(&item, Point::new(x, 10.0)).map(|d| d.index);
        assert_eq!(at(5.0), Some(0));
        assert_eq!(at(159.0), Some(0));
        assert_eq!(at(161.0), Some(1));
        assert_eq!(at(500.0), Some(2));
    }

    #[test]
    fn test_list_drag_outside_strip_has_no_destination() {
        let targets = layout();
        let item = DraggableId::List(list_id("b"));
        assert_eq!(targets.candidate(&item, Point::new(50.0, 450.0)), None);
    }

    #[test]
    fn test_card_index_excludes_dragged_card() {
        let targets = layout();
        let item = DraggableId::Card(card_id("a1"));

        // below a2's midpoint (100) but above a3's (150)
        let location = targets.candidate(&item, Point::new(50.0, 120.0)).unwrap();
        assert_eq!(location.container, Container::List(list_id("a")));
        assert_eq!(location.index, 1);
    }

    #[test]
    fn test_card_over_other_column() {
        let targets = layout();
        let item = DraggableId::Card(card_id("a2"));
        let location = targets.candidate(&item, Point::new(150.0, 300.0)).unwrap();
        assert_eq!(location, DropLocation::new(Container::List(list_id("b")), 0));
    }

    #[test]
    fn test_card_in_gutter_has_no_destination() {
        let targets = layout();
        let item = DraggableId::Card(card_id("a2"));
        assert_eq!(targets.candidate(&item, Point::new(105.0, 100.0)), None);
    }

    #[test]
    fn test_rect_of() {
        let targets = layout();
        assert_eq!(
            targets.rect_of(&DraggableId::Card(card_id("a2"))),
            Some(Rect::new(0.0, 80.0, 100.0, 40.0))
        );
        assert_eq!(
            targets.rect_of(&DraggableId::List(list_id("c"))),
            Some(Rect::new(220.0, 0.0, 100.0, 400.0))
        );
        assert_eq!(targets.rect_of(&DraggableId::Card(card_id("zz"))), None);
    }
}
