//! Mutations of the board → lists → cards tree.
//!
//! Every operation borrows the current board and returns the next one; the
//! input is never modified. A rejected mutation yields an unchanged copy, so
//! callers can always commit whatever comes back.
//!
//! The `try_*` forms report why a mutation was rejected. The plain forms are
//! what the UI calls: they absorb the error, log it, and hand back the
//! untouched board.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::card::Card;
use crate::ids::{CardId, ListId};
use crate::list::List;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("list index {index} out of bounds for {len} lists")]
    ListIndexOutOfBounds { index: usize, len: usize },

    #[error("list not found: {0}")]
    ListNotFound(ListId),

    #[error("card index {index} out of bounds for list {list} with {len} cards")]
    CardIndexOutOfBounds {
        list: ListId,
        index: usize,
        len: usize,
    },

    #[error("card not found: {0}")]
    CardNotFound(CardId),
}

/// The (source, destination) pair computed by a finished drag gesture.
///
/// Destination indices address the sequence *after* the item was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReorderIntent {
    MoveList {
        from: usize,
        to: usize,
    },
    MoveCard {
        from_list: ListId,
        from_index: usize,
        to_list: ListId,
        to_index: usize,
    },
}

impl ReorderIntent {
    /// True when applying the intent would put the item back where it was.
    pub fn is_identity(&self) -> bool {
        match self {
            Self::MoveList { from, to } => from == to,
            Self::MoveCard {
                from_list,
                from_index,
                to_list,
                to_index,
            } => from_list == to_list && from_index == to_index,
        }
    }
}

impl Board {
    pub fn try_move_list(&self, from: usize, to: usize) -> Result<Board, HierarchyError> {
        let len = self.lists.len();
        if from >= len {
            return Err(HierarchyError::ListIndexOutOfBounds { index: from, len });
        }
        if to >= len {
            return Err(HierarchyError::ListIndexOutOfBounds { index: to, len });
        }
        let mut next = self.clone();
        if from != to {
            let moved = next.lists.remove(from);
            next.lists.insert(to, moved);
        }
        Ok(next)
    }

    /// Out-of-bounds indices are a caller bug; they are logged and ignored.
    pub fn move_list(&self, from: usize, to: usize) -> Board {
        self.try_move_list(from, to).unwrap_or_else(|e| {
            tracing::warn!("Ignoring list move {} -> {}: {}", from, to, e);
            self.clone()
        })
    }

    pub fn try_move_card(
        &self,
        from_list: &ListId,
        from_index: usize,
        to_list: &ListId,
        to_index: usize,
    ) -> Result<Board, HierarchyError> {
        let source = self
            .list_index(from_list)
            .ok_or_else(|| HierarchyError::ListNotFound(from_list.clone()))?;
        let destination = self
            .list_index(to_list)
            .ok_or_else(|| HierarchyError::ListNotFound(to_list.clone()))?;

        let len = self.lists[source].cards.len();
        if from_index >= len {
            return Err(HierarchyError::CardIndexOutOfBounds {
                list: from_list.clone(),
                index: from_index,
                len,
            });
        }

        let mut next = self.clone();
        let moved = next.lists[source].cards.remove(from_index);
        let cards = &mut next.lists[destination].cards;
        let at = to_index.min(cards.len());
        cards.insert(at, moved);
        Ok(next)
    }

    /// Stale references (the tree changed under a running gesture) reject the
    /// move and leave the board as it was.
    pub fn move_card(
        &self,
        from_list: &ListId,
        from_index: usize,
        to_list: &ListId,
        to_index: usize,
    ) -> Board {
        self.try_move_card(from_list, from_index, to_list, to_index)
            .unwrap_or_else(|e| {
                tracing::debug!("Rejected card move: {}", e);
                self.clone()
            })
    }

    pub fn try_apply_reorder(&self, intent: &ReorderIntent) -> Result<Board, HierarchyError> {
        match intent {
            ReorderIntent::MoveList { from, to } => self.try_move_list(*from, *to),
            ReorderIntent::MoveCard {
                from_list,
                from_index,
                to_list,
                to_index,
            } => self.try_move_card(from_list, *from_index, to_list, *to_index),
        }
    }

    pub fn apply_reorder(&self, intent: &ReorderIntent) -> Board {
        match intent {
            ReorderIntent::MoveList { from, to } => self.move_list(*from, *to),
            ReorderIntent::MoveCard {
                from_list,
                from_index,
                to_list,
                to_index,
            } => self.move_card(from_list, *from_index, to_list, *to_index),
        }
    }

    pub fn add_list(&self, title: impl Into<String>) -> Board {
        let mut next = self.clone();
        next.lists.push(List::new(title));
        next
    }

    pub fn try_rename_list(&self, list_id: &ListId, title: impl Into<String>) -> Result<Board, HierarchyError> {
        let mut next = self.clone();
        let list = next.list_mut(list_id)?;
        list.title = title.into();
        Ok(next)
    }

    pub fn rename_list(&self, list_id: &ListId, title: impl Into<String>) -> Board {
        self.try_rename_list(list_id, title)
            .unwrap_or_else(|e| self.absorb("rename list", e))
    }

    /// Removes the list together with every card in it.
    pub fn delete_list(&self, list_id: &ListId) -> Board {
        let mut next = self.clone();
        next.lists.retain(|l| &l.id != list_id);
        next
    }

    pub fn try_add_card(&self, list_id: &ListId) -> Result<(Board, CardId), HierarchyError> {
        let mut next = self.clone();
        let card = Card::placeholder();
        let card_id = card.id.clone();
        next.list_mut(list_id)?.cards.push(card);
        Ok((next, card_id))
    }

    /// Appends a placeholder card and returns its id so it can be opened for
    /// editing. An unknown list yields the unchanged board and no id.
    pub fn add_card(&self, list_id: &ListId) -> (Board, Option<CardId>) {
        match self.try_add_card(list_id) {
            Ok((next, card_id)) => (next, Some(card_id)),
            Err(e) => (self.absorb("add card", e), None),
        }
    }

    pub fn try_update_card(&self, list_id: &ListId, card: &Card) -> Result<Board, HierarchyError> {
        let mut next = self.clone();
        let list = next.list_mut(list_id)?;
        let slot = list
            .cards
            .iter_mut()
            .find(|c| c.id == card.id)
            .ok_or_else(|| HierarchyError::CardNotFound(card.id.clone()))?;
        *slot = card.clone();
        Ok(next)
    }

    pub fn update_card(&self, list_id: &ListId, card: &Card) -> Board {
        self.try_update_card(list_id, card)
            .unwrap_or_else(|e| self.absorb("update card", e))
    }

    pub fn delete_card(&self, list_id: &ListId, card_id: &CardId) -> Board {
        let mut next = self.clone();
        if let Some(list) = next.lists.iter_mut().find(|l| &l.id == list_id) {
            list.cards.retain(|c| &c.id != card_id);
        }
        next
    }

    fn list_mut(&mut self, list_id: &ListId) -> Result<&mut List, HierarchyError> {
        self.lists
            .iter_mut()
            .find(|l| &l.id == list_id)
            .ok_or_else(|| HierarchyError::ListNotFound(list_id.clone()))
    }

    fn absorb(&self, operation: &str, error: HierarchyError) -> Board {
        tracing::debug!("Ignoring {}: {}", operation, error);
        self.clone()
    }
}
