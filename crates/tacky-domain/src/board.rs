use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::ids::{BoardId, CardId, ListId};
use crate::list::List;
use crate::palette::default_wallpaper;

/// A board and its full list/card tree.
///
/// Field names and casing are the persisted record shape; changing them
/// breaks stored data and exported files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub wallpaper: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    pub lists: Vec<List>,
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BoardId::generate(),
            name: name.into(),
            wallpaper: default_wallpaper(),
            created_at: Utc::now().timestamp_millis(),
            lists: Vec::new(),
        }
    }

    pub fn with_wallpaper(mut self, wallpaper: impl Into<String>) -> Self {
        self.wallpaper = wallpaper.into();
        self
    }

    pub fn with_lists(mut self, lists: Vec<List>) -> Self {
        self.lists = lists;
        self
    }

    pub fn rename(&self, name: impl Into<String>) -> Board {
        let mut next = self.clone();
        next.name = name.into();
        next
    }

    pub fn set_wallpaper(&self, wallpaper: impl Into<String>) -> Board {
        let mut next = self.clone();
        next.wallpaper = wallpaper.into();
        next
    }

    pub fn list(&self, list_id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == list_id)
    }

    pub fn list_index(&self, list_id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| &l.id == list_id)
    }

    /// Finds the list holding `card_id` and the card's index in it.
    pub fn locate_card(&self, card_id: &CardId) -> Option<(&ListId, usize)> {
        self.lists
            .iter()
            .find_map(|l| l.card_index(card_id).map(|index| (&l.id, index)))
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(List::len).sum()
    }

    /// Distinct label colours in use, in first-seen order.
    pub fn label_colors(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for label in self
            .lists
            .iter()
            .flat_map(|l| l.cards.iter())
            .flat_map(|c| c.labels.iter())
        {
            if !seen.contains(label) {
                seen.push(label.clone());
            }
        }
        seen
    }

    /// File name suggested when exporting this board.
    pub fn export_file_name(&self) -> String {
        let stem = self.name.split_whitespace().collect::<Vec<_>>().join("_");
        format!("{}.tacky.json", stem)
    }
}
