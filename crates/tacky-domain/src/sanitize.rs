//! Repair of untrusted board records.
//!
//! Stored data and imported files are read as loose JSON first. Missing or
//! wrongly typed fields are replaced with defaults instead of failing the
//! whole record, and duplicated list/card ids are reissued so the tree keeps
//! one owner per card.

use chrono::Utc;
use serde_json::Value;
use std::collections::HashSet;

use crate::board::Board;
use crate::card::Card;
use crate::ids::{BoardId, CardId, ListId};
use crate::list::List;
use crate::palette::default_wallpaper;

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Ids may have been written as numbers by hand-edited files.
pub(crate) fn id_field(value: &Value) -> Option<String> {
    match value.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn sanitize_card(value: &Value) -> Card {
    Card {
        id: id_field(value).map(CardId::from).unwrap_or_else(CardId::generate),
        title: string_field(value, "title").unwrap_or_default(),
        description: string_field(value, "description").unwrap_or_default(),
        due: string_field(value, "due").unwrap_or_default(),
        labels: array_field(value, "labels")
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    }
}

pub fn sanitize_list(value: &Value) -> List {
    List {
        id: id_field(value).map(ListId::from).unwrap_or_else(ListId::generate),
        title: string_field(value, "title").unwrap_or_else(|| "List".to_string()),
        cards: array_field(value, "cards").iter().map(sanitize_card).collect(),
    }
}

pub fn sanitize_lists(values: &[Value]) -> Vec<List> {
    let mut lists: Vec<List> = values.iter().map(sanitize_list).collect();
    reissue_duplicate_ids(&mut lists);
    lists
}

pub fn sanitize_board(value: &Value) -> Board {
    Board {
        id: id_field(value).map(BoardId::from).unwrap_or_else(BoardId::generate),
        name: string_field(value, "name").unwrap_or_else(|| "Untitled".to_string()),
        wallpaper: string_field(value, "wallpaper").unwrap_or_else(default_wallpaper),
        created_at: value
            .get("createdAt")
            .and_then(Value::as_f64)
            .map(|ms| ms as i64)
            .unwrap_or_else(|| Utc::now().timestamp_millis()),
        lists: sanitize_lists(array_field(value, "lists")),
    }
}

/// Anything other than a JSON array of boards yields an empty collection.
pub fn sanitize_boards(value: &Value) -> Vec<Board> {
    match value.as_array() {
        Some(items) => items.iter().map(sanitize_board).collect(),
        None => {
            tracing::warn!("Discarding stored boards: root is not an array");
            Vec::new()
        }
    }
}

fn reissue_duplicate_ids(lists: &mut [List]) {
    let mut list_ids = HashSet::new();
    let mut card_ids = HashSet::new();
    for list in lists.iter_mut() {
        if !list_ids.insert(list.id.clone()) {
            let fresh = ListId::generate();
            tracing::debug!("Reissued duplicate list id {} as {}", list.id, fresh);
            list.id = fresh.clone();
            list_ids.insert(fresh);
        }
        for card in list.cards.iter_mut() {
            if !card_ids.insert(card.id.clone()) {
                let fresh = CardId::generate();
                tracing::debug!("Reissued duplicate card id {} as {}", card.id, fresh);
                card.id = fresh.clone();
                card_ids.insert(fresh);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::WALLPAPERS;
    use serde_json::json;

    #[test]
    fn test_missing_fields_get_defaults() {
        let board = sanitize_board(&json!({ "lists": [ { "cards": [ {} ] } ] }));
        assert!(board.id.as_str().starts_with("b_"));
        assert_eq!(board.name, "Untitled");
        assert_eq!(board.wallpaper, WALLPAPERS[0]);
        assert!(board.created_at > 0);
        assert_eq!(board.lists[0].title, "List");
        assert!(board.lists[0].id.as_str().starts_with("l_"));
        let card = &board.lists[0].cards[0];
        assert!(card.id.as_str().starts_with("c_"));
        assert_eq!(card.title, "");
        assert!(card.labels.is_empty());
    }

    #[test]
    fn test_wrong_types_are_replaced() {
        let board = sanitize_board(&json!({
            "id": "b_1",
            "name": 42,
            "createdAt": "yesterday",
            "lists": { "not": "an array" }
        }));
        assert_eq!(board.id.as_str(), "b_1");
        assert_eq!(board.name, "Untitled");
        assert!(board.lists.is_empty());
    }

    #[test]
    fn test_valid_record_is_kept_verbatim() {
        let raw = json!({
            "id": "b_1", "name": "Home", "wallpaper": "plain", "createdAt": 1700000000000i64,
            "lists": [ { "id": "l_1", "title": "Todo", "cards": [
                { "id": "c_1", "title": "Milk", "description": "2L", "due": "2026-01-01", "labels": ["#ff6b6b"] }
            ] } ]
        });
        let board = sanitize_board(&raw);
        assert_eq!(serde_json::to_value(&board).unwrap(), raw);
    }

    #[test]
    fn test_non_string_labels_are_dropped() {
        let card = sanitize_card(&json!({ "labels": ["#ff6b6b", 3, null, "#4dabf7"] }));
        assert_eq!(card.labels, vec!["#ff6b6b", "#4dabf7"]);
    }

    #[test]
    fn test_duplicate_card_ids_are_reissued() {
        let board = sanitize_board(&json!({
            "id": "b_1",
            "lists": [
                { "id": "l_1", "cards": [ { "id": "c_1", "title": "first" } ] },
                { "id": "l_1", "cards": [ { "id": "c_1", "title": "second" } ] }
            ]
        }));
        assert_eq!(board.lists[0].id.as_str(), "l_1");
        assert_ne!(board.lists[1].id.as_str(), "l_1");
        assert_eq!(board.lists[0].cards[0].id.as_str(), "c_1");
        assert_ne!(board.lists[1].cards[0].id.as_str(), "c_1");
        assert_eq!(board.lists[1].cards[0].title, "second");
    }

    #[test]
    fn test_non_array_root_is_empty() {
        assert!(sanitize_boards(&json!({ "boards": [] })).is_empty());
        assert!(sanitize_boards(&json!(null)).is_empty());
        assert_eq!(sanitize_boards(&json!([{}, {}])).len(), 2);
    }
}
