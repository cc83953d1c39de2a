use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::CardId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub description: String,
    /// Free-text due date as entered; empty when unset.
    pub due: String,
    /// Label colour identifiers, see [`crate::LABELS`].
    pub labels: Vec<String>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CardId::generate(),
            title: title.into(),
            description: String::new(),
            due: String::new(),
            labels: Vec::new(),
        }
    }

    /// The card created by the "add card" action.
    pub fn placeholder() -> Self {
        Self::new("New Card")
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = due.into();
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Parses `due` as an ISO calendar date. Anything else is kept as text only.
    pub fn due_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.due.trim(), "%Y-%m-%d").ok()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date().is_some_and(|due| due < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_card() {
        let card = Card::placeholder();
        assert_eq!(card.title, "New Card");
        assert!(card.description.is_empty());
        assert!(card.due.is_empty());
        assert!(card.labels.is_empty());
        assert!(card.id.as_str().starts_with("c_"));
    }

    #[test]
    fn test_due_date_parsing() {
        let card = Card::new("Ship").with_due("2026-03-01");
        assert_eq!(card.due_date(), NaiveDate::from_ymd_opt(2026, 3, 1));

        let fuzzy = Card::new("Ship").with_due("next week");
        assert_eq!(fuzzy.due_date(), None);
        assert!(!fuzzy.is_overdue(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()));
    }

    #[test]
    fn test_is_overdue() {
        let card = Card::new("Ship").with_due("2026-03-01");
        assert!(card.is_overdue(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()));
        assert!(!card.is_overdue(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
    }

    #[test]
    fn test_serialized_shape() {
        let card = Card::new("Write docs")
            .with_description("README")
            .with_labels(["#ff6b6b"]);
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["title"], "Write docs");
        assert_eq!(value["description"], "README");
        assert_eq!(value["due"], "");
        assert_eq!(value["labels"][0], "#ff6b6b");
        assert_eq!(value.as_object().unwrap().len(), 5);
    }
}
