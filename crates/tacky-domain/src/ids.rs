//! Opaque string identities for boards, lists and cards.
//!
//! Persisted and imported data may carry any string id, so ids are not
//! parsed. Fresh ids are `<prefix>_<uuid>` and never collide.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn generate() -> Self {
                Self(format!("{}_{}", $prefix, Uuid::new_v4().simple()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(BoardId, "b");
string_id!(ListId, "l");
string_id!(CardId, "c");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let a = CardId::generate();
        let b = CardId::generate();
        assert!(a.as_str().starts_with("c_"));
        assert!(ListId::generate().as_str().starts_with("l_"));
        assert!(BoardId::generate().as_str().starts_with("b_"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ListId::from("l_abc1234");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"l_abc1234\"");
        let back: ListId = serde_json::from_str("\"l_abc1234\"").unwrap();
        assert_eq!(back, id);
    }
}
