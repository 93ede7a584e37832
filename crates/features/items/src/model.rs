use serde::{Deserialize, Serialize};

/// Server-assigned item identifier.
pub type ItemId = u64;

pub const DEFAULT_NAME: &str = "New Item";
pub const DEFAULT_KIND: &str = "Unknown";

/// A registry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Item {
    #[cfg_attr(feature = "server", schema(example = 1))]
    pub id: ItemId,
    #[cfg_attr(feature = "server", schema(example = "Kubernetes"))]
    pub name: String,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "server", schema(example = "Orchestrator"))]
    pub kind: String,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { id, name: name.into(), kind: kind.into() }
    }
}

/// Create payload. Both fields are optional; absent, `null` or empty values fall back to
/// [`DEFAULT_NAME`] and [`DEFAULT_KIND`]. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NewItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { name: Some(name.into()), kind: Some(kind.into()) }
    }

    /// Materializes the payload under `id`, applying defaults.
    #[must_use]
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: non_empty(self.name).unwrap_or_else(|| DEFAULT_NAME.to_owned()),
            kind: non_empty(self.kind).unwrap_or_else(|| DEFAULT_KIND.to_owned()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The collection every process starts with.
#[must_use]
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "Kubernetes", "Orchestrator"),
        Item::new(2, "Docker", "Container Runtime"),
        Item::new(3, "Microservices", "Architecture Pattern"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_kind_as_type() {
        let json = serde_json::to_value(Item::new(7, "Foo", "Bar")).expect("serialize");
        assert_eq!(json, serde_json::json!({ "id": 7, "name": "Foo", "type": "Bar" }));
    }

    #[test]
    fn empty_payload_gets_defaults() {
        let item = NewItem::default().into_item(4);
        assert_eq!(item, Item::new(4, "New Item", "Unknown"));
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let payload: NewItem =
            serde_json::from_str(r#"{"name":"","type":null,"extra":true}"#).expect("deserialize");
        assert_eq!(payload.into_item(1), Item::new(1, "New Item", "Unknown"));
    }

    #[test]
    fn provided_fields_are_kept() {
        let payload: NewItem =
            serde_json::from_str(r#"{"name":"Foo","type":"Bar"}"#).expect("deserialize");
        assert_eq!(payload.into_item(9), Item::new(9, "Foo", "Bar"));
    }
}
