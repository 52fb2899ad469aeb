//! Reference label categories: food groups, locations, warehouses and cookbooks.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of label category managed by the labels board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelKind {
    /// Food groups (dairy, vegetables, ...).
    #[default]
    FoodGroups,
    /// Storage locations inside a warehouse.
    Locations,
    /// Warehouses.
    Warehouses,
    /// Cookbooks.
    Cookbooks,
}

impl LabelKind {
    /// All kinds in board order.
    pub const ALL: [Self; 4] = [
        Self::FoodGroups,
        Self::Locations,
        Self::Warehouses,
        Self::Cookbooks,
    ];

    /// REST resource path segment.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::FoodGroups => "foodGroups",
            Self::Locations => "locations",
            Self::Warehouses => "warehouses",
            Self::Cookbooks => "cookBooks",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::FoodGroups => "Food Groups",
            Self::Locations => "Locations",
            Self::Warehouses => "Warehouses",
            Self::Cookbooks => "Cookbooks",
        }
    }

    /// Short key used on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FoodGroups => "food-groups",
            Self::Locations => "locations",
            Self::Warehouses => "warehouses",
            Self::Cookbooks => "cookbooks",
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for LabelKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "food-groups" | "foodgroups" | "food-group" => Ok(Self::FoodGroups),
            "locations" | "location" => Ok(Self::Locations),
            "warehouses" | "warehouse" => Ok(Self::Warehouses),
            "cookbooks" | "cookbook" | "cook-books" => Ok(Self::Cookbooks),
            _ => Err(format!("unknown label category: {value}")),
        }
    }
}

/// Named category entity as exchanged with the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Server-assigned identifier, empty before creation.
    #[serde(rename = "_id", default)]
    id: String,
    name: String,
}

impl Label {
    /// Creates label with known id.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Creates a label that has not been created on the server yet.
    #[must_use]
    pub fn draft(name: impl Into<String>) -> Self {
        Self::new(String::new(), name)
    }

    /// Returns identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the server has assigned an id.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Body sent when creating or renaming a label.
///
/// Creation sends `{ "name" }`, renaming sends `{ "_id", "name" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelForm {
    /// Empty when creating.
    #[serde(rename = "_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Label name, sent as typed.
    pub name: String,
}

impl LabelForm {
    /// Form for a new label.
    #[must_use]
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
        }
    }

    /// Form renaming an existing label.
    #[must_use]
    pub fn update(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Labels of every kind, each list in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCollection {
    lists: HashMap<LabelKind, Vec<Label>>,
}

impl LabelCollection {
    /// Creates empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels of a kind.
    #[must_use]
    pub fn get(&self, kind: LabelKind) -> &[Label] {
        self.lists.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Replaces a whole list.
    pub fn replace(&mut self, kind: LabelKind, labels: Vec<Label>) {
        self.lists.insert(kind, labels);
    }

    /// Appends a label at the end of its list.
    pub fn append(&mut self, kind: LabelKind, label: Label) {
        self.lists.entry(kind).or_default().push(label);
    }

    /// Replaces the entry whose id is `id`. Returns whether one was found.
    pub fn update(&mut self, kind: LabelKind, id: &str, label: Label) -> bool {
        let Some(slot) = self
            .lists
            .get_mut(&kind)
            .and_then(|list| list.iter_mut().find(|l| l.id == id))
        else {
            return false;
        };
        *slot = label;
        true
    }

    /// Removes entries whose id is `id`. Returns whether any was removed.
    pub fn remove(&mut self, kind: LabelKind, id: &str) -> bool {
        let Some(list) = self.lists.get_mut(&kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|l| l.id != id);
        list.len() != before
    }

    /// Total number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    /// Returns whether no list holds any label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("food-groups", LabelKind::FoodGroups ; "dashed")]
    #[test_case("foodGroups", LabelKind::FoodGroups ; "camel")]
    #[test_case("Location", LabelKind::Locations ; "singular")]
    #[test_case("warehouses", LabelKind::Warehouses ; "plural")]
    #[test_case("cook_books", LabelKind::Cookbooks ; "underscored")]
    fn test_parse_kind(input: &str, expected: LabelKind) {
        assert_eq!(input.parse::<LabelKind>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_kind() {
        assert!("shopping".parse::<LabelKind>().is_err());
    }

    #[test]
    fn test_label_wire_format() {
        let label: Label =
            serde_json::from_str(r#"{"_id":"abc","name":"Dairy","__v":0,"owner":"u1"}"#).unwrap();
        assert_eq!(label, Label::new("abc", "Dairy"));

        let json = serde_json::to_value(Label::new("abc", "Dairy")).unwrap();
        assert_eq!(json, serde_json::json!({"_id": "abc", "name": "Dairy"}));
    }

    #[test]
    fn test_form_wire_format() {
        let create = serde_json::to_value(LabelForm::create("Dairy")).unwrap();
        assert_eq!(create, serde_json::json!({"name": "Dairy"}));

        let update = serde_json::to_value(LabelForm::update("abc", "Milk")).unwrap();
        assert_eq!(update, serde_json::json!({"_id": "abc", "name": "Milk"}));
    }

    #[test]
    fn test_draft_is_not_persisted() {
        assert!(!Label::draft("Dairy").is_persisted());
        assert!(Label::new("abc", "Dairy").is_persisted());
    }

    #[test]
    fn test_update_replaces_exactly_matching_entry() {
        let mut labels = LabelCollection::new();
        labels.replace(
            LabelKind::Locations,
            vec![Label::new("1", "Fridge"), Label::new("2", "Pantry")],
        );

        assert!(labels.update(LabelKind::Locations, "2", Label::new("2", "Cellar")));
        assert_eq!(
            labels.get(LabelKind::Locations),
            &[Label::new("1", "Fridge"), Label::new("2", "Cellar")]
        );
        assert!(!labels.update(LabelKind::Locations, "9", Label::new("9", "Attic")));
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut labels = LabelCollection::new();
        labels.append(LabelKind::Cookbooks, Label::new("1", "Nonna"));
        labels.append(LabelKind::Cookbooks, Label::new("2", "Vegan"));

        assert!(labels.remove(LabelKind::Cookbooks, "1"));
        assert!(!labels.remove(LabelKind::Cookbooks, "1"));
        assert!(!labels.remove(LabelKind::Warehouses, "2"));
        assert_eq!(labels.get(LabelKind::Cookbooks), &[Label::new("2", "Vegan")]);
    }

    #[test]
    fn test_missing_kind_is_empty() {
        let labels = LabelCollection::new();
        assert!(labels.get(LabelKind::Warehouses).is_empty());
        assert!(labels.is_empty());
    }
}
