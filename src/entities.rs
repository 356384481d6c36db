//! Concrete option record for select widgets fed from JSON.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::node::TreeItem;

/// One entry of a hierarchical option list.
///
/// Mirrors the wire shape select widgets consume: `id`, optional `parentId`,
/// a display label, optional nested `children`, plus arbitrary payload fields
/// which round-trip untouched through every transform (captured by the
/// flattened `extra` map).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SelectOption>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SelectOption {
    /// A root-level option without parent linkage.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            label: label.into(),
            children: None,
            extra: BTreeMap::new(),
        }
    }

    /// An option linked to a parent by id.
    pub fn with_parent(
        id: impl Into<String>,
        label: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            ..Self::new(id, label)
        }
    }

    /// Adds one payload field, builder-style.
    pub fn with_extra(mut self, field: impl Into<String>, value: Value) -> Self {
        self.extra.insert(field.into(), value);
        self
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{}", self.label)
        }
    }
}

impl TreeItem for SelectOption {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }

    // An empty parentId is "no parent": widgets routinely send "" for roots.
    fn parent_key(&self) -> Option<String> {
        match self.parent_id.as_deref() {
            None | Some("") => None,
            Some(parent) => Some(parent.to_owned()),
        }
    }

    fn children(&self) -> Option<&[Self]> {
        self.children.as_deref()
    }

    fn set_children(&mut self, children: Vec<Self>) {
        self.children = Some(children);
    }

    fn take_children(&mut self) -> Vec<Self> {
        self.children.take().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_parent_id_counts_as_root() {
        let mut option = SelectOption::new("1", "root");
        option.parent_id = Some(String::new());
        assert_eq!(option.parent_key(), None);
    }

    #[test]
    fn test_json_round_trip_preserves_payload() {
        let json = r#"{"id":"7","parentId":"3","label":"Pear","disabled":true,"weight":12}"#;
        let option: SelectOption = serde_json::from_str(json).unwrap();

        assert_eq!(option.id, "7");
        assert_eq!(option.parent_id.as_deref(), Some("3"));
        assert_eq!(option.extra.get("disabled"), Some(&json!(true)));
        assert_eq!(option.extra.get("weight"), Some(&json!(12)));

        let back = serde_json::to_value(&option).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(json).unwrap());
    }

    #[test]
    fn test_children_omitted_from_json_when_absent() {
        let option = SelectOption::new("1", "root");
        let json = serde_json::to_string(&option).unwrap();
        assert!(!json.contains("children"));
        assert!(!json.contains("parentId"));
    }

    #[test]
    fn test_take_children_clears_the_field() {
        let mut option = SelectOption::new("1", "root");
        option.set_children(vec![SelectOption::with_parent("2", "child", "1")]);

        let children = option.take_children();
        assert_eq!(children.len(), 1);
        assert!(option.children.is_none());
        assert!(option.take_children().is_empty());
    }

    #[test]
    fn test_display_falls_back_to_id() {
        assert_eq!(SelectOption::new("1", "Fruit").to_string(), "Fruit");
        assert_eq!(SelectOption::new("1", "").to_string(), "1");
    }
}
