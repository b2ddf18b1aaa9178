// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Records that carry a generated identifier
pub trait Identified {
    fn id(&self) -> &str;
}

/// A field pointing at another record.
///
/// Stored as the referenced record's id. Read paths that join the referenced
/// collection replace it with the full record; when the record no longer
/// exists the id is kept as-is. Serializes untagged, so clients see either a
/// string or a nested object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Resolved(Box<T>),
    Id(String),
}

impl<T: Identified> Reference<T> {
    /// Build a reference from a stored id and the record it resolved to, if any
    pub fn resolve(id: impl Into<String>, record: Option<T>) -> Self {
        match record {
            Some(record) => Reference::Resolved(Box::new(record)),
            None => Reference::Id(id.into()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Reference::Resolved(record) => record.id(),
            Reference::Id(id) => id,
        }
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Reference::Resolved(record) => Some(record),
            Reference::Id(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Reference::Resolved(_))
    }
}

impl<T> From<String> for Reference<T> {
    fn from(id: String) -> Self {
        Reference::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Node {
        id: String,
        label: String,
    }

    impl Identified for Node {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn unresolved_reference_serializes_as_plain_id() {
        let reference: Reference<Node> = Reference::resolve("n1", None);
        assert_eq!(serde_json::to_value(&reference).unwrap(), json!("n1"));
        assert!(!reference.is_resolved());
    }

    #[test]
    fn resolved_reference_serializes_as_record() {
        let node = Node { id: "n1".into(), label: "first".into() };
        let reference = Reference::resolve("n1", Some(node.clone()));

        assert_eq!(reference.id(), "n1");
        assert_eq!(reference.resolved(), Some(&node));
        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!({ "id": "n1", "label": "first" })
        );
    }

    #[test]
    fn deserializes_either_shape() {
        let plain: Reference<Node> = serde_json::from_value(json!("n2")).unwrap();
        assert_eq!(plain, Reference::Id("n2".into()));

        let nested: Reference<Node> =
            serde_json::from_value(json!({ "id": "n3", "label": "third" })).unwrap();
        assert_eq!(nested.id(), "n3");
        assert!(nested.is_resolved());
    }
}
