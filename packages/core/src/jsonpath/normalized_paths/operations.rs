//! Resolving normalized paths against documents

use serde_json::Value;

use super::types::{NormalizedPath, PathSegment};

impl NormalizedPath {
    /// Node at this path, if it still exists
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |node, segment| match (segment, node) {
                (PathSegment::Member(name), Value::Object(map)) => map.get(name),
                (PathSegment::Index(index), Value::Array(items)) => items.get(*index),
                _ => None,
            })
    }

    /// Mutable node at this path, if it still exists
    pub fn resolve_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        self.segments
            .iter()
            .try_fold(root, |node, segment| match (segment, node) {
                (PathSegment::Member(name), Value::Object(map)) => map.get_mut(name),
                (PathSegment::Index(index), Value::Array(items)) => items.get_mut(*index),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_nested_members_and_indices() {
        let doc = json!({"a": [{"b": 1}, {"b": 2}]});
        let path = NormalizedPath::from(vec![
            PathSegment::Member("a".to_string()),
            PathSegment::Index(1),
            PathSegment::Member("b".to_string()),
        ]);
        assert_eq!(path.resolve(&doc), Some(&json!(2)));

        let missing = NormalizedPath::from(vec![PathSegment::Index(0)]);
        assert_eq!(missing.resolve(&doc), None);
    }

    #[test]
    fn resolve_mut_allows_in_place_update() {
        let mut doc = json!({"a": [1, 2]});
        let path = NormalizedPath::from(vec![
            PathSegment::Member("a".to_string()),
            PathSegment::Index(0),
        ]);
        if let Some(node) = path.resolve_mut(&mut doc) {
            *node = json!(9);
        }
        assert_eq!(doc, json!({"a": [9, 2]}));
    }

    #[test]
    fn strip_prefix_yields_relative_path() {
        let parent = NormalizedPath::from(vec![PathSegment::Member("a".to_string())]);
        let child = parent.child_member("b");
        assert_eq!(child.strip_prefix(&parent).unwrap().to_string(), "$['b']");
        assert!(child.strip_prefix(&child).unwrap().is_root());
        assert_eq!(parent.strip_prefix(&child), None);
    }
}
